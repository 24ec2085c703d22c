use sea_orm::entity::prelude::*;

/// Catalog entry. The id carries the rarity code as its first character
/// followed by the per-rarity sequence number (e.g. `C001`).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "toof_pic")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub link: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::toof_pic_ownership::Entity")]
    ToofPicOwnership,
}

impl Related<super::toof_pic_ownership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ToofPicOwnership.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
