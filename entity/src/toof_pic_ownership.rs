use sea_orm::entity::prelude::*;

/// Ledger row. `(owner_id, pic_id)` is the primary key, so a user can hold at
/// most one record per pic.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "toof_pic_ownership")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub pic_id: String,
    pub acquired_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::toof_pic::Entity",
        from = "Column::PicId",
        to = "super::toof_pic::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ToofPic,
}

impl Related<super::toof_pic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ToofPic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
