use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_toof_pic_table::ToofPic;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key is what keeps a user from holding two
        // records for the same pic, even under concurrent acquisition.
        manager
            .create_table(
                Table::create()
                    .table(ToofPicOwnership::Table)
                    .if_not_exists()
                    .col(string(ToofPicOwnership::OwnerId))
                    .col(string(ToofPicOwnership::PicId))
                    .col(timestamp(ToofPicOwnership::AcquiredAt))
                    .primary_key(
                        Index::create()
                            .col(ToofPicOwnership::OwnerId)
                            .col(ToofPicOwnership::PicId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_toof_pic_ownership_pic_id")
                            .from(ToofPicOwnership::Table, ToofPicOwnership::PicId)
                            .to(ToofPic::Table, ToofPic::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_toof_pic_ownership_pic_id")
                    .table(ToofPicOwnership::Table)
                    .col(ToofPicOwnership::PicId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_toof_pic_ownership_pic_id")
                    .table(ToofPicOwnership::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ToofPicOwnership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ToofPicOwnership {
    Table,
    OwnerId,
    PicId,
    AcquiredAt,
}
