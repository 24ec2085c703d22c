use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ToofPic::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ToofPic::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string(ToofPic::Name))
                    .col(string(ToofPic::Link))
                    .col(timestamp(ToofPic::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ToofPic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ToofPic {
    Table,
    Id,
    Name,
    Link,
    CreatedAt,
}
