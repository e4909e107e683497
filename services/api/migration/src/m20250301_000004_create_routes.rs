use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Routes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Routes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Routes::Name).string().not_null())
                    .col(ColumnDef::new(Routes::Distance).double().not_null())
                    .col(ColumnDef::new(Routes::Duration).double().not_null())
                    .col(ColumnDef::new(Routes::UserId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Routes::Table, Routes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_routes_user_id")
                    .table(Routes::Table)
                    .col(Routes::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Routes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Routes {
    Table,
    Id,
    Name,
    Distance,
    Duration,
    UserId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
