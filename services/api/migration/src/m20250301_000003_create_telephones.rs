use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Telephones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Telephones::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Telephones::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Telephones::PhoneNumber)
                            .string_len(50)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Telephones::Table, Telephones::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_telephones_user_id")
                    .table(Telephones::Table)
                    .col(Telephones::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Telephones::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Telephones {
    Table,
    Id,
    UserId,
    PhoneNumber,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
