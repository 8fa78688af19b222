use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_division::Division;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Team::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Team::Name).string().not_null())
                    .col(ColumnDef::new(Team::DivisionId).integer().not_null())
                    .col(ColumnDef::new(Team::PreviousYearRanking).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_division")
                            .from(Team::Table, Team::DivisionId)
                            .to(Division::Table, Division::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Team_division-id")
                    .table(Team::Table)
                    .col(Team::DivisionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Team {
    Table,
    Id,
    Name,
    DivisionId,
    PreviousYearRanking,
}
