use sea_orm_migration::prelude::*;

use crate::m20250101_000002_create_team::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PreviousGame::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PreviousGame::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PreviousGame::Date).date().not_null())
                    .col(ColumnDef::new(PreviousGame::TeamOneId).integer().not_null())
                    .col(ColumnDef::new(PreviousGame::TeamTwoId).integer().not_null())
                    .col(ColumnDef::new(PreviousGame::TeamOneScore).integer().null())
                    .col(ColumnDef::new(PreviousGame::TeamTwoScore).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_previous_game_team_one")
                            .from(PreviousGame::Table, PreviousGame::TeamOneId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_previous_game_team_two")
                            .from(PreviousGame::Table, PreviousGame::TeamTwoId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_PreviousGame_date")
                    .table(PreviousGame::Table)
                    .col(PreviousGame::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PreviousGame::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum PreviousGame {
    Table,
    Id,
    Date,
    TeamOneId,
    TeamTwoId,
    TeamOneScore,
    TeamTwoScore,
}
