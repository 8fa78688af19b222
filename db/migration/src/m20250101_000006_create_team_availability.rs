use sea_orm_migration::prelude::*;

use crate::{m20250101_000002_create_team::Team, m20250101_000004_create_timeslot::Timeslot};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamAvailability::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TeamAvailability::TeamId).integer().not_null())
                    .col(
                        ColumnDef::new(TeamAvailability::TimeslotId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TeamAvailability::TeamId)
                            .col(TeamAvailability::TimeslotId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_availability_team")
                            .from(TeamAvailability::Table, TeamAvailability::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_availability_timeslot")
                            .from(TeamAvailability::Table, TeamAvailability::TimeslotId)
                            .to(Timeslot::Table, Timeslot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_TeamAvailability_timeslot-id")
                    .table(TeamAvailability::Table)
                    .col(TeamAvailability::TimeslotId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum TeamAvailability {
    Table,
    TeamId,
    TimeslotId,
}
