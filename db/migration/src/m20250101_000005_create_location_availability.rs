use sea_orm_migration::prelude::*;

use crate::{
    m20250101_000003_create_location::Location, m20250101_000004_create_timeslot::Timeslot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocationAvailability::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LocationAvailability::LocationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(LocationAvailability::TimeslotId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(LocationAvailability::LocationId)
                            .col(LocationAvailability::TimeslotId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_availability_location")
                            .from(LocationAvailability::Table, LocationAvailability::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_availability_timeslot")
                            .from(LocationAvailability::Table, LocationAvailability::TimeslotId)
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
                    .name("IX_LocationAvailability_timeslot-id")
                    .table(LocationAvailability::Table)
                    .col(LocationAvailability::TimeslotId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LocationAvailability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum LocationAvailability {
    Table,
    LocationId,
    TimeslotId,
}
