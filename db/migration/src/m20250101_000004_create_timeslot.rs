use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Timeslot::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Timeslot::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Timeslot::Date).date().not_null())
                    .col(
                        ColumnDef::new(Timeslot::Modifier)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("UX_Timeslot_date-modifier")
                    .table(Timeslot::Table)
                    .col(Timeslot::Date)
                    .col(Timeslot::Modifier)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Timeslot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Timeslot {
    Table,
    Id,
    Date,
    Modifier,
}
