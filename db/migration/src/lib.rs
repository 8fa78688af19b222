pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_division;
mod m20250101_000002_create_team;
mod m20250101_000003_create_location;
mod m20250101_000004_create_timeslot;
mod m20250101_000005_create_location_availability;
mod m20250101_000006_create_team_availability;
mod m20250101_000007_create_previous_game;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_division::Migration),
            Box::new(m20250101_000002_create_team::Migration),
            Box::new(m20250101_000003_create_location::Migration),
            Box::new(m20250101_000004_create_timeslot::Migration),
            Box::new(m20250101_000005_create_location_availability::Migration),
            Box::new(m20250101_000006_create_team_availability::Migration),
            Box::new(m20250101_000007_create_previous_game::Migration),
        ]
    }
}
