//! `SeaORM` entity for a moment at which games can be played. Unique on
//! `(date, modifier)`; the modifier may be an empty string.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "timeslot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: NaiveDate,
    pub modifier: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::location_availability::Entity")]
    LocationAvailability,
    #[sea_orm(has_many = "super::team_availability::Entity")]
    TeamAvailability,
}

impl Related<super::location_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationAvailability.def()
    }
}

impl Related<super::team_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamAvailability.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
