//! `SeaORM` entity for a physical venue a game can be played at.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::location_availability::Entity")]
    LocationAvailability,
}

impl Related<super::location_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocationAvailability.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
