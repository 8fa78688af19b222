//! `SeaORM` entity for a historical game result. Consumed only by the
//! recency penalty in the weighter; never written by this crate.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "previous_game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: NaiveDate,
    pub team_one_id: i32,
    pub team_two_id: i32,
    pub team_one_score: Option<i32>,
    pub team_two_score: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamOneId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TeamOne,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamTwoId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TeamTwo,
}

impl ActiveModelBehavior for ActiveModel {}
