//! `SeaORM` Entity for the seminar_participants join table.
//!
//! Composite primary key (seminar, participant) with no payload columns;
//! the key itself enforces at most one row per pair.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "seminar_participants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub seminar_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub participant_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seminars::Entity",
        from = "Column::SeminarId",
        to = "super::seminars::Column::Id"
    )]
    Seminars,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ParticipantId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::seminars::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seminars.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
