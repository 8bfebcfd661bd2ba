//! `SeaORM` Entity for the users table.
//!
//! User rows mirror the external identity provider; this service only reads
//! them for display names and foreign keys.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seminars::Entity")]
    Seminars,
    #[sea_orm(has_many = "super::seminar_participants::Entity")]
    SeminarParticipants,
}

impl Related<super::seminars::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Seminars.def()
    }
}

impl Related<super::seminar_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeminarParticipants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
