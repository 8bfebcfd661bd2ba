//! `SeaORM` Entity for the seminars table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "seminars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub topic: String,
    pub lecturer: String,
    pub details: String,
    pub organizer_id: Uuid,
    /// Scheduled date-time; the source format carries no timezone.
    pub date_and_time: DateTime,
    pub duration: i32,
    pub category_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Categories,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OrganizerId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_many = "super::seminar_participants::Entity")]
    SeminarParticipants,
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::seminar_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeminarParticipants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
