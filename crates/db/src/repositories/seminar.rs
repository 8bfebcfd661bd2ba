//! Seminar repository for seminar database operations.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QuerySelect, RelationTrait, Set,
};
use uuid::Uuid;

use crate::entities::{categories, seminar_participants, seminars, users};

/// Error types for seminar operations.
#[derive(Debug, thiserror::Error)]
pub enum SeminarError {
    /// Seminar not found.
    #[error("Seminar not found: {0}")]
    NotFound(i32),

    /// Acting user is not the seminar's organizer.
    #[error("User is not the organizer of this seminar")]
    NotOrganizer,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a seminar.
#[derive(Debug, Clone)]
pub struct CreateSeminarInput {
    /// Seminar topic.
    pub topic: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Seminar details.
    pub details: String,
    /// Organizer (the submitting user).
    pub organizer_id: Uuid,
    /// Scheduled date-time.
    pub date_and_time: NaiveDateTime,
    /// Duration.
    pub duration: i32,
    /// Category ID.
    pub category_id: i32,
}

/// Input for editing a seminar. Every mutable field is overwritten; there is
/// no partial update.
#[derive(Debug, Clone)]
pub struct UpdateSeminarInput {
    /// New topic.
    pub topic: String,
    /// New lecturer.
    pub lecturer: String,
    /// New details.
    pub details: String,
    /// New scheduled date-time.
    pub date_and_time: NaiveDateTime,
    /// New duration.
    pub duration: i32,
    /// New category ID.
    pub category_id: i32,
}

/// Listing row: seminar fields plus category name and organizer display name.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SeminarSummary {
    /// Seminar ID.
    pub id: i32,
    /// Seminar topic.
    pub topic: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Scheduled date-time.
    pub date_and_time: NaiveDateTime,
    /// Category name.
    pub category: String,
    /// Organizer display name.
    pub organizer: String,
}

/// Full seminar projection for the details view.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct SeminarDetails {
    /// Seminar ID.
    pub id: i32,
    /// Seminar topic.
    pub topic: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Seminar details.
    pub details: String,
    /// Scheduled date-time.
    pub date_and_time: NaiveDateTime,
    /// Duration.
    pub duration: i32,
    /// Category name.
    pub category: String,
    /// Organizer display name.
    pub organizer: String,
}

/// Seminar repository for CRUD operations.
#[derive(Debug)]
#[cfg_attr(not(test), derive(Clone))]
pub struct SeminarRepository {
    db: DatabaseConnection,
}

impl SeminarRepository {
    /// Creates a new seminar repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all seminars with category and organizer names, in stored
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<SeminarSummary>, DbErr> {
        summary_select(seminars::Entity::find())
            .into_model::<SeminarSummary>()
            .all(&self.db)
            .await
    }

    /// Lists the seminars a participant has joined, via the join table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_joined(&self, participant_id: Uuid) -> Result<Vec<SeminarSummary>, DbErr> {
        summary_select(
            seminar_participants::Entity::find()
                .filter(seminar_participants::Column::ParticipantId.eq(participant_id))
                .join(
                    JoinType::InnerJoin,
                    seminar_participants::Relation::Seminars.def(),
                ),
        )
        .into_model::<SeminarSummary>()
        .all(&self.db)
        .await
    }

    /// Finds a seminar by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<seminars::Model>, DbErr> {
        seminars::Entity::find_by_id(id).one(&self.db).await
    }

    /// Finds a seminar and verifies the acting user is its organizer.
    ///
    /// This is the ownership guard for every mutation path (edit, delete,
    /// and their confirmation reads).
    ///
    /// # Errors
    ///
    /// Returns `SeminarError::NotFound` if the seminar does not exist and
    /// `SeminarError::NotOrganizer` if it belongs to someone else.
    pub async fn find_owned(&self, id: i32, user_id: Uuid) -> Result<seminars::Model, SeminarError> {
        let seminar = self
            .find_by_id(id)
            .await?
            .ok_or(SeminarError::NotFound(id))?;

        if seminar.organizer_id != user_id {
            return Err(SeminarError::NotOrganizer);
        }

        Ok(seminar)
    }

    /// Gets the full details projection for a single seminar.
    ///
    /// # Errors
    ///
    /// Returns `SeminarError::NotFound` if the seminar does not exist.
    pub async fn get_details(&self, id: i32) -> Result<SeminarDetails, SeminarError> {
        seminars::Entity::find()
            .filter(seminars::Column::Id.eq(id))
            .join(JoinType::InnerJoin, seminars::Relation::Categories.def())
            .join(JoinType::InnerJoin, seminars::Relation::Users.def())
            .select_only()
            .column(seminars::Column::Id)
            .column(seminars::Column::Topic)
            .column(seminars::Column::Lecturer)
            .column(seminars::Column::Details)
            .column(seminars::Column::DateAndTime)
            .column(seminars::Column::Duration)
            .column_as(categories::Column::Name, "category")
            .column_as(users::Column::Username, "organizer")
            .into_model::<SeminarDetails>()
            .one(&self.db)
            .await?
            .ok_or(SeminarError::NotFound(id))
    }

    /// Creates a new seminar owned by the submitting user.
    ///
    /// The category reference is not checked here; a dangling `category_id`
    /// is rejected by the foreign-key constraint.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateSeminarInput) -> Result<seminars::Model, DbErr> {
        let seminar = seminars::ActiveModel {
            topic: Set(input.topic),
            lecturer: Set(input.lecturer),
            details: Set(input.details),
            organizer_id: Set(input.organizer_id),
            date_and_time: Set(input.date_and_time),
            duration: Set(input.duration),
            category_id: Set(input.category_id),
            created_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        seminar.insert(&self.db).await
    }

    /// Overwrites all mutable fields of a seminar, organizer only.
    ///
    /// # Errors
    ///
    /// Returns `SeminarError::NotFound` / `SeminarError::NotOrganizer` under
    /// the ownership rules, or a database error.
    pub async fn update(
        &self,
        id: i32,
        user_id: Uuid,
        input: UpdateSeminarInput,
    ) -> Result<seminars::Model, SeminarError> {
        let seminar = self.find_owned(id, user_id).await?;

        let mut seminar: seminars::ActiveModel = seminar.into();
        seminar.topic = Set(input.topic);
        seminar.lecturer = Set(input.lecturer);
        seminar.details = Set(input.details);
        seminar.date_and_time = Set(input.date_and_time);
        seminar.duration = Set(input.duration);
        seminar.category_id = Set(input.category_id);

        Ok(seminar.update(&self.db).await?)
    }

    /// Deletes a seminar, organizer only. Participant rows go with it via
    /// the foreign-key cascade.
    ///
    /// # Errors
    ///
    /// Returns `SeminarError::NotFound` / `SeminarError::NotOrganizer` under
    /// the ownership rules, or a database error.
    pub async fn delete(&self, id: i32, user_id: Uuid) -> Result<(), SeminarError> {
        self.find_owned(id, user_id).await?;

        seminars::Entity::delete_by_id(id).exec(&self.db).await?;

        Ok(())
    }
}

/// Applies the summary projection (columns + category/organizer joins) to a
/// select rooted at or joined through seminars.
fn summary_select<E: EntityTrait>(select: sea_orm::Select<E>) -> sea_orm::Select<E> {
    select
        .join(JoinType::InnerJoin, seminars::Relation::Categories.def())
        .join(JoinType::InnerJoin, seminars::Relation::Users.def())
        .select_only()
        .column(seminars::Column::Id)
        .column(seminars::Column::Topic)
        .column(seminars::Column::Lecturer)
        .column(seminars::Column::DateAndTime)
        .column_as(categories::Column::Name, "category")
        .column_as(users::Column::Username, "organizer")
}
