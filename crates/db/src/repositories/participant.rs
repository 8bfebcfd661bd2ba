//! Participant repository: membership of users in seminars.
//!
//! The join table is a set keyed by (seminar, participant): join is a no-op
//! if the pair is present, leave fails if it is absent.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::{seminar_participants, seminars};

/// Error types for join/leave operations.
#[derive(Debug, thiserror::Error)]
pub enum ParticipantError {
    /// Seminar not found.
    #[error("Seminar not found: {0}")]
    SeminarNotFound(i32),

    /// The user holds no join row for this seminar.
    #[error("User has not joined this seminar")]
    NotJoined,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Participant repository for membership operations.
#[derive(Debug)]
#[cfg_attr(not(test), derive(Clone))]
pub struct ParticipantRepository {
    db: DatabaseConnection,
}

impl ParticipantRepository {
    /// Creates a new participant repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether a user has joined a seminar.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn is_joined(&self, seminar_id: i32, participant_id: Uuid) -> Result<bool, DbErr> {
        let existing = seminar_participants::Entity::find_by_id((seminar_id, participant_id))
            .one(&self.db)
            .await?;

        Ok(existing.is_some())
    }

    /// Joins a user to a seminar.
    ///
    /// Returns `true` if a join row was created and `false` if the user had
    /// already joined (the operation is idempotent). No capacity check is
    /// performed. The composite primary key backstops the read-then-insert
    /// window under concurrent joins.
    ///
    /// # Errors
    ///
    /// Returns `ParticipantError::SeminarNotFound` if the seminar does not
    /// exist, or a database error.
    pub async fn join(&self, seminar_id: i32, participant_id: Uuid) -> Result<bool, ParticipantError> {
        let seminar = seminars::Entity::find_by_id(seminar_id).one(&self.db).await?;
        if seminar.is_none() {
            return Err(ParticipantError::SeminarNotFound(seminar_id));
        }

        if self.is_joined(seminar_id, participant_id).await? {
            return Ok(false);
        }

        let participant = seminar_participants::ActiveModel {
            seminar_id: Set(seminar_id),
            participant_id: Set(participant_id),
        };
        participant.insert(&self.db).await?;

        Ok(true)
    }

    /// Removes a user's join row for a seminar.
    ///
    /// # Errors
    ///
    /// Returns `ParticipantError::SeminarNotFound` if the seminar does not
    /// exist and `ParticipantError::NotJoined` if no join row exists for
    /// this user (including a retry after a successful leave).
    pub async fn leave(&self, seminar_id: i32, participant_id: Uuid) -> Result<(), ParticipantError> {
        let seminar = seminars::Entity::find_by_id(seminar_id).one(&self.db).await?;
        if seminar.is_none() {
            return Err(ParticipantError::SeminarNotFound(seminar_id));
        }

        let result = seminar_participants::Entity::delete_by_id((seminar_id, participant_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ParticipantError::NotJoined);
        }

        Ok(())
    }

    /// Lists the join rows of a seminar.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn participants_of(
        &self,
        seminar_id: i32,
    ) -> Result<Vec<seminar_participants::Model>, DbErr> {
        seminar_participants::Entity::find()
            .filter(seminar_participants::Column::SeminarId.eq(seminar_id))
            .all(&self.db)
            .await
    }
}
