//! Initial schema: users, categories, seminars, and the participant join
//! table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS seminar_participants, seminars, categories, users CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Users mirror the external identity provider (stable id + display name)
CREATE TABLE users (
    id UUID PRIMARY KEY,
    username VARCHAR(60) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Shared classification vocabulary for seminars
CREATE TABLE categories (
    id SERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL
);

CREATE TABLE seminars (
    id SERIAL PRIMARY KEY,
    topic VARCHAR(100) NOT NULL,
    lecturer VARCHAR(60) NOT NULL,
    details VARCHAR(500) NOT NULL,
    organizer_id UUID NOT NULL REFERENCES users(id),
    date_and_time TIMESTAMP NOT NULL,
    duration INTEGER NOT NULL,
    category_id INTEGER NOT NULL REFERENCES categories(id),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Index for the organizer's own seminars
CREATE INDEX idx_seminars_organizer ON seminars(organizer_id);

-- Index for category joins on the listing
CREATE INDEX idx_seminars_category ON seminars(category_id);

-- Join table; the composite key enforces one row per (seminar, participant).
-- Deleting a seminar cascades its participant rows.
CREATE TABLE seminar_participants (
    seminar_id INTEGER NOT NULL REFERENCES seminars(id) ON DELETE CASCADE,
    participant_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    PRIMARY KEY (seminar_id, participant_id)
);

-- Index for a participant's joined listing
CREATE INDEX idx_participants_user ON seminar_participants(participant_id);
";
