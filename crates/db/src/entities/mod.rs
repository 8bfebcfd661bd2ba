//! `SeaORM` entity definitions for the seminar schema.

pub mod categories;
pub mod seminar_participants;
pub mod seminars;
pub mod users;
