//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod category;
pub mod participant;
pub mod seminar;

pub use category::CategoryRepository;
pub use participant::{ParticipantError, ParticipantRepository};
pub use seminar::{
    CreateSeminarInput, SeminarDetails, SeminarError, SeminarRepository, SeminarSummary,
    UpdateSeminarInput,
};

#[cfg(test)]
mod seminar_tests;
