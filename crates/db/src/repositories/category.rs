//! Category repository.
//!
//! Categories are a shared reference vocabulary; the application only reads
//! them (for form dropdowns and name joins). Rows are provisioned by the
//! seeder or operators.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::entities::categories;

/// Category repository for read operations.
#[derive(Debug)]
#[cfg_attr(not(test), derive(Clone))]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<categories::Model>, DbErr> {
        categories::Entity::find().all(&self.db).await
    }
}
