use crate::db::{DbConnection, DbPool};
use crate::domain::craft::{Craft, NewCraft};
use crate::domain::types::CraftId;

pub mod craft;
pub mod errors;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for craft entities.
pub trait CraftReader {
    /// List every craft ordered by name, then id.
    fn list_crafts(&self) -> RepositoryResult<Vec<Craft>>;
    /// Retrieve a craft by its identifier, failing with
    /// [`RepositoryError::NotFound`] when it does not exist.
    fn get_craft_by_id(&self, id: CraftId) -> RepositoryResult<Craft>;
    /// Number of crafts in the catalog.
    fn count_crafts(&self) -> RepositoryResult<usize>;
}

/// Write operations for craft entities.
///
/// Each call is atomic; concurrent writes to the same id are
/// last-writer-wins.
pub trait CraftWriter {
    /// Persist a new craft and return it with its generated id and timestamp.
    fn create_craft(&self, craft: &NewCraft) -> RepositoryResult<Craft>;
    /// Persist several crafts at once. Either all of them are stored or none.
    fn create_crafts(&self, crafts: &[NewCraft]) -> RepositoryResult<Vec<Craft>>;
    /// Replace all mutable fields of an existing craft.
    fn update_craft(&self, id: CraftId, craft: &NewCraft) -> RepositoryResult<Craft>;
    /// Hard-delete a craft. Deleting a missing id is an error.
    fn delete_craft(&self, id: CraftId) -> RepositoryResult<()>;
}
