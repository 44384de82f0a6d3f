use crate::domain::craft::Craft;
use crate::repository::CraftReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the index page.
///
/// Fetches the whole catalog ordered by name. Repository errors are logged
/// and translated into `ServiceError` so that the HTTP route can remain a
/// thin wrapper.
pub fn show_index<R>(repo: &R) -> ServiceResult<Vec<Craft>>
where
    R: CraftReader,
{
    match repo.list_crafts() {
        Ok(crafts) => Ok(crafts),
        Err(e) => {
            log::error!("Failed to list crafts: {e}");
            Err(ServiceError::Internal)
        }
    }
}
