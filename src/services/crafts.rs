use crate::domain::craft::Craft;
use crate::domain::types::CraftId;
use crate::forms::crafts::CraftFormPayload;
use crate::repository::{CraftReader, CraftWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

/// Identifiers from the URL that cannot exist are reported as not found.
fn craft_id(raw: i32) -> ServiceResult<CraftId> {
    CraftId::new(raw).map_err(|_| ServiceError::NotFound)
}

fn repository_failure(action: &str, err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        RepositoryError::ValidationError(message) => ServiceError::TypeConstraint(message),
        err => {
            log::error!("Failed to {action}: {err}");
            ServiceError::Internal
        }
    }
}

/// Fetches a single craft, e.g. to prefill the edit form.
pub fn show_craft<R>(craft_id_raw: i32, repo: &R) -> ServiceResult<Craft>
where
    R: CraftReader,
{
    let id = craft_id(craft_id_raw)?;
    repo.get_craft_by_id(id)
        .map_err(|e| repository_failure("get craft", e))
}

/// Stores a new craft built from a validated form payload.
pub fn add_craft<R>(payload: CraftFormPayload, repo: &R) -> ServiceResult<Craft>
where
    R: CraftWriter,
{
    let craft = payload.into_new_craft();
    let created = repo
        .create_craft(&craft)
        .map_err(|e| repository_failure("create craft", e))?;

    log::info!("Created craft {} '{}'", created.id, created.name);
    Ok(created)
}

/// Replaces every mutable field of an existing craft.
///
/// `id` and `date_created` are kept. Fails with [`ServiceError::NotFound`]
/// when the craft does not exist.
pub fn update_craft<R>(
    craft_id_raw: i32,
    payload: CraftFormPayload,
    repo: &R,
) -> ServiceResult<Craft>
where
    R: CraftWriter,
{
    let id = craft_id(craft_id_raw)?;
    let craft = payload.into_new_craft();

    repo.update_craft(id, &craft)
        .map_err(|e| repository_failure("update craft", e))
}

/// Deletes a craft and returns the removed record.
///
/// Deleting an already deleted craft is an error, not a no-op.
pub fn delete_craft<R>(craft_id_raw: i32, repo: &R) -> ServiceResult<Craft>
where
    R: CraftReader + CraftWriter,
{
    let id = craft_id(craft_id_raw)?;

    let craft = repo
        .get_craft_by_id(id)
        .map_err(|e| repository_failure("get craft", e))?;

    repo.delete_craft(id)
        .map_err(|e| repository_failure("delete craft", e))?;

    log::info!("Deleted craft {} '{}'", craft.id, craft.name);
    Ok(craft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ArtistName, CraftName, CraftPrice, MaterialName, StockQuantity};
    use crate::repository::test::TestRepository;

    fn payload(name: &str, material: Option<&str>) -> CraftFormPayload {
        CraftFormPayload {
            name: CraftName::new(name).unwrap(),
            description: None,
            material: material.map(|m| MaterialName::new(m).unwrap()),
            artist_name: Some(ArtistName::new("Sita K.").unwrap()),
            price: CraftPrice::new(2200.0).unwrap(),
            stock_quantity: StockQuantity::new(5).unwrap(),
        }
    }

    #[test]
    fn created_craft_round_trips() {
        let repo = TestRepository::default();

        let created = add_craft(payload("Blue Pottery Vase", Some("Clay")), &repo).unwrap();
        let fetched = show_craft(created.id.get(), &repo).unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Blue Pottery Vase");
        assert_eq!(fetched.material.unwrap(), "Clay");
        assert_eq!(fetched.price, 2200.0);
        assert_eq!(fetched.stock_quantity, 5);
    }

    #[test]
    fn update_replaces_fields_and_keeps_identity() {
        let repo = TestRepository::default();
        let created = add_craft(payload("Terracotta Horse", Some("Clay")), &repo).unwrap();

        let updated = update_craft(
            created.id.get(),
            payload("Terracotta Horse (large)", None),
            &repo,
        )
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date_created, created.date_created);
        assert_eq!(updated.name, "Terracotta Horse (large)");
        assert!(updated.material.is_none());
        assert_eq!(show_craft(created.id.get(), &repo).unwrap(), updated);
    }

    #[test]
    fn update_of_missing_craft_is_not_found() {
        let repo = TestRepository::default();
        let err = update_craft(42, payload("Ghost", None), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn deleted_craft_is_gone_for_every_operation() {
        let repo = TestRepository::default();
        let created = add_craft(payload("Wooden Elephant", Some("Wood")), &repo).unwrap();
        let id = created.id.get();

        let deleted = delete_craft(id, &repo).unwrap();
        assert_eq!(deleted.name, "Wooden Elephant");

        assert_eq!(show_craft(id, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(
            update_craft(id, payload("Wooden Elephant", None), &repo).unwrap_err(),
            ServiceError::NotFound
        );
        assert_eq!(delete_craft(id, &repo).unwrap_err(), ServiceError::NotFound);
    }

    #[test]
    fn non_positive_ids_are_not_found() {
        let repo = TestRepository::default();
        assert_eq!(show_craft(0, &repo).unwrap_err(), ServiceError::NotFound);
        assert_eq!(delete_craft(-1, &repo).unwrap_err(), ServiceError::NotFound);
    }
}
