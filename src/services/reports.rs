use crate::domain::report::InventorySummary;
use crate::repository::CraftReader;

use super::{ServiceError, ServiceResult};

/// Builds the inventory summary from a fresh snapshot of the catalog.
pub fn show_reports<R>(repo: &R) -> ServiceResult<InventorySummary>
where
    R: CraftReader,
{
    let crafts = match repo.list_crafts() {
        Ok(crafts) => crafts,
        Err(e) => {
            log::error!("Failed to list crafts for reports: {e}");
            return Err(ServiceError::Internal);
        }
    };

    Ok(InventorySummary::from_crafts(&crafts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::craft::NewCraft;
    use crate::domain::craft::Craft;
    use crate::domain::types::{CraftId, CraftName, CraftPrice, MaterialName, StockQuantity};
    use crate::repository::CraftWriter;
    use crate::repository::test::TestRepository;

    fn insert(repo: &TestRepository, name: &str, material: &str, price: f64, stock: i32) {
        let craft = NewCraft {
            material: Some(MaterialName::new(material).unwrap()),
            price: CraftPrice::new(price).unwrap(),
            stock_quantity: StockQuantity::new(stock).unwrap(),
            ..NewCraft::named(CraftName::new(name).unwrap())
        };
        repo.create_craft(&craft).unwrap();
    }

    #[test]
    fn reports_reflect_current_catalog() {
        let repo = TestRepository::default();
        insert(&repo, "Vase", "Clay", 10.0, 5);
        insert(&repo, "Bowl", "Clay", 20.0, 1);
        insert(&repo, "Elephant", "Wood", 5.0, 4);

        let summary = show_reports(&repo).unwrap();

        assert_eq!(summary.total_crafts, 3);
        assert_eq!(summary.total_stock_value, 90.0);
        assert_eq!(summary.by_material[0].label(), "Clay");
        assert_eq!(summary.by_material[0].count, 2);
        assert_eq!(summary.by_material[1].label(), "Wood");
    }

    #[test]
    fn reports_preloaded_catalog() {
        let existing = Craft {
            id: CraftId::new(7).unwrap(),
            name: CraftName::new("Terracotta Horse").unwrap(),
            description: None,
            material: Some(MaterialName::new("Clay").unwrap()),
            artist_name: None,
            price: CraftPrice::new(2800.0).unwrap(),
            stock_quantity: StockQuantity::new(4).unwrap(),
            date_created: chrono::DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        };
        let repo = TestRepository::new(vec![existing]);
        insert(&repo, "Vase", "Clay", 10.0, 5);

        let summary = show_reports(&repo).unwrap();

        assert_eq!(summary.total_crafts, 2);
        assert_eq!(summary.total_stock_value, 11_250.0);
        assert_eq!(summary.by_material[0].count, 2);
        // Ids continue after the preloaded ones.
        assert!(repo.get_craft_by_id(CraftId::new(8).unwrap()).is_ok());
    }

    #[test]
    fn empty_catalog_reports_zeroes() {
        let summary = show_reports(&TestRepository::default()).unwrap();
        assert_eq!(summary.total_crafts, 0);
        assert_eq!(summary.total_stock_value, 0.0);
        assert!(summary.by_artist.is_empty());
    }
}
