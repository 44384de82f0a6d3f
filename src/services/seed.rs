use crate::domain::craft::NewCraft;
use crate::domain::types::{
    ArtistName, CraftDescription, CraftName, CraftPrice, MaterialName, StockQuantity,
    TypeConstraintError,
};
use crate::repository::{CraftReader, CraftWriter};

use super::{ServiceError, ServiceResult};

/// (name, description, material, artist, price, stock)
const DEMO_CRAFTS: [(&str, &str, &str, &str, f64, i32); 5] = [
    ("Warli Painting", "Traditional tribal art", "Canvas", "Ramesh L.", 1500.0, 10),
    ("Blue Pottery Vase", "Jaipur Blue Pottery", "Clay", "Sita K.", 2200.0, 5),
    ("Wooden Elephant", "Sandalwood carved elephant", "Wood", "Arjun S.", 3500.0, 8),
    ("Madhubani Silk Scarf", "Hand-painted silk scarf", "Silk", "Priya M.", 1800.0, 15),
    ("Terracotta Horse", "Bankura terracotta horse", "Clay", "Sita K.", 2800.0, 4),
];

fn demo_crafts() -> Result<Vec<NewCraft>, TypeConstraintError> {
    DEMO_CRAFTS
        .iter()
        .map(|&(name, description, material, artist, price, stock)| {
            Ok(NewCraft {
                name: CraftName::new(name)?,
                description: Some(CraftDescription::new(description)?),
                material: Some(MaterialName::new(material)?),
                artist_name: Some(ArtistName::new(artist)?),
                price: CraftPrice::new(price)?,
                stock_quantity: StockQuantity::new(stock)?,
            })
        })
        .collect()
}

/// Inserts the demo catalog when the store is empty.
///
/// All demo rows go in as one batch, so a failure leaves the store empty and
/// the next start tries again. Returns the number of crafts inserted; a
/// non-empty store is left untouched.
pub fn seed_demo_crafts<R>(repo: &R) -> ServiceResult<usize>
where
    R: CraftReader + CraftWriter,
{
    match repo.count_crafts() {
        Ok(0) => {}
        Ok(_) => return Ok(0),
        Err(e) => {
            log::error!("Failed to count crafts: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let crafts = match repo.create_crafts(&demo_crafts()?) {
        Ok(crafts) => crafts,
        Err(e) => {
            log::error!("Failed to insert demo crafts: {e}");
            return Err(ServiceError::Internal);
        }
    };

    log::info!("Database was empty, added {} demo crafts", crafts.len());
    Ok(crafts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;

    #[test]
    fn seeds_empty_store_once() {
        let repo = TestRepository::default();

        assert_eq!(seed_demo_crafts(&repo).unwrap(), 5);
        assert_eq!(seed_demo_crafts(&repo).unwrap(), 0);
        assert_eq!(repo.count_crafts().unwrap(), 5);
    }

    #[test]
    fn demo_catalog_values() {
        let repo = TestRepository::default();
        seed_demo_crafts(&repo).unwrap();

        let summary = crate::services::reports::show_reports(&repo).unwrap();
        // 1500*10 + 2200*5 + 3500*8 + 1800*15 + 2800*4
        assert_eq!(summary.total_stock_value, 92_200.0);
        assert_eq!(summary.by_material[0].label(), "Clay");
        assert_eq!(summary.by_material[0].count, 2);
        assert_eq!(summary.by_artist[0].label(), "Sita K.");
    }
}
