use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ArtistName, CraftDescription, CraftId, CraftName, CraftPrice, MaterialName, StockQuantity,
};

/// A handcrafted item in the catalog together with its sale and stock data.
///
/// This domain struct mirrors the `crafts` table and is independent from any
/// persistence layer representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Craft {
    pub id: CraftId,
    pub name: CraftName,
    pub description: Option<CraftDescription>,
    pub material: Option<MaterialName>,
    pub artist_name: Option<ArtistName>,
    pub price: CraftPrice,
    pub stock_quantity: StockQuantity,
    /// Assigned by the store on insert and never changed afterwards.
    pub date_created: NaiveDateTime,
}

impl Craft {
    /// Value of the units currently in stock.
    pub fn stock_value(&self) -> f64 {
        self.price.get() * f64::from(self.stock_quantity.get())
    }
}

/// The mutable fields of a [`Craft`].
///
/// Used both to insert new rows and to fully replace the fields of an
/// existing row; `id` and `date_created` are owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCraft {
    pub name: CraftName,
    pub description: Option<CraftDescription>,
    pub material: Option<MaterialName>,
    pub artist_name: Option<ArtistName>,
    pub price: CraftPrice,
    pub stock_quantity: StockQuantity,
}

impl NewCraft {
    /// Creates a record with only a name; price and stock default to zero.
    pub fn named(name: CraftName) -> Self {
        Self {
            name,
            description: None,
            material: None,
            artist_name: None,
            price: CraftPrice::default(),
            stock_quantity: StockQuantity::default(),
        }
    }
}
