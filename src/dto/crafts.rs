use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::craft::Craft;

/// Craft row prepared for the HTML templates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CraftDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub material: String,
    pub artist_name: String,
    pub price: f64,
    /// Price with two decimals, e.g. `1500.00`.
    pub price_display: String,
    pub stock_quantity: i32,
    pub date_created: NaiveDateTime,
}

impl From<Craft> for CraftDto {
    fn from(value: Craft) -> Self {
        Self {
            id: value.id.get(),
            price_display: value.price.to_string(),
            name: value.name.into_inner(),
            description: value.description.map(|d| d.into_inner()).unwrap_or_default(),
            material: value.material.map(|m| m.into_inner()).unwrap_or_default(),
            artist_name: value.artist_name.map(|a| a.into_inner()).unwrap_or_default(),
            price: value.price.get(),
            stock_quantity: value.stock_quantity.get(),
            date_created: value.date_created,
        }
    }
}
