use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::craft::{Craft as DomainCraft, NewCraft as DomainNewCraft};
use crate::domain::types::{
    ArtistName, CraftDescription, CraftName, CraftPrice, MaterialName, StockQuantity,
    TypeConstraintError,
};

/// Diesel model representing a row in the `crafts` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::crafts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Craft {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub material: Option<String>,
    pub artist_name: Option<String>,
    pub price: f64,
    pub stock_quantity: i32,
    pub date_created: NaiveDateTime,
}

/// Insertable/patchable form of [`Craft`].
///
/// `date_created` is left to the column default on insert and is never part
/// of an update. `None` is written as `NULL` so that an update can clear
/// optional fields.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::crafts)]
#[diesel(treat_none_as_null = true)]
pub struct NewCraft<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub material: Option<&'a str>,
    pub artist_name: Option<&'a str>,
    pub price: f64,
    pub stock_quantity: i32,
}

impl TryFrom<Craft> for DomainCraft {
    type Error = TypeConstraintError;

    fn try_from(craft: Craft) -> Result<Self, Self::Error> {
        Ok(Self {
            id: craft.id.try_into()?,
            name: CraftName::new(craft.name)?,
            description: craft.description.and_then(CraftDescription::new_optional),
            material: craft.material.and_then(MaterialName::new_optional),
            artist_name: craft.artist_name.and_then(ArtistName::new_optional),
            price: CraftPrice::new(craft.price)?,
            stock_quantity: StockQuantity::new(craft.stock_quantity)?,
            date_created: craft.date_created,
        })
    }
}

impl<'a> From<&'a DomainNewCraft> for NewCraft<'a> {
    fn from(craft: &'a DomainNewCraft) -> Self {
        Self {
            name: craft.name.as_str(),
            description: craft.description.as_ref().map(|d| d.as_str()),
            material: craft.material.as_ref().map(|m| m.as_str()),
            artist_name: craft.artist_name.as_ref().map(|a| a.as_str()),
            price: craft.price.get(),
            stock_quantity: craft.stock_quantity.get(),
        }
    }
}
