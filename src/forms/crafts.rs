use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::craft::NewCraft;
use crate::domain::types::{
    ArtistName, CraftDescription, CraftName, CraftPrice, MaterialName, StockQuantity,
    TypeConstraintError,
};

/// Raw craft form as submitted by the browser.
///
/// Numeric fields arrive as text and are coerced in
/// [`CraftFormPayload::try_from`]; missing fields deserialize as empty.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct CraftForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub material: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub artist_name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub stock_quantity: String,
}

/// Validated craft fields ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CraftFormPayload {
    pub name: CraftName,
    pub description: Option<CraftDescription>,
    pub material: Option<MaterialName>,
    pub artist_name: Option<ArtistName>,
    pub price: CraftPrice,
    pub stock_quantity: StockQuantity,
}

impl CraftForm {
    /// Trims every field so length limits apply to the stored text.
    fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            material: self.material.trim().to_string(),
            artist_name: self.artist_name.trim().to_string(),
            price: self.price.trim().to_string(),
            stock_quantity: self.stock_quantity.trim().to_string(),
        }
    }
}

impl CraftFormPayload {
    pub fn into_new_craft(self) -> NewCraft {
        NewCraft {
            name: self.name,
            description: self.description,
            material: self.material,
            artist_name: self.artist_name,
            price: self.price,
            stock_quantity: self.stock_quantity,
        }
    }
}

#[derive(Debug, Error)]
pub enum CraftFormError {
    #[error("Craft form validation failed: {0}")]
    Validation(String),
    #[error("{0} must be a number")]
    InvalidNumber(&'static str),
    #[error("Craft form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CraftFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CraftFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Parses a numeric form field; blank input yields the type's default (zero).
fn parse_number<T>(value: &str, field: &'static str) -> Result<T, CraftFormError>
where
    T: std::str::FromStr + Default,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed
        .parse()
        .map_err(|_| CraftFormError::InvalidNumber(field))
}

impl TryFrom<CraftForm> for CraftFormPayload {
    type Error = CraftFormError;

    fn try_from(value: CraftForm) -> Result<Self, Self::Error> {
        let value = value.trimmed();
        value.validate()?;

        let price: f64 = parse_number(&value.price, "price")?;
        let stock_quantity: i32 = parse_number(&value.stock_quantity, "stock quantity")?;

        Ok(Self {
            name: CraftName::new(value.name)?,
            description: CraftDescription::new_optional(value.description),
            material: MaterialName::new_optional(value.material),
            artist_name: ArtistName::new_optional(value.artist_name),
            price: CraftPrice::new(price)?,
            stock_quantity: StockQuantity::new(stock_quantity)?,
        })
    }
}
