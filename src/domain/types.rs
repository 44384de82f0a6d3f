//! Strongly-typed value objects used by the craft domain.
//!
//! Records carry these wrappers instead of raw primitives, so a [`Craft`]
//! that exists in memory already satisfies the catalog constraints: names are
//! non-empty, prices and stock levels are never negative.
//!
//! [`Craft`]: crate::domain::craft::Craft

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative or not finite.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A numeric value exceeded its upper bound.
    #[error("{0} is too large")]
    TooLarge(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Like [`Self::new`], but maps blank input to `None`.
            ///
            /// Used for optional text columns where an empty form field
            /// means "not provided".
            pub fn new_optional<S: Into<String>>(value: S) -> Option<Self> {
                Self::new(value).ok()
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

id_newtype!(CraftId, "Unique identifier for a craft item.", "craft_id");

non_empty_string_newtype!(
    CraftName,
    "Craft display name enforcing non-empty values.",
    "craft name"
);
non_empty_string_newtype!(
    CraftDescription,
    "Free-form craft description. Absent descriptions are `None`, never empty.",
    "description"
);
non_empty_string_newtype!(
    MaterialName,
    "Material a craft is made of, e.g. `Clay` or `Wood`.",
    "material"
);
non_empty_string_newtype!(
    ArtistName,
    "Name of the artist who made a craft.",
    "artist name"
);

/// Non-negative unit price in standard currency units.
///
/// Bounded by [`CraftPrice::MAX`] so that `price * stock_quantity`, and the
/// catalog-wide sum of those products, always stays finite.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct CraftPrice(f64);

impl CraftPrice {
    /// Highest accepted unit price.
    pub const MAX: f64 = 1_000_000_000.0;

    /// Constructs a finite price between zero and [`Self::MAX`].
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if !value.is_finite() || value < 0.0 {
            Err(TypeConstraintError::NegativeNumber("price"))
        } else if value > Self::MAX {
            Err(TypeConstraintError::TooLarge("price"))
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for CraftPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for CraftPrice {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<f64> for CraftPrice {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

/// Number of units in stock.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(transparent)]
pub struct StockQuantity(i32);

impl StockQuantity {
    /// Constructs a quantity that must be zero or greater.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("stock quantity"))
        }
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for StockQuantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for StockQuantity {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<i32> for StockQuantity {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}
