//! Inventory summary computed from a snapshot of the catalog.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;

use crate::domain::craft::Craft;

/// Display label of the bucket holding crafts without a material/artist.
pub const UNSPECIFIED_LABEL: &str = "unspecified";

/// Number of crafts sharing one value of a grouping dimension.
///
/// `key` is `None` for crafts where the dimension is absent. Keeping it an
/// `Option` means a material literally named "unspecified" still forms its
/// own group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub key: Option<String>,
    pub count: usize,
}

impl GroupCount {
    /// Label shown to the user for this group.
    pub fn label(&self) -> &str {
        self.key.as_deref().unwrap_or(UNSPECIFIED_LABEL)
    }

    /// Count descending, then label ascending with the unspecified bucket
    /// after every named label.
    fn report_order(a: &Self, b: &Self) -> Ordering {
        b.count.cmp(&a.count).then_with(|| match (&a.key, &b.key) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    }
}

impl Serialize for GroupCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GroupCount", 3)?;
        state.serialize_field("label", self.label())?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("unspecified", &self.key.is_none())?;
        state.end()
    }
}

/// Aggregate figures shown on the reports page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    pub total_crafts: usize,
    /// Sum of `price * stock_quantity`; `0.0` for an empty catalog.
    pub total_stock_value: f64,
    pub by_material: Vec<GroupCount>,
    pub by_artist: Vec<GroupCount>,
}

impl InventorySummary {
    /// Computes the summary in a single pass over `crafts`.
    ///
    /// Pure with respect to its input and total over every slice, including
    /// the empty one. Field constraints are not re-validated here; the domain
    /// types already guarantee them.
    pub fn from_crafts(crafts: &[Craft]) -> Self {
        let mut total_stock_value = 0.0;
        let mut materials: HashMap<Option<&str>, usize> = HashMap::new();
        let mut artists: HashMap<Option<&str>, usize> = HashMap::new();

        for craft in crafts {
            total_stock_value += craft.stock_value();
            *materials
                .entry(craft.material.as_ref().map(|m| m.as_str()))
                .or_default() += 1;
            *artists
                .entry(craft.artist_name.as_ref().map(|a| a.as_str()))
                .or_default() += 1;
        }

        Self {
            total_crafts: crafts.len(),
            total_stock_value,
            by_material: into_sorted_groups(materials),
            by_artist: into_sorted_groups(artists),
        }
    }
}

fn into_sorted_groups(counts: HashMap<Option<&str>, usize>) -> Vec<GroupCount> {
    let mut groups: Vec<GroupCount> = counts
        .into_iter()
        .map(|(key, count)| GroupCount {
            key: key.map(str::to_owned),
            count,
        })
        .collect();
    groups.sort_by(GroupCount::report_order);
    groups
}
