//! Collection responses.
//!
//! List endpoints answer either with a bare JSON array or, when paginated,
//! with an envelope:
//!
//! ```json
//! { "pagination": { "count": 42, "total_pages": 3, "next": "...", "previous": null },
//!   "results": [ ... ] }
//! ```
//!
//! The shape is chosen from the JSON itself before the items are decoded, so
//! an item that fails to decode is reported with its own error.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Paging metadata from a paginated envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of items across all pages.
    pub count: u64,
    pub total_pages: u64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
}

/// One page of results.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub pagination: Pagination,
    pub results: Vec<T>,
}

/// A list response in either shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing<T> {
    Paginated(Page<T>),
    Items(Vec<T>),
}

impl<T: DeserializeOwned> Listing<T> {
    /// Decode a listing from an already parsed JSON value.
    ///
    /// Arrays are plain item lists; objects must carry `results`.
    ///
    /// # Errors
    ///
    /// Returns an error for any other shape, or the first item error.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let paginated = match &value {
            Value::Array(_) => false,
            Value::Object(map) if map.contains_key("results") => true,
            _ => {
                return Err(de::Error::custom(
                    "expected an array or an object with `results`",
                ));
            }
        };
        if paginated {
            serde_json::from_value(value).map(Self::Paginated)
        } else {
            serde_json::from_value(value).map(Self::Items)
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Listing<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

impl<T> Listing<T> {
    /// Paging metadata, when the response was paginated.
    #[must_use]
    pub fn pagination(&self) -> Option<&Pagination> {
        match self {
            Self::Paginated(page) => Some(&page.pagination),
            Self::Items(_) => None,
        }
    }

    /// The items on this page.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated(page) => page.results,
            Self::Items(items) => items,
        }
    }
}
