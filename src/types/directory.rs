use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::office::Office;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Directory payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Governorate name -> offices. Insertion order is significant: selections
/// draw their candidates from the first names in this order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    governorates: IndexMap<String, Vec<Office>>,
}

impl Directory {
    pub fn new() -> Self {
        Directory {
            governorates: IndexMap::new(),
        }
    }

    /// Adds or replaces a governorate. A replaced name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, offices: Vec<Office>) {
        self.governorates.insert(name.into(), offices);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.governorates.keys().map(String::as_str)
    }

    /// Offices of `name`, or an empty slice when the name is unknown.
    pub fn offices(&self, name: &str) -> &[Office] {
        self.governorates
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Office])> {
        self.governorates
            .iter()
            .map(|(name, offices)| (name.as_str(), offices.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.governorates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.governorates.is_empty()
    }

    /// Build a directory from an API payload without ever failing.
    ///
    /// - a payload that is not an object gives an empty directory
    /// - a governorate whose value is not an array gets no offices
    /// - office records that do not deserialize are skipped
    pub fn from_json_value(value: Value) -> Self {
        let Value::Object(map) = value else {
            debug!("directory payload is not an object, treating as empty");
            return Directory::new();
        };

        let mut directory = Directory::new();
        for (name, offices) in map {
            let offices = match offices {
                Value::Array(items) => items
                    .into_iter()
                    .filter_map(|item| match serde_json::from_value::<Office>(item) {
                        Ok(office) => Some(office),
                        Err(err) => {
                            debug!(governorate = %name, error = %err, "skipping malformed office");
                            None
                        }
                    })
                    .collect(),
                _ => {
                    debug!(governorate = %name, "governorate offices are not a list");
                    Vec::new()
                }
            };
            directory.insert(name, offices);
        }
        directory
    }

    /// Parse raw JSON, then apply [`Directory::from_json_value`].
    /// Only text that is not JSON at all is an error.
    pub fn from_json_str(raw: &str) -> Result<Self, DirectoryError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Directory::from_json_value(value))
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<Office>)> for Directory {
    fn from_iter<I: IntoIterator<Item = (N, Vec<Office>)>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for (name, offices) in iter {
            directory.insert(name, offices);
        }
        directory
    }
}
