//! Category keyword table.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::ConfigError;

use super::classifier::UNCATEGORIZED;

/// A named bucket of invoices and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    keywords: Vec<String>,
}

impl Category {
    /// Category name as configured.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Keywords in configured order, lowercased.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword found in already-lowercased text.
    pub fn first_match(&self, lowered: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(|k| k.as_str())
    }
}

/// Ordered, immutable mapping of category name to trigger keywords.
///
/// Iteration order is the order categories appear in the source. Every
/// category has at least one non-empty keyword and no category uses the
/// reserved fallback name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: Vec<Category>,
}

impl CategoryTable {
    /// Load a table from a JSON file of shape `{ "Name": ["kw", ...], ... }`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json(&content)?;
        info!(
            "Loaded {} categories from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse a table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Build a table from an already-parsed JSON value.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let object = value.as_object().ok_or(ConfigError::NotAnObject)?;

        let mut entries = Vec::with_capacity(object.len());
        for (name, keywords) in object {
            let list = keywords
                .as_array()
                .ok_or_else(|| ConfigError::NotAList(name.clone()))?;

            let mut parsed = Vec::with_capacity(list.len());
            for (index, keyword) in list.iter().enumerate() {
                let keyword = keyword.as_str().ok_or_else(|| ConfigError::InvalidKeyword {
                    category: name.clone(),
                    index,
                })?;
                parsed.push(keyword.to_string());
            }
            entries.push((name.clone(), parsed));
        }

        Self::from_entries(entries)
    }

    /// Build a table from `(name, keywords)` pairs, validating every entry.
    pub fn from_entries<I, N, K, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (N, K)>,
        N: Into<String>,
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();

        for (name, keywords) in entries {
            let name: String = name.into();
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyCategoryName);
            }
            if name.eq_ignore_ascii_case(UNCATEGORIZED) {
                return Err(ConfigError::ReservedName(name));
            }
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateCategory(name));
            }

            let mut lowered = Vec::new();
            for (index, keyword) in keywords.into_iter().enumerate() {
                let keyword = keyword.as_ref();
                if keyword.trim().is_empty() {
                    return Err(ConfigError::InvalidKeyword {
                        category: name,
                        index,
                    });
                }
                lowered.push(keyword.to_lowercase());
            }
            if lowered.is_empty() {
                return Err(ConfigError::NoKeywords(name));
            }

            debug!("Category '{}': {} keywords", name, lowered.len());
            categories.push(Category {
                name,
                keywords: lowered,
            });
        }

        if categories.is_empty() {
            return Err(ConfigError::EmptyTable);
        }

        Ok(Self { categories })
    }

    /// Categories in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Look up a category by exact name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a successfully loaded table.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<'a> IntoIterator for &'a CategoryTable {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
