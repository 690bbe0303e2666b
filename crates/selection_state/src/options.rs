//! Option records and validated option sets.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A selectable entry with a stable identifier and display label.
pub struct SelectOption {
    /// Identifier, unique within its option set.
    pub value: String,
    /// Display text, also used for filtering.
    pub label: String,
    /// Disabled options render but never become selected through a transition.
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Builds an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Returns the option marked as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons an option list is rejected at the configuration boundary.
pub enum OptionSetError {
    /// An option has an empty `value`.
    #[error("option at index {index} has an empty value")]
    EmptyValue {
        /// Position of the offending option.
        index: usize,
    },
    /// An option has an empty or whitespace-only `label`.
    #[error("option `{value}` has an empty label")]
    EmptyLabel {
        /// Value of the offending option.
        value: String,
    },
    /// Two options share the same `value`.
    #[error("duplicate option value `{value}`")]
    DuplicateValue {
        /// The repeated value.
        value: String,
    },
    /// The JSON payload could not be decoded into options.
    #[error("invalid option list: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SelectOption>", into = "Vec<SelectOption>")]
/// Immutable, caller-supplied option list with unique values.
pub struct OptionSet {
    options: Vec<SelectOption>,
}

impl OptionSet {
    /// Validates `options` and wraps them.
    ///
    /// # Errors
    ///
    /// Returns an [`OptionSetError`] for empty values, blank labels, or duplicate values.
    pub fn new(options: Vec<SelectOption>) -> Result<Self, OptionSetError> {
        let mut seen = HashSet::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            if option.value.is_empty() {
                return Err(OptionSetError::EmptyValue { index });
            }
            if option.label.trim().is_empty() {
                return Err(OptionSetError::EmptyLabel {
                    value: option.value.clone(),
                });
            }
            if !seen.insert(option.value.as_str()) {
                return Err(OptionSetError::DuplicateValue {
                    value: option.value.clone(),
                });
            }
        }
        Ok(Self { options })
    }

    /// Parses a JSON array of options and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`OptionSetError::Parse`] for malformed JSON and the validation errors of
    /// [`OptionSet::new`] otherwise.
    pub fn from_json(raw: &str) -> Result<Self, OptionSetError> {
        let options: Vec<SelectOption> =
            serde_json::from_str(raw).map_err(|err| OptionSetError::Parse(err.to_string()))?;
        Self::new(options)
    }

    /// Looks up an option by value.
    pub fn get(&self, value: &str) -> Option<&SelectOption> {
        self.options.iter().find(|option| option.value == value)
    }

    /// Whether an option with `value` exists.
    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Whether `value` exists and is not disabled.
    pub fn is_selectable(&self, value: &str) -> bool {
        self.get(value).map(|option| !option.disabled).unwrap_or(false)
    }

    /// Iterates options in caller order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Values of every enabled option, in caller order.
    pub fn enabled_values(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| !option.disabled)
            .map(|option| option.value.clone())
            .collect()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the set has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options whose label contains `query`, ignoring case.
    ///
    /// A blank query matches everything. Filtering is read-only and never touches selection.
    pub fn filter(&self, query: &str) -> Vec<&SelectOption> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.options.iter().collect();
        }
        self.options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .collect()
    }
}

impl TryFrom<Vec<SelectOption>> for OptionSet {
    type Error = OptionSetError;

    fn try_from(options: Vec<SelectOption>) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl From<OptionSet> for Vec<SelectOption> {
    fn from(set: OptionSet) -> Self {
        set.options
    }
}
