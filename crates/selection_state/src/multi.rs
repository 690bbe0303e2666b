use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::OptionSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
/// Ordered, duplicate-free selection. Insertion order drives display order.
pub struct MultiSelectState {
    selected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Summary used to render "A, B, +3 more" style badges.
pub struct DisplayItems<'a> {
    /// Leading selected values, at most the requested count.
    pub shown: Vec<&'a str>,
    /// Selected values that did not fit.
    pub overflow_count: usize,
}

impl MultiSelectState {
    /// Starts from `initial`, applying the same rules as [`MultiSelectState::set_all`].
    pub fn new<I, S>(options: &OptionSet, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::default();
        state.set_all(options, initial);
        state
    }

    /// Removes `value` if present, otherwise appends it.
    ///
    /// Unknown and disabled values are ignored in both directions.
    pub fn toggle(&mut self, options: &OptionSet, value: &str) -> bool {
        if self.is_selected(value) {
            self.remove(options, value)
        } else {
            self.add(options, value)
        }
    }

    /// Appends `value` when it is selectable and not yet selected.
    pub fn add(&mut self, options: &OptionSet, value: &str) -> bool {
        if !options.is_selectable(value) || self.is_selected(value) {
            return false;
        }
        self.selected.push(value.to_string());
        true
    }

    /// Removes `value`, keeping the relative order of the rest.
    ///
    /// A disabled option stays selected: its chip cannot be dismissed.
    pub fn remove(&mut self, options: &OptionSet, value: &str) -> bool {
        if !options.is_selectable(value) {
            return false;
        }
        let before = self.selected.len();
        self.selected.retain(|selected| selected != value);
        self.selected.len() != before
    }

    /// Empties the selection. Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Replaces the selection wholesale.
    ///
    /// Values unknown to `options` are dropped and duplicates collapse onto their first
    /// occurrence. Disabled options are accepted here so callers can preselect them.
    pub fn set_all<I, S>(&mut self, options: &OptionSet, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let next = dedup(
            values
                .into_iter()
                .map(Into::into)
                .filter(|value| options.contains(value)),
        );
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Selects every enabled option in option-set order.
    pub fn select_all(&mut self, options: &OptionSet) -> bool {
        self.set_all(options, options.enabled_values())
    }

    /// Selected values in insertion order.
    pub fn values(&self) -> &[String] {
        &self.selected
    }

    /// Number of selected values.
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Whether `value` is selected.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.iter().any(|selected| selected == value)
    }

    /// Splits the selection into the first `max_displayed` values and an overflow count.
    pub fn display_items(&self, max_displayed: usize) -> DisplayItems<'_> {
        DisplayItems {
            shown: self
                .selected
                .iter()
                .take(max_displayed)
                .map(String::as_str)
                .collect(),
            overflow_count: self.selected.len().saturating_sub(max_displayed),
        }
    }
}

fn dedup(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(value.clone())).collect()
}

impl From<Vec<String>> for MultiSelectState {
    fn from(values: Vec<String>) -> Self {
        Self {
            selected: dedup(values.into_iter()),
        }
    }
}

impl From<MultiSelectState> for Vec<String> {
    fn from(state: MultiSelectState) -> Self {
        state.selected
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SelectOption;

    fn options() -> OptionSet {
        OptionSet::new(vec![
            SelectOption::new("a", "Alpha"),
            SelectOption::new("b", "Bravo"),
            SelectOption::new("c", "Charlie"),
            SelectOption::new("d", "Delta").disabled(),
        ])
        .expect("options")
    }

    #[test]
    fn toggle_appends_and_removes_in_order() {
        let options = options();
        let mut state = MultiSelectState::default();

        state.toggle(&options, "b");
        assert_eq!(state.values(), ["b"]);
        state.toggle(&options, "a");
        assert_eq!(state.values(), ["b", "a"]);
        state.toggle(&options, "b");
        assert_eq!(state.values(), ["a"]);
    }

    #[test]
    fn disabled_options_cannot_be_toggled_either_way() {
        let options = options();
        let mut state = MultiSelectState::new(&options, ["d", "a"]);
        assert_eq!(state.values(), ["d", "a"]);

        assert!(!state.toggle(&options, "d"));
        assert!(!state.remove(&options, "d"));
        assert_eq!(state.values(), ["d", "a"]);

        let mut empty = MultiSelectState::default();
        assert!(!empty.toggle(&options, "d"));
        assert_eq!(empty.count(), 0);
    }

    #[test]
    fn add_and_remove_report_changes() {
        let options = options();
        let mut state = MultiSelectState::default();
        assert!(state.add(&options, "c"));
        assert!(!state.add(&options, "c"));
        assert!(!state.add(&options, "unknown"));
        assert!(state.remove(&options, "c"));
        assert!(!state.remove(&options, "c"));
    }

    #[test]
    fn set_all_dedupes_and_drops_unknown_values() {
        let options = options();
        let mut state = MultiSelectState::default();
        assert!(state.set_all(&options, ["c", "a", "c", "zzz", "b", "a"]));
        assert_eq!(state.values(), ["c", "a", "b"]);
        assert!(!state.set_all(&options, ["c", "a", "b"]));
    }

    #[test]
    fn select_all_skips_disabled_options() {
        let options = options();
        let mut state = MultiSelectState::default();
        state.select_all(&options);
        assert_eq!(state.values(), ["a", "b", "c"]);
        assert!(state.clear());
        assert!(!state.clear());
    }

    #[test]
    fn display_items_reports_overflow() {
        let options = options();
        let state = MultiSelectState::new(&options, ["a", "b", "c"]);

        let summary = state.display_items(2);
        assert_eq!(summary.shown, vec!["a", "b"]);
        assert_eq!(summary.overflow_count, 1);

        let summary = state.display_items(5);
        assert_eq!(summary.shown, vec!["a", "b", "c"]);
        assert_eq!(summary.overflow_count, 0);

        let summary = state.display_items(0);
        assert!(summary.shown.is_empty());
        assert_eq!(summary.overflow_count, 3);
    }

    #[test]
    fn serde_uses_plain_array_and_dedupes_on_load() {
        let state: MultiSelectState = serde_json::from_str(r#"["b","a","b"]"#).expect("parse");
        assert_eq!(state.values(), ["b", "a"]);
        assert_eq!(serde_json::to_string(&state).expect("serialize"), r#"["b","a"]"#);
    }
}
