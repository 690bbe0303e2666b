use serde::{Deserialize, Serialize};

use crate::OptionSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// At most one selected value from an option set.
pub struct SingleSelectState {
    selected: Option<String>,
}

impl SingleSelectState {
    /// Starts from `initial` when it names a selectable option, otherwise empty.
    pub fn new(options: &OptionSet, initial: Option<&str>) -> Self {
        let mut state = Self::default();
        if let Some(initial) = initial {
            state.select(options, initial);
        }
        state
    }

    /// Selects `value`. Unknown or disabled values are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn select(&mut self, options: &OptionSet, value: &str) -> bool {
        if !options.is_selectable(value) || self.is_selected(value) {
            return false;
        }
        self.selected = Some(value.to_string());
        true
    }

    /// Clears the selection. Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Currently selected value.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether `value` is the current selection.
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SelectOption;

    fn options() -> OptionSet {
        OptionSet::new(vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana"),
            SelectOption::new("c", "Cherry").disabled(),
        ])
        .expect("options")
    }

    #[test]
    fn select_replaces_previous_value() {
        let options = options();
        let mut state = SingleSelectState::default();
        assert!(state.select(&options, "a"));
        assert!(state.select(&options, "b"));
        assert_eq!(state.selected(), Some("b"));
        assert!(!state.is_selected("a"));
    }

    #[test]
    fn disabled_and_unknown_values_are_ignored() {
        let options = options();
        let mut state = SingleSelectState::new(&options, Some("a"));
        assert!(!state.select(&options, "c"));
        assert!(!state.select(&options, "zzz"));
        assert_eq!(state.selected(), Some("a"));
    }

    #[test]
    fn operations_are_idempotent() {
        let options = options();
        let mut state = SingleSelectState::default();
        state.select(&options, "b");
        let once = state.clone();
        assert!(!state.select(&options, "b"));
        assert_eq!(state, once);

        assert!(state.clear());
        assert!(!state.clear());
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn unselectable_initial_value_starts_empty() {
        let options = options();
        assert_eq!(SingleSelectState::new(&options, Some("c")).selected(), None);
        assert_eq!(SingleSelectState::new(&options, None).selected(), None);
    }
}
