use serde::{Deserialize, Serialize};

use crate::{MultiSelectState, OptionSet, SingleSelectState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Whether a toggle group keeps one pressed item or many.
pub enum ToggleGroupMode {
    /// At most one item pressed.
    Single,
    /// Any number of items pressed.
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
enum ToggleGroupValue {
    Single(SingleSelectState),
    Multiple(MultiSelectState),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Pressed items of a toggle group with a fixed mode.
pub struct ToggleGroupState {
    #[serde(rename = "state")]
    value: ToggleGroupValue,
    #[serde(default)]
    collapsible: bool,
}

impl ToggleGroupState {
    /// Single-mode group. When `collapsible`, pressing the current item releases it.
    pub fn single(collapsible: bool) -> Self {
        Self {
            value: ToggleGroupValue::Single(SingleSelectState::default()),
            collapsible,
        }
    }

    /// Multiple-mode group.
    pub fn multiple() -> Self {
        Self {
            value: ToggleGroupValue::Multiple(MultiSelectState::default()),
            collapsible: false,
        }
    }

    /// Single-mode group with `initial` pressed. Unknown and disabled values leave it empty.
    pub fn single_with(options: &OptionSet, collapsible: bool, initial: Option<&str>) -> Self {
        Self {
            value: ToggleGroupValue::Single(SingleSelectState::new(options, initial)),
            collapsible,
        }
    }

    /// Multiple-mode group preselected with `initial`.
    ///
    /// Follows [`MultiSelectState::new`]: unknown values are dropped, duplicates collapse and
    /// disabled values are kept as preselection.
    pub fn multiple_with<I, S>(options: &OptionSet, initial: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: ToggleGroupValue::Multiple(MultiSelectState::new(options, initial)),
            collapsible: false,
        }
    }

    /// Group mode.
    pub fn mode(&self) -> ToggleGroupMode {
        match self.value {
            ToggleGroupValue::Single(_) => ToggleGroupMode::Single,
            ToggleGroupValue::Multiple(_) => ToggleGroupMode::Multiple,
        }
    }

    /// Whether a single-mode group may release its only pressed item.
    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    /// Presses or releases `value` according to the group mode.
    ///
    /// Single mode selects `value`; re-pressing the current item clears it only when the group
    /// is collapsible. Multiple mode toggles membership. Unknown and disabled items are ignored.
    pub fn toggle_item(&mut self, options: &OptionSet, value: &str) -> bool {
        match &mut self.value {
            ToggleGroupValue::Single(state) => {
                if !options.is_selectable(value) {
                    false
                } else if state.is_selected(value) {
                    self.collapsible && state.clear()
                } else {
                    state.select(options, value)
                }
            }
            ToggleGroupValue::Multiple(state) => state.toggle(options, value),
        }
    }

    /// Whether `value` is pressed.
    pub fn is_pressed(&self, value: &str) -> bool {
        match &self.value {
            ToggleGroupValue::Single(state) => state.is_selected(value),
            ToggleGroupValue::Multiple(state) => state.is_selected(value),
        }
    }

    /// Pressed items, in press order for multiple mode.
    pub fn values(&self) -> Vec<&str> {
        match &self.value {
            ToggleGroupValue::Single(state) => state.selected().into_iter().collect(),
            ToggleGroupValue::Multiple(state) => state.values().iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SelectOption;

    fn options() -> OptionSet {
        OptionSet::new(vec![
            SelectOption::new("a", "Left"),
            SelectOption::new("b", "Center"),
            SelectOption::new("c", "Right").disabled(),
        ])
        .expect("options")
    }

    #[test]
    fn collapsible_single_releases_current_item() {
        let options = options();
        let mut group = ToggleGroupState::single(true);
        group.toggle_item(&options, "a");
        assert!(group.toggle_item(&options, "a"));
        assert!(group.values().is_empty());
        assert!(group.toggle_item(&options, "b"));
        assert_eq!(group.values(), vec!["b"]);
    }

    #[test]
    fn non_collapsible_single_ignores_repress() {
        let options = options();
        let mut group = ToggleGroupState::single(false);
        group.toggle_item(&options, "a");
        assert!(!group.toggle_item(&options, "a"));
        assert!(group.is_pressed("a"));
        assert!(group.toggle_item(&options, "b"));
        assert!(!group.is_pressed("a"));
    }

    #[test]
    fn multiple_mode_toggles_membership() {
        let options = options();
        let mut group = ToggleGroupState::multiple();
        group.toggle_item(&options, "b");
        group.toggle_item(&options, "a");
        assert_eq!(group.values(), vec!["b", "a"]);
        group.toggle_item(&options, "b");
        assert_eq!(group.values(), vec!["a"]);
        assert_eq!(group.mode(), ToggleGroupMode::Multiple);
    }

    #[test]
    fn disabled_items_are_ignored_in_both_modes() {
        let options = options();
        let mut single = ToggleGroupState::single(true);
        let mut multiple = ToggleGroupState::multiple();
        assert!(!single.toggle_item(&options, "c"));
        assert!(!multiple.toggle_item(&options, "c"));
        assert!(!single.toggle_item(&options, "missing"));
    }

    #[test]
    fn single_with_presses_only_selectable_initial_values() {
        let options = options();
        let group = ToggleGroupState::single_with(&options, false, Some("b"));
        assert_eq!(group.values(), vec!["b"]);
        assert!(!group.is_collapsible());

        assert!(ToggleGroupState::single_with(&options, true, Some("c")).values().is_empty());
        assert!(ToggleGroupState::single_with(&options, true, Some("zzz")).values().is_empty());
        assert_eq!(
            ToggleGroupState::single_with(&options, true, None),
            ToggleGroupState::single(true)
        );
    }

    #[test]
    fn multiple_with_keeps_order_and_drops_unknown_values() {
        let options = options();
        let mut group = ToggleGroupState::multiple_with(&options, ["b", "zzz", "c", "b", "a"]);
        assert_eq!(group.mode(), ToggleGroupMode::Multiple);
        assert_eq!(group.values(), vec!["b", "c", "a"]);

        assert!(!group.toggle_item(&options, "c"));
        assert!(group.toggle_item(&options, "b"));
        assert_eq!(group.values(), vec!["c", "a"]);
    }

    #[test]
    fn serializes_mode_and_value_together() {
        let options = options();
        let mut group = ToggleGroupState::single(true);
        group.toggle_item(&options, "b");

        let json = serde_json::to_value(&group).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "state": {"mode": "single", "value": {"selected": "b"}},
                "collapsible": true
            })
        );
        let restored: ToggleGroupState = serde_json::from_value(json).expect("deserialize");
        assert_eq!(restored, group);
    }
}
