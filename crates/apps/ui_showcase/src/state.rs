use selection_state::{
    MultiSelectState, OptionSet, RangeState, SingleSelectState, ToggleGroupMode,
    ToggleGroupState,
};
use serde::{Deserialize, Serialize};

use crate::catalog::ShowcaseCatalog;

/// Persisted snapshot of every demo control on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UiShowcaseState {
    pub(crate) alignment: ToggleGroupState,
    pub(crate) view_mode: ToggleGroupState,
    pub(crate) text_styles: ToggleGroupState,
    pub(crate) notifications: MultiSelectState,
    pub(crate) region: SingleSelectState,
    pub(crate) languages: MultiSelectState,
    #[serde(default)]
    pub(crate) volume: Option<RangeState>,
    #[serde(default)]
    pub(crate) price_range: Option<RangeState>,
    pub(crate) switch_enabled: bool,
    #[serde(default)]
    pub(crate) dialog_open: bool,
}

impl UiShowcaseState {
    pub(crate) fn initial(catalog: &ShowcaseCatalog) -> Self {
        Self {
            alignment: ToggleGroupState::single_with(&catalog.alignment, true, Some("center")),
            view_mode: ToggleGroupState::single_with(&catalog.view_modes, false, Some("list")),
            text_styles: ToggleGroupState::multiple_with(&catalog.text_styles, ["bold"]),
            notifications: MultiSelectState::new(&catalog.notifications, ["email", "push"]),
            region: SingleSelectState::new(&catalog.regions, Some("eu-west")),
            languages: MultiSelectState::new(&catalog.languages, ["rust", "go", "python"]),
            volume: catalog.volume.clone(),
            price_range: catalog.price_range.clone(),
            switch_enabled: true,
            dialog_open: false,
        }
    }

    /// Replays a restored snapshot through the state operations against the current catalog.
    ///
    /// Values the catalog no longer offers are dropped. Disabled values survive only in
    /// multi-selects and multiple-mode toggle groups, which accept them as preselection. Toggle groups whose mode changed and
    /// sliders whose track changed fall back to their initial state.
    pub(crate) fn reconcile(restored: Self, catalog: &ShowcaseCatalog) -> Self {
        let initial = Self::initial(catalog);
        Self {
            alignment: reconcile_toggle(initial.alignment, &restored.alignment, &catalog.alignment),
            view_mode: reconcile_toggle(initial.view_mode, &restored.view_mode, &catalog.view_modes),
            text_styles: reconcile_toggle(
                initial.text_styles,
                &restored.text_styles,
                &catalog.text_styles,
            ),
            notifications: MultiSelectState::new(
                &catalog.notifications,
                restored.notifications.values(),
            ),
            region: SingleSelectState::new(&catalog.regions, restored.region.selected()),
            languages: MultiSelectState::new(&catalog.languages, restored.languages.values()),
            volume: reconcile_range(initial.volume, restored.volume),
            price_range: reconcile_range(initial.price_range, restored.price_range),
            switch_enabled: restored.switch_enabled,
            dialog_open: restored.dialog_open,
        }
    }
}

fn reconcile_toggle(
    initial: ToggleGroupState,
    restored: &ToggleGroupState,
    options: &OptionSet,
) -> ToggleGroupState {
    if restored.mode() != initial.mode() || restored.is_collapsible() != initial.is_collapsible() {
        return initial;
    }
    let values = restored.values();
    match initial.mode() {
        ToggleGroupMode::Single => ToggleGroupState::single_with(
            options,
            initial.is_collapsible(),
            values.first().copied(),
        ),
        ToggleGroupMode::Multiple => ToggleGroupState::multiple_with(options, values),
    }
}

fn reconcile_range(initial: Option<RangeState>, restored: Option<RangeState>) -> Option<RangeState> {
    let mut range = initial?;
    if let Some(restored) = restored {
        if restored.bounds() == range.bounds() && restored.len() == range.len() {
            range.set_all(restored.value().to_vec());
        }
    }
    Some(range)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn initial_state_reflects_catalog_defaults() {
        let catalog = ShowcaseCatalog::embedded();
        let state = UiShowcaseState::initial(&catalog);
        assert_eq!(state.alignment.values(), vec!["center"]);
        assert_eq!(state.view_mode.values(), vec!["list"]);
        assert_eq!(state.text_styles.values(), vec!["bold"]);
        assert_eq!(state.notifications.values(), &["email", "push"]);
        assert_eq!(state.region.selected(), Some("eu-west"));

        let summary = state.languages.display_items(2);
        assert_eq!(summary.shown, vec!["rust", "go"]);
        assert_eq!(summary.overflow_count, 1);
    }

    #[test]
    fn initial_state_survives_snapshot_round_trip() {
        let catalog = ShowcaseCatalog::embedded();
        let state = UiShowcaseState::initial(&catalog);
        let value = serde_json::to_value(&state).expect("serialize");
        let restored: UiShowcaseState = serde_json::from_value(value).expect("deserialize");
        assert_eq!(UiShowcaseState::reconcile(restored, &catalog), state);
    }

    #[test]
    fn reconcile_drops_values_the_catalog_does_not_offer() {
        let catalog = ShowcaseCatalog::embedded();
        let mut restored = UiShowcaseState::initial(&catalog);
        restored.languages = MultiSelectState::from(vec![
            "cobol".to_string(),
            "zig".to_string(),
            "swift".to_string(),
        ]);
        restored.region = serde_json::from_value(json!({ "selected": "ap-south" })).expect("region");

        let state = UiShowcaseState::reconcile(restored, &catalog);
        assert_eq!(state.languages.values(), &["cobol", "swift"]);
        assert_eq!(state.region.selected(), None);
    }

    #[test]
    fn reconcile_resets_toggle_groups_whose_mode_changed() {
        let catalog = ShowcaseCatalog::embedded();
        let mut restored = UiShowcaseState::initial(&catalog);
        restored.view_mode =
            ToggleGroupState::multiple_with(&catalog.view_modes, ["grid", "board"]);
        restored.alignment = ToggleGroupState::single_with(&catalog.alignment, true, Some("right"));

        let state = UiShowcaseState::reconcile(restored, &catalog);
        assert_eq!(state.view_mode.values(), vec!["list"]);
        assert_eq!(state.alignment.values(), vec!["right"]);
    }

    #[test]
    fn reconcile_replays_toggle_values_through_the_constructors() {
        let catalog = ShowcaseCatalog::embedded();
        let mut restored = UiShowcaseState::initial(&catalog);
        restored.alignment = serde_json::from_value(json!({
            "state": { "mode": "single", "value": { "selected": "justify" } },
            "collapsible": true
        }))
        .expect("alignment");
        restored.text_styles = ToggleGroupState::multiple_with(
            &catalog.text_styles,
            ["strikethrough", "italic", "blink"],
        );

        let state = UiShowcaseState::reconcile(restored, &catalog);
        assert!(state.alignment.values().is_empty());
        assert_eq!(state.text_styles.values(), vec!["strikethrough", "italic"]);
    }

    #[test]
    fn reconcile_keeps_slider_positions_only_for_the_same_track() {
        let catalog = ShowcaseCatalog::embedded();
        let mut restored = UiShowcaseState::initial(&catalog);
        if let Some(price) = restored.price_range.as_mut() {
            price.set_thumb(0, 400.0);
        }
        restored.volume = serde_json::from_value(json!({
            "bounds": { "min": 0, "max": 10, "step": 1 },
            "thumbs": [7]
        }))
        .expect("volume");

        let state = UiShowcaseState::reconcile(restored, &catalog);
        assert_eq!(state.price_range.expect("price").value(), &[400.0, 750.0]);
        assert_eq!(state.volume.expect("volume").value(), &[40.0]);
    }
}
