//! Component showcase for the shared selection primitives.
//!
//! The page renders every selection family through `system_ui` primitives, backed by the
//! headless `selection_state` values. Demo data comes from the embedded catalog; the page state
//! is a serde snapshot the host can persist and hand back on the next mount.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod catalog;
mod state;

use leptos::*;
use selection_state::{OptionSet, RangeState};
use serde_json::Value;
use system_ui::prelude::*;

pub use catalog::{CatalogError, ShowcaseCatalog};
use state::UiShowcaseState;

const COMBOBOX_MAX_DISPLAYED: usize = 2;

fn unavailable(options: &OptionSet) -> Option<View> {
    options
        .is_empty()
        .then(|| view! { <EmptyState>"Options unavailable"</EmptyState> }.into_view())
}

fn describe_thumbs(range: Option<&RangeState>) -> String {
    match range.map(RangeState::value) {
        Some([single]) => format!("{single}"),
        Some(values) if !values.is_empty() => values
            .iter()
            .map(|value| format!("{value}"))
            .collect::<Vec<_>>()
            .join(" to "),
        _ => "n/a".to_string(),
    }
}

#[component]
/// Showcase page contents.
pub fn UiShowcaseApp(
    /// Snapshot previously emitted through `on_state_change`.
    restored_state: Option<Value>,
    /// Receives a snapshot whenever any demo control changes.
    #[prop(optional)]
    on_state_change: Option<Callback<Value>>,
) -> impl IntoView {
    let catalog = ShowcaseCatalog::embedded();
    let initial = match restored_state.map(serde_json::from_value::<UiShowcaseState>) {
        Some(Ok(restored)) => UiShowcaseState::reconcile(restored, &catalog),
        Some(Err(err)) => {
            logging::warn!("ui showcase: discarding restored state: {err}");
            UiShowcaseState::initial(&catalog)
        }
        None => UiShowcaseState::initial(&catalog),
    };

    let last_saved = create_rw_signal(serde_json::to_string(&initial).ok());
    let state = create_rw_signal(initial);
    let regions = store_value(catalog.regions.clone());

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("ui showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_state_change) = on_state_change {
            match serde_json::to_value(&snapshot) {
                Ok(value) => on_state_change.call(value),
                Err(err) => logging::warn!("ui showcase snapshot failed: {err}"),
            }
        }
    });

    let region_label = move || {
        let selected = state.with(|state| state.region.selected().map(str::to_string));
        selected
            .and_then(|value| {
                regions.with_value(|regions| regions.get(&value).map(|option| option.label.clone()))
            })
            .unwrap_or_else(|| "none".to_string())
    };

    let volume_panel = match catalog.volume.clone() {
        Some(fallback) => view! {
            <RangeSlider
                aria_label="Volume"
                value=Signal::derive(move || {
                    state.with(|state| state.volume.clone()).unwrap_or_else(|| fallback.clone())
                })
                on_change=Callback::new(move |next| state.update(|state| state.volume = Some(next)))
            />
            <Text tone=TextTone::Secondary>
                {move || format!("Volume: {}", state.with(|state| describe_thumbs(state.volume.as_ref())))}
            </Text>
        }
        .into_view(),
        None => view! { <EmptyState>"Slider unavailable"</EmptyState> }.into_view(),
    };

    let price_panel = match catalog.price_range.clone() {
        Some(fallback) => view! {
            <RangeSlider
                aria_label="Price range"
                value=Signal::derive(move || {
                    state.with(|state| state.price_range.clone()).unwrap_or_else(|| fallback.clone())
                })
                on_change=Callback::new(move |next| state.update(|state| state.price_range = Some(next)))
            />
            <Text tone=TextTone::Secondary>
                {move || format!("Price: {}", state.with(|state| describe_thumbs(state.price_range.as_ref())))}
            </Text>
        }
        .into_view(),
        None => view! { <EmptyState>"Slider unavailable"</EmptyState> }.into_view(),
    };

    let ShowcaseCatalog {
        alignment,
        view_modes,
        text_styles,
        notifications,
        regions: region_options,
        languages,
        ..
    } = catalog;

    view! {
        <AppShell>
            <Surface variant=SurfaceVariant::Muted elevation=Elevation::Inset>
                <Stack gap=LayoutGap::Lg>
                    <PaneHeader title="Selection Showcase" meta="Controlled primitives over headless selection state">
                        <Badge>"selection_state"</Badge>
                    </PaneHeader>

                    <Panel title="Buttons">
                        <Cluster gap=LayoutGap::Sm>
                            <Button variant=ButtonVariant::Primary>"Primary"</Button>
                            <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                            <Button variant=ButtonVariant::Quiet>"Quiet"</Button>
                            <Button variant=ButtonVariant::Danger>"Danger"</Button>
                            <Button variant=ButtonVariant::Secondary shape=ButtonShape::Pill>"Pill"</Button>
                            <Button variant=ButtonVariant::Secondary disabled=true>"Disabled"</Button>
                        </Cluster>
                    </Panel>

                    <Panel
                        title="Toggle groups"
                        description="Single collapsible, single that always keeps one pressed, and multiple."
                    >
                        {unavailable(&alignment)}
                        <ToggleGroup
                            options=alignment
                            aria_label="Text alignment"
                            value=Signal::derive(move || state.with(|state| state.alignment.clone()))
                            on_change=Callback::new(move |next| state.update(|state| state.alignment = next))
                        />
                        {unavailable(&view_modes)}
                        <ToggleGroup
                            options=view_modes
                            aria_label="View mode"
                            value=Signal::derive(move || state.with(|state| state.view_mode.clone()))
                            on_change=Callback::new(move |next| state.update(|state| state.view_mode = next))
                        />
                        {unavailable(&text_styles)}
                        <ToggleGroup
                            options=text_styles
                            aria_label="Text style"
                            value=Signal::derive(move || state.with(|state| state.text_styles.clone()))
                            on_change=Callback::new(move |next| state.update(|state| state.text_styles = next))
                        />
                        <Text tone=TextTone::Secondary>
                            {move || state.with(|state| {
                                format!(
                                    "Alignment: {}; view: {}; styles: {}",
                                    state.alignment.values().join(", "),
                                    state.view_mode.values().join(", "),
                                    state.text_styles.values().join(", "),
                                )
                            })}
                        </Text>
                    </Panel>

                    <Grid min_column=20>
                        <Panel title="Checkbox group">
                            {unavailable(&notifications)}
                            <CheckboxGroup
                                options=notifications
                                aria_label="Notification channels"
                                value=Signal::derive(move || state.with(|state| state.notifications.clone()))
                                on_change=Callback::new(move |next| state.update(|state| state.notifications = next))
                            />
                        </Panel>

                        <Panel title="Select menu">
                            {unavailable(&region_options)}
                            <SelectMenu
                                options=region_options
                                aria_label="Region"
                                placeholder="Choose a region"
                                value=Signal::derive(move || state.with(|state| state.region.clone()))
                                on_change=Callback::new(move |next| state.update(|state| state.region = next))
                            />
                        </Panel>

                        <Panel title="Combobox" description="Filter by label; the trigger shows two badges and an overflow counter.">
                            {unavailable(&languages)}
                            <Combobox
                                options=languages
                                aria_label="Languages"
                                max_displayed=COMBOBOX_MAX_DISPLAYED
                                value=Signal::derive(move || state.with(|state| state.languages.clone()))
                                on_change=Callback::new(move |next| state.update(|state| state.languages = next))
                            />
                        </Panel>
                    </Grid>

                    <Panel title="Range sliders" description="Thumbs stop at the minimum separation instead of crossing.">
                        {volume_panel}
                        {price_panel}
                    </Panel>

                    <Panel title="Switch">
                        <FieldGroup title="Reduced motion" description="Switch with Space and Enter activation.">
                            <Switch
                                aria_label="Reduced motion"
                                checked=Signal::derive(move || state.with(|state| state.switch_enabled))
                                on_toggle=Callback::new(move |next| state.update(|state| state.switch_enabled = next))
                            />
                        </FieldGroup>
                    </Panel>

                    <Panel title="Dialog">
                        <Card>
                            <Text tone=TextTone::Secondary>"Escape or either action closes the dialog."</Text>
                            <Button
                                variant=ButtonVariant::Primary
                                on_click=Callback::new(move |_| state.update(|state| state.dialog_open = true))
                            >
                                "Open dialog"
                            </Button>
                        </Card>
                        <Show when=move || state.with(|state| state.dialog_open) fallback=|| ()>
                            <Modal
                                aria_label="Example dialog"
                                on_dismiss=Callback::new(move |_| state.update(|state| state.dialog_open = false))
                            >
                                <Heading role=TextRole::Title>"Example dialog"</Heading>
                                <Text tone=TextTone::Secondary>"Dialog content sits on the overlay elevation."</Text>
                                <Cluster justify=LayoutJustify::Between>
                                    <Button
                                        variant=ButtonVariant::Secondary
                                        on_click=Callback::new(move |_| state.update(|state| state.dialog_open = false))
                                    >
                                        "Dismiss"
                                    </Button>
                                    <Button
                                        variant=ButtonVariant::Primary
                                        on_click=Callback::new(move |_| state.update(|state| state.dialog_open = false))
                                    >
                                        "Confirm"
                                    </Button>
                                </Cluster>
                            </Modal>
                        </Show>
                    </Panel>
                </Stack>
            </Surface>

            <StatusBar>
                <StatusBarItem>{move || format!("Region: {}", region_label())}</StatusBarItem>
                <StatusBarItem>{move || format!("Languages: {}", state.with(|state| state.languages.count()))}</StatusBarItem>
                <StatusBarItem>{move || format!("Price: {}", state.with(|state| describe_thumbs(state.price_range.as_ref())))}</StatusBarItem>
            </StatusBar>
        </AppShell>
    }
}
