//! Controlled selection components backed by `selection_state`.
//!
//! Each component receives the current state value and an option set, runs the matching
//! transition on a copy when the user interacts, and hands the next value to `on_change`.
//! The owner stores it and feeds it back through `value`. Rejected transitions (disabled or
//! unknown options, thumbs pinned against a neighbour) do not call `on_change`.

use selection_state::{
    MultiSelectState, OptionSet, RangeBounds, RangeState, SelectOption, SingleSelectState,
    ToggleGroupMode, ToggleGroupState, PAGE_STEPS,
};

use super::*;

const DEFAULT_MAX_DISPLAYED: usize = 2;

/// Applies `update` to a copy of the current state and publishes it when something changed.
fn commit<S: Clone + 'static>(
    component: &'static str,
    current: Signal<S>,
    options: StoredValue<OptionSet>,
    on_change: Option<Callback<S>>,
    update: impl FnOnce(&OptionSet, &mut S) -> bool,
) {
    let mut next = current.get_untracked();
    if !options.with_value(|options| update(options, &mut next)) {
        logging::debug_warn!("{component}: transition ignored");
        return;
    }
    if let Some(on_change) = on_change {
        on_change.call(next);
    }
}

fn commit_range(
    current: Signal<RangeState>,
    on_change: Option<Callback<RangeState>>,
    update: impl FnOnce(&mut RangeState) -> bool,
) -> RangeState {
    let mut next = current.get_untracked();
    if update(&mut next) {
        if let Some(on_change) = on_change {
            on_change.call(next.clone());
        }
    } else {
        logging::debug_warn!("range-slider: thumb did not move");
    }
    next
}

fn mode_token(mode: ToggleGroupMode) -> &'static str {
    match mode {
        ToggleGroupMode::Single => "single",
        ToggleGroupMode::Multiple => "multiple",
    }
}

fn option_label(options: &OptionSet, value: &str) -> String {
    options
        .get(value)
        .map(|option| option.label.clone())
        .unwrap_or_else(|| value.to_string())
}

/// "A, B, +3 more" text for a multi-select trigger.
pub(crate) fn summary_text(labels: &[String], overflow_count: usize) -> String {
    let mut parts = labels.to_vec();
    if overflow_count > 0 {
        parts.push(format!("+{overflow_count} more"));
    }
    parts.join(", ")
}

/// Start and end of the highlighted track, in percent.
///
/// A single thumb fills from the track start; several thumbs fill between the outer two.
pub(crate) fn active_track(range: &RangeState) -> (f64, f64) {
    let last = range.len().saturating_sub(1);
    if last == 0 {
        (0.0, range.percent(0))
    } else {
        (range.percent(0), range.percent(last))
    }
}

/// Track and thumb count, the parts of a range that decide which inputs exist.
pub(crate) fn track_layout(range: &RangeState) -> (RangeBounds, usize) {
    (*range.bounds(), range.len())
}

/// Track value under a click at `fraction` (0..=1) of the track width.
pub(crate) fn track_position(bounds: &RangeBounds, fraction: f64) -> f64 {
    bounds.min() + fraction.clamp(0.0, 1.0) * (bounds.max() - bounds.min())
}

fn format_thumb(value: f64) -> String {
    format!("{value}")
}

#[component]
/// Segmented toggle group in single (optionally collapsible) or multiple mode.
pub fn ToggleGroup(
    options: OptionSet,
    #[prop(into)] value: MaybeSignal<ToggleGroupState>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<ToggleGroupState>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let disabled = Signal::derive(move || disabled.get());
    let items: Vec<SelectOption> = options.iter().cloned().collect();
    let options = store_value(options);

    let toggle = move |item: String| {
        if disabled.get_untracked() {
            return;
        }
        commit("toggle-group", value, options, on_change, |options, state| {
            state.toggle_item(options, &item)
        });
    };

    view! {
        <div
            class=merge_layout_class("ui-toggle-group", layout_class)
            role="group"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="toggle-group"
            data-ui-mode=move || mode_token(value.get().mode())
            data-ui-collapsible=move || bool_token(value.get().is_collapsible())
        >
            {items
                .into_iter()
                .map(|option| {
                    let SelectOption { value: item, label, disabled: item_disabled } = option;
                    let pressed_item = item.clone();
                    view! {
                        <SegmentedControlOption
                            aria_label=label.clone()
                            selected=Signal::derive(move || value.get().is_pressed(&pressed_item))
                            disabled=Signal::derive(move || item_disabled || disabled.get())
                            on_click=Callback::new(move |_| toggle(item.clone()))
                        >
                            {label}
                        </SegmentedControlOption>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// Vertical checkbox list over a multi-selection.
pub fn CheckboxGroup(
    options: OptionSet,
    #[prop(into)] value: MaybeSignal<MultiSelectState>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_change: Option<Callback<MultiSelectState>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let items: Vec<SelectOption> = options.iter().cloned().collect();
    let options = store_value(options);

    view! {
        <div
            class=merge_layout_class("ui-checkbox-group", layout_class)
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="checkbox-group"
            data-ui-count=move || value.get().count()
        >
            {items
                .into_iter()
                .map(|option| {
                    let SelectOption { value: item, label, disabled } = option;
                    let checked_item = item.clone();
                    view! {
                        <FieldGroup title=label.clone() disabled=disabled>
                            <CheckboxField
                                aria_label=label
                                disabled=disabled
                                checked=Signal::derive(move || value.get().is_selected(&checked_item))
                                on_change=Callback::new(move |ev: web_sys::Event| {
                                    let checked = event_target_checked(&ev);
                                    let item = item.clone();
                                    commit("checkbox-group", value, options, on_change, move |options, state| {
                                        if checked {
                                            state.add(options, &item)
                                        } else {
                                            state.remove(options, &item)
                                        }
                                    });
                                })
                            />
                        </FieldGroup>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
/// Single-select dropdown rendered as a listbox popover, with a clear action.
pub fn SelectMenu(
    options: OptionSet,
    #[prop(into)] value: MaybeSignal<SingleSelectState>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<SingleSelectState>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let options = store_value(options);
    let open = create_rw_signal(false);
    let placeholder = placeholder.unwrap_or_else(|| "Select an option".to_string());
    let list_label = store_value(aria_label.clone().unwrap_or_default());

    let trigger_label = move || {
        value
            .get()
            .selected()
            .map(|selected| options.with_value(|options| option_label(options, selected)))
            .unwrap_or_else(|| placeholder.clone())
    };

    let select = move |item: String| {
        commit("select-menu", value, options, on_change, |options, state| {
            state.select(options, &item)
        });
        open.set(false);
    };

    let clear = move |_: MouseEvent| {
        commit("select-menu", value, options, on_change, |_, state| state.clear());
        open.set(false);
    };

    view! {
        <div
            class=merge_layout_class("ui-select-menu", layout_class)
            data-ui-primitive="true"
            data-ui-kind="select-menu"
            data-ui-open=move || bool_token(open.get())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" && open.get_untracked() {
                    ev.prevent_default();
                    open.set(false);
                }
            }
        >
            <Button
                aria_label=aria_label.unwrap_or_default()
                aria_haspopup="listbox"
                aria_expanded=Signal::derive(move || open.get())
                on_click=Callback::new(move |_| open.update(|open| *open = !*open))
            >
                {trigger_label}
            </Button>
            <Show when=move || open.get() fallback=|| ()>
                <MenuSurface role="listbox" aria_label=list_label.get_value()>
                    {options.with_value(|options| {
                        options
                            .iter()
                            .cloned()
                            .map(|option| {
                                let SelectOption { value: item, label, disabled } = option;
                                let selected_item = item.clone();
                                view! {
                                    <MenuItem
                                        role="option"
                                        disabled=disabled
                                        selected=Signal::derive(move || value.get().is_selected(&selected_item))
                                        on_click=Callback::new(move |_| select(item.clone()))
                                    >
                                        {label}
                                    </MenuItem>
                                }
                            })
                            .collect_view()
                    })}
                    <Show when=move || value.get().selected().is_some() fallback=|| ()>
                        <Button variant=ButtonVariant::Quiet ui_slot="clear" on_click=Callback::new(clear)>
                            "Clear selection"
                        </Button>
                    </Show>
                </MenuSurface>
            </Show>
        </div>
    }
}

#[component]
/// Filterable multi-select with a badge summary ("A, B, +3 more") on the trigger.
pub fn Combobox(
    options: OptionSet,
    #[prop(into)] value: MaybeSignal<MultiSelectState>,
    #[prop(default = DEFAULT_MAX_DISPLAYED)] max_displayed: usize,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<MultiSelectState>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let options = store_value(options);
    let open = create_rw_signal(false);
    let query = create_rw_signal(String::new());
    let placeholder = store_value(placeholder.unwrap_or_else(|| "Select options".to_string()));
    let aria_label = aria_label.unwrap_or_default();
    let search_label = store_value(format!("Search {aria_label}"));

    let summary = Signal::derive(move || {
        let state = value.get();
        let items = state.display_items(max_displayed);
        let labels: Vec<String> = options.with_value(|options| {
            items
                .shown
                .iter()
                .map(|selected| option_label(options, selected))
                .collect()
        });
        (labels, items.overflow_count)
    });

    let toggle = move |item: String| {
        commit("combobox", value, options, on_change, |options, state| {
            state.toggle(options, &item)
        });
    };

    view! {
        <div
            class=merge_layout_class("ui-combobox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="combobox"
            data-ui-open=move || bool_token(open.get())
        >
            <Button
                aria_label=Signal::derive(move || {
                    let (labels, overflow) = summary.get();
                    format!("{aria_label}: {}", summary_text(&labels, overflow))
                })
                aria_haspopup="listbox"
                aria_expanded=Signal::derive(move || open.get())
                on_click=Callback::new(move |_| open.update(|open| *open = !*open))
            >
                {move || {
                    let (labels, overflow) = summary.get();
                    if labels.is_empty() && overflow == 0 {
                        return view! { <Text tone=TextTone::Secondary>{placeholder.get_value()}</Text> }
                            .into_view();
                    }
                    view! {
                        {labels
                            .into_iter()
                            .map(|label| view! { <Badge>{label}</Badge> })
                            .collect_view()}
                        {(overflow > 0).then(|| view! {
                            <Badge tone=TextTone::Accent>{format!("+{overflow} more")}</Badge>
                        })}
                    }
                    .into_view()
                }}
            </Button>
            <Show when=move || open.get() fallback=|| ()>
                <MenuSurface role="listbox" aria_multiselectable="true">
                    <TextField
                        variant=FieldVariant::Inset
                        role="searchbox"
                        aria_label=search_label.get_value()
                        placeholder="Filter..."
                        value=Signal::derive(move || query.get())
                        on_input=Callback::new(move |ev: web_sys::Event| query.set(event_target_value(&ev)))
                        on_keydown=Callback::new(move |ev: KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ev.prevent_default();
                                open.set(false);
                            }
                        })
                    />
                    {move || {
                        let matches: Vec<SelectOption> = options.with_value(|options| {
                            options.filter(&query.get()).into_iter().cloned().collect()
                        });
                        if matches.is_empty() {
                            return view! { <EmptyState>"No matches"</EmptyState> }.into_view();
                        }
                        matches
                            .into_iter()
                            .map(|option| {
                                let SelectOption { value: item, label, disabled } = option;
                                let selected_item = item.clone();
                                view! {
                                    <MenuItem
                                        role="option"
                                        disabled=disabled
                                        selected=Signal::derive(move || value.get().is_selected(&selected_item))
                                        on_click=Callback::new(move |_| toggle(item.clone()))
                                    >
                                        {label}
                                    </MenuItem>
                                }
                            })
                            .collect_view()
                    }}
                    <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Between>
                        <Button
                            variant=ButtonVariant::Quiet
                            size=ButtonSize::Sm
                            on_click=Callback::new(move |_| {
                                commit("combobox", value, options, on_change, |options, state| {
                                    state.select_all(options)
                                });
                            })
                        >
                            "Select all"
                        </Button>
                        <Button
                            variant=ButtonVariant::Quiet
                            size=ButtonSize::Sm
                            on_click=Callback::new(move |_| {
                                commit("combobox", value, options, on_change, |_, state| state.clear());
                                query.set(String::new());
                            })
                        >
                            "Clear"
                        </Button>
                    </Cluster>
                </MenuSurface>
            </Show>
        </div>
    }
}

#[component]
/// Slider with one native range input per thumb.
///
/// Native inputs supply pointer dragging and arrow keys; every raw value still goes through
/// [`RangeState::set_thumb`], so thumbs stop at the minimum separation instead of crossing.
/// PageUp/PageDown and Home/End are handled here to keep those jumps neighbour-aware. A click
/// on the bare track moves the nearest thumb. The inputs are rebuilt only when the track or
/// the thumb count of `value` changes; thumb moves update them in place.
pub fn RangeSlider(
    #[prop(into)] value: MaybeSignal<RangeState>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_change: Option<Callback<RangeState>>,
) -> impl IntoView {
    let value = Signal::derive(move || value.get());
    let disabled = Signal::derive(move || disabled.get());
    let layout = create_memo(move |_| value.with(track_layout));
    let aria_label = store_value(aria_label.unwrap_or_else(|| "Slider".to_string()));

    let track_click = move |ev: MouseEvent| {
        if disabled.get_untracked() {
            return;
        }
        let track = event_target::<web_sys::HtmlElement>(&ev);
        let width = f64::from(track.client_width());
        if width <= 0.0 {
            return;
        }
        let (bounds, _) = layout.get_untracked();
        let raw = track_position(&bounds, f64::from(ev.offset_x()) / width);
        commit_range(value, on_change, |state| {
            let index = state.closest_thumb(raw);
            state.set_thumb(index, raw)
        });
    };

    let thumbs = move || {
        let (bounds, thumb_count) = layout.get();
        (0..thumb_count)
            .map(|index| {
                let thumb_label = aria_label.with_value(|label| {
                    if thumb_count == 1 {
                        label.clone()
                    } else {
                        format!("{label} ({} of {thumb_count})", index + 1)
                    }
                });
                let current =
                    move || value.with(|range| range.value().get(index).copied()).unwrap_or(bounds.min());

                view! {
                    <input
                        class="ui-range-thumb"
                        type="range"
                        min=bounds.min()
                        max=bounds.max()
                        step=bounds.step()
                        aria-label=thumb_label
                        disabled=move || disabled.get()
                        prop:value=move || format_thumb(current())
                        data-ui-slot="thumb"
                        data-ui-index=index
                        data-ui-value=move || format_thumb(current())
                        on:input=move |ev| {
                            let Ok(raw) = event_target_value(&ev).parse::<f64>() else {
                                return;
                            };
                            let next = commit_range(value, on_change, |state| state.set_thumb(index, raw));
                            if let Some(settled) = next.value().get(index) {
                                event_target::<web_sys::HtmlInputElement>(&ev)
                                    .set_value(&format_thumb(*settled));
                            }
                        }
                        on:keydown=move |ev: KeyboardEvent| {
                            let update: fn(&mut RangeState, usize) -> bool = match ev.key().as_str() {
                                "PageUp" => |state, index| state.step_thumb(index, PAGE_STEPS),
                                "PageDown" => |state, index| state.step_thumb(index, -PAGE_STEPS),
                                "Home" => |state, index| state.set_thumb_to_min(index),
                                "End" => |state, index| state.set_thumb_to_max(index),
                                _ => return,
                            };
                            ev.prevent_default();
                            commit_range(value, on_change, |state| update(state, index));
                        }
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div
            class=merge_layout_class("ui-range-slider", layout_class)
            role="group"
            aria-label=aria_label.get_value()
            style=move || {
                let (start, end) = value.with(active_track);
                format!("--ui-range-start: {start:.2}%; --ui-range-end: {end:.2}%")
            }
            data-ui-primitive="true"
            data-ui-kind="range-slider"
            data-ui-thumbs=move || layout.get().1
            data-ui-min=move || layout.get().0.min()
            data-ui-max=move || layout.get().0.max()
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <div data-ui-slot="track" on:click=track_click></div>
            {thumbs}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_text_appends_overflow_counter() {
        let labels = vec!["Rust".to_string(), "Go".to_string()];
        assert_eq!(summary_text(&labels, 3), "Rust, Go, +3 more");
        assert_eq!(summary_text(&labels, 0), "Rust, Go");
        assert_eq!(summary_text(&[], 4), "+4 more");
        assert_eq!(summary_text(&[], 0), "");
    }

    #[test]
    fn active_track_fills_from_start_for_single_thumb() {
        let bounds = RangeBounds::new(0.0, 200.0, 1.0, 0.0).expect("bounds");
        let single = RangeState::new(bounds, vec![50.0]).expect("range");
        assert_eq!(active_track(&single), (0.0, 25.0));

        let double = RangeState::new(bounds, vec![50.0, 150.0]).expect("range");
        assert_eq!(active_track(&double), (25.0, 75.0));
    }

    #[test]
    fn track_clicks_map_onto_the_value_range() {
        let bounds = RangeBounds::new(-50.0, 150.0, 1.0, 0.0).expect("bounds");
        assert_eq!(track_position(&bounds, 0.0), -50.0);
        assert_eq!(track_position(&bounds, 0.25), 0.0);
        assert_eq!(track_position(&bounds, 1.5), 150.0);

        let range = RangeState::new(bounds, vec![0.0, 100.0]).expect("range");
        assert_eq!(range.closest_thumb(track_position(&bounds, 0.6)), 1);
    }

    #[test]
    fn track_layout_changes_with_thumb_count_but_not_thumb_moves() {
        let bounds = RangeBounds::new(0.0, 100.0, 1.0, 5.0).expect("bounds");
        let mut range = RangeState::new(bounds, vec![20.0, 80.0]).expect("range");
        let before = track_layout(&range);
        assert_eq!(before, (bounds, 2));

        assert!(range.set_thumb(0, 40.0));
        assert_eq!(track_layout(&range), before);

        assert!(range.set_all(vec![10.0, 50.0, 90.0]));
        assert_eq!(track_layout(&range), (bounds, 3));
    }

    #[test]
    fn option_label_falls_back_to_value() {
        let options = OptionSet::new(vec![SelectOption::new("rs", "Rust")]).expect("options");
        assert_eq!(option_label(&options, "rs"), "Rust");
        assert_eq!(option_label(&options, "zig"), "zig");
    }

    #[test]
    fn thumb_values_format_without_trailing_zeroes() {
        assert_eq!(format_thumb(65.0), "65");
        assert_eq!(format_thumb(0.3), "0.3");
    }
}
