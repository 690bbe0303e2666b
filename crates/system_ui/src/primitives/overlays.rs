use super::*;

#[component]
/// Overlay surface for menus, listboxes, and popovers.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_multiselectable: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            aria-multiselectable=aria_multiselectable
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-elevation=Elevation::Overlay.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu or listbox row built on the quiet button variant.
pub fn MenuItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let selected = Signal::derive(move || selected.get());
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role=role.unwrap_or_else(|| "menuitem".to_string())
            aria_selected=selected
            disabled=disabled
            selected=selected
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Modal dialog surface. Escape requests dismissal through `on_dismiss`.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] aria_label: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-modal-backdrop" data-ui-primitive="true" data-ui-kind="modal-backdrop">
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                tabindex="-1"
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-elevation=Elevation::Overlay.token()
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        if let Some(on_dismiss) = on_dismiss.as_ref() {
                            on_dismiss.call(());
                        }
                    }
                }
            >
                {children()}
            </div>
        </div>
    }
}
