use leptos::*;
use leptos_meta::*;
use serde_json::Value;
use ui_showcase::UiShowcaseApp;

use crate::SnapshotStore;

const SNAPSHOT_KEY: &str = "selection-showcase.state.v1";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let store = SnapshotStore::new(SNAPSHOT_KEY);
    let restored_state = store.load();
    let persist = Callback::new(move |snapshot: Value| {
        if let Err(err) = store.save(&snapshot) {
            logging::warn!("showcase snapshot not saved: {err}");
        }
    });

    view! {
        <Title text="Selection Showcase" />
        <Meta name="description" content="Toggle groups, selects, comboboxes, and range sliders over headless selection state." />

        <main class="site-root">
            <UiShowcaseApp restored_state=restored_state on_state_change=persist />
        </main>
    }
}
