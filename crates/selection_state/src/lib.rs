//! Headless selection state for the multi-value input primitives.
//!
//! The crate owns the transition rules shared by single selects, multi-select comboboxes,
//! checkbox groups, toggle groups, and range sliders. Every state type is a plain value: the
//! owning view keeps it, calls a transition, and re-renders from the result. Invalid input
//! (unknown or disabled options, out-of-range thumb indexes) is ignored rather than reported,
//! so transitions return `bool` ("did the state change") instead of `Result`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod multi;
mod options;
mod range;
mod single;
mod toggle_group;

pub use multi::{DisplayItems, MultiSelectState};
pub use options::{OptionSet, OptionSetError, SelectOption};
pub use range::{
    RangeBounds, RangeBoundsConfig, RangeBoundsError, RangeState, RangeStateConfig, PAGE_STEPS,
};
pub use single::SingleSelectState;
pub use toggle_group::{ToggleGroupMode, ToggleGroupState};
