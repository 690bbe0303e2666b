//! Shared UI primitive library for the component showcase.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed
//! by the stylesheet. Selection widgets ([`ToggleGroup`], [`CheckboxGroup`], [`SelectMenu`],
//! [`Combobox`], [`RangeSlider`]) are controlled: they render a `selection_state` value and
//! report the next one through `on_change` instead of owning it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    AppShell, Badge, Button, ButtonShape, ButtonSize, ButtonVariant, Card, CheckboxField,
    CheckboxGroup, Cluster, Combobox, Elevation, EmptyState, FieldGroup, FieldVariant, Grid,
    Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, MenuItem, MenuSurface, Modal,
    PaneHeader, Panel, RangeSlider, SegmentedControlOption, SelectMenu, Stack,
    StatusBar, StatusBarItem, Surface, SurfaceVariant, Switch, Text, TextField, TextRole,
    TextTone, ToggleGroup,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Badge, Button, ButtonShape, ButtonSize, ButtonVariant, Card, CheckboxField,
        CheckboxGroup, Cluster, Combobox, Elevation, EmptyState, FieldGroup, FieldVariant, Grid,
        Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, MenuItem, MenuSurface,
        Modal, PaneHeader, Panel, RangeSlider, SegmentedControlOption,
        SelectMenu, Stack, StatusBar, StatusBarItem, Surface, SurfaceVariant, Switch, Text,
        TextField, TextRole, TextTone, ToggleGroup,
    };
}
