//! Shared structural, control, overlay, and selection primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod layout;
mod overlays;
mod selection;
mod shell;

pub use controls::{
    Button, CheckboxField, FieldGroup, SegmentedControlOption, Switch, TextField,
};
pub use data_display::{Badge, Card, EmptyState, Heading, PaneHeader, Panel, Surface, Text};
pub use layout::{Cluster, Grid, Stack};
pub use overlays::{MenuItem, MenuSurface, Modal};
pub use selection::{CheckboxGroup, Combobox, RangeSlider, SelectMenu, ToggleGroup};
pub use shell::{AppShell, StatusBar, StatusBarItem};

/// Declares a copyable design-token enum whose variants map onto `data-ui-*` attribute values.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $token:literal,)+
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $(#[$meta])*
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            pub(crate) fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

token_enum! {
    /// Semantic surface variants for structural primitives.
    SurfaceVariant, default = Standard {
        /// Primary surface.
        Standard => "standard",
        /// Secondary or muted surface.
        Muted => "muted",
        /// Inset surface.
        Inset => "inset",
    }
}

token_enum! {
    /// Semantic elevation levels.
    Elevation, default = Flat {
        /// Flat surface.
        Flat => "flat",
        /// Raised surface.
        Raised => "raised",
        /// Overlay surface (menus, dialogs).
        Overlay => "overlay",
        /// Inset surface.
        Inset => "inset",
    }
}

token_enum! {
    /// Shared button variants.
    ButtonVariant, default = Standard {
        /// Standard action button.
        Standard => "standard",
        /// Primary emphasized action.
        Primary => "primary",
        /// Secondary action.
        Secondary => "secondary",
        /// Quiet style used by menu items and list rows.
        Quiet => "quiet",
        /// Destructive action.
        Danger => "danger",
        /// Segment inside a segmented control or toggle group.
        Segmented => "segmented",
    }
}

token_enum! {
    /// Shared button sizing tokens.
    ButtonSize, default = Md {
        /// Dense button.
        Sm => "sm",
        /// Default button.
        Md => "md",
        /// Large button.
        Lg => "lg",
    }
}

token_enum! {
    /// Button corner treatment.
    ButtonShape, default = Standard {
        /// Default rounded rectangle.
        Standard => "standard",
        /// Fully rounded pill.
        Pill => "pill",
    }
}

token_enum! {
    /// Shared input-field variants.
    FieldVariant, default = Standard {
        /// Standard input.
        Standard => "standard",
        /// Inset input used inside overlays.
        Inset => "inset",
    }
}

token_enum! {
    /// Shared text roles.
    TextRole, default = Body {
        /// Body text.
        Body => "body",
        /// Label text.
        Label => "label",
        /// Caption text.
        Caption => "caption",
        /// Title text.
        Title => "title",
        /// Monospace text.
        Code => "code",
    }
}

token_enum! {
    /// Shared text tone.
    TextTone, default = Primary {
        /// Primary text.
        Primary => "primary",
        /// Secondary text.
        Secondary => "secondary",
        /// Accent text.
        Accent => "accent",
        /// Warning tone.
        Warning => "warning",
    }
}

token_enum! {
    /// Shared layout gap tokens.
    LayoutGap, default = Md {
        /// No gap.
        None => "none",
        /// Small gap.
        Sm => "sm",
        /// Default gap.
        Md => "md",
        /// Large gap.
        Lg => "lg",
    }
}

token_enum! {
    /// Shared layout padding tokens.
    LayoutPadding, default = Md {
        /// No padding.
        None => "none",
        /// Compact padding.
        Sm => "sm",
        /// Default padding.
        Md => "md",
        /// Spacious padding.
        Lg => "lg",
    }
}

token_enum! {
    /// Shared cross-axis alignment tokens.
    LayoutAlign, default = Stretch {
        /// Stretch/fill.
        Stretch => "stretch",
        /// Start.
        Start => "start",
        /// Center.
        Center => "center",
        /// End.
        End => "end",
    }
}

token_enum! {
    /// Shared main-axis distribution tokens.
    LayoutJustify, default = Start {
        /// Pack at the start.
        Start => "start",
        /// Center.
        Center => "center",
        /// Space between children.
        Between => "between",
        /// Pack at the end.
        End => "end",
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-stack", None), "ui-stack");
        assert_eq!(merge_layout_class("ui-stack", Some("")), "ui-stack");
        assert_eq!(
            merge_layout_class("ui-stack", Some("preview-column")),
            "ui-stack preview-column"
        );
    }

    #[test]
    fn token_enums_default_and_map_to_dom_tokens() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonVariant::Segmented.token(), "segmented");
        assert_eq!(LayoutGap::default(), LayoutGap::Md);
        assert_eq!(LayoutJustify::Between.token(), "between");
        assert_eq!(bool_token(true), "true");
    }
}
