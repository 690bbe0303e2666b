//! Demo option sets and slider tracks, embedded at build time from `catalog.json`.
//!
//! Each section is validated on its own. A broken section is logged and replaced by an empty
//! option set (or a missing slider) so the rest of the page still renders.

use std::collections::BTreeMap;

use leptos::logging;
use selection_state::{
    OptionSet, OptionSetError, RangeBounds, RangeBoundsConfig, RangeBoundsError, RangeState,
    SelectOption,
};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

/// Reasons a catalog section is rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The document is not JSON or not an object of sections.
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A section the page needs is absent.
    #[error("catalog section `{section}` is missing")]
    MissingSection {
        /// Section key.
        section: &'static str,
    },
    /// A section exists but does not deserialize into its expected shape.
    #[error("catalog section `{section}` has the wrong shape: {source}")]
    Shape {
        /// Section key.
        section: &'static str,
        /// Deserializer error.
        source: serde_json::Error,
    },
    /// An option list parsed but failed validation.
    #[error("option set `{section}` is invalid: {source}")]
    Options {
        /// Section key.
        section: &'static str,
        /// Validation error.
        source: OptionSetError,
    },
    /// A slider track or its thumbs failed validation.
    #[error("slider `{section}` is invalid: {source}")]
    Slider {
        /// Section key.
        section: &'static str,
        /// Validation error.
        source: RangeBoundsError,
    },
}

#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    option_sets: BTreeMap<String, Value>,
    #[serde(default)]
    sliders: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct SliderConfig {
    bounds: RangeBoundsConfig,
    thumbs: Vec<f64>,
}

/// Validated demo data for every preview panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowcaseCatalog {
    /// Single-select, collapsible toggle group.
    pub alignment: OptionSet,
    /// Single-select toggle group that always keeps one item pressed.
    pub view_modes: OptionSet,
    /// Multi-select toggle group.
    pub text_styles: OptionSet,
    /// Checkbox group.
    pub notifications: OptionSet,
    /// Select menu.
    pub regions: OptionSet,
    /// Combobox.
    pub languages: OptionSet,
    /// Single-thumb slider.
    pub volume: Option<RangeState>,
    /// Two-thumb slider.
    pub price_range: Option<RangeState>,
}

impl ShowcaseCatalog {
    /// Catalog compiled into the binary.
    pub fn embedded() -> Self {
        Self::load(EMBEDDED_CATALOG)
    }

    /// Parses `raw`, logging and emptying every section that fails validation.
    pub fn load(raw: &str) -> Self {
        let raw = match serde_json::from_str::<RawCatalog>(raw) {
            Ok(raw) => raw,
            Err(err) => {
                logging::warn!("ui showcase: {}", CatalogError::from(err));
                RawCatalog::default()
            }
        };

        Self {
            alignment: raw.option_set("alignment"),
            view_modes: raw.option_set("view_modes"),
            text_styles: raw.option_set("text_styles"),
            notifications: raw.option_set("notifications"),
            regions: raw.option_set("regions"),
            languages: raw.option_set("languages"),
            volume: raw.slider("volume"),
            price_range: raw.slider("price_range"),
        }
    }
}

impl RawCatalog {
    fn option_set(&self, section: &'static str) -> OptionSet {
        parse_option_set(section, self.option_sets.get(section)).unwrap_or_else(|err| {
            logging::warn!("ui showcase: {err}");
            OptionSet::default()
        })
    }

    fn slider(&self, section: &'static str) -> Option<RangeState> {
        parse_slider(section, self.sliders.get(section))
            .map_err(|err| logging::warn!("ui showcase: {err}"))
            .ok()
    }
}

fn parse_option_set(section: &'static str, value: Option<&Value>) -> Result<OptionSet, CatalogError> {
    let value = value.ok_or(CatalogError::MissingSection { section })?;
    let options = Vec::<SelectOption>::deserialize(value)
        .map_err(|source| CatalogError::Shape { section, source })?;
    OptionSet::new(options).map_err(|source| CatalogError::Options { section, source })
}

fn parse_slider(section: &'static str, value: Option<&Value>) -> Result<RangeState, CatalogError> {
    let value = value.ok_or(CatalogError::MissingSection { section })?;
    let config =
        SliderConfig::deserialize(value).map_err(|source| CatalogError::Shape { section, source })?;
    RangeBounds::try_from(config.bounds)
        .and_then(|bounds| RangeState::new(bounds, config.thumbs))
        .map_err(|source| CatalogError::Slider { section, source })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn embedded_catalog_populates_every_section() {
        let catalog = ShowcaseCatalog::embedded();
        assert_eq!(catalog.alignment.len(), 4);
        assert!(!catalog.alignment.is_selectable("justify"));
        assert_eq!(catalog.view_modes.len(), 3);
        assert_eq!(catalog.languages.len(), 8);
        assert!(!catalog.languages.is_selectable("cobol"));

        let volume = catalog.volume.expect("volume slider");
        assert_eq!(volume.value(), &[40.0]);

        let price = catalog.price_range.expect("price slider");
        assert_eq!(price.value(), &[200.0, 750.0]);
        assert_eq!(price.bounds().min_separation(), 50.0);
    }

    #[test]
    fn broken_section_is_emptied_without_affecting_others() {
        let raw = json!({
            "option_sets": {
                "alignment": [
                    { "value": "left", "label": "Left" },
                    { "value": "left", "label": "Left again" }
                ],
                "regions": [{ "value": "eu-west", "label": "EU West" }]
            },
            "sliders": {
                "volume": { "bounds": { "min": 0, "max": 10, "step": 1 }, "thumbs": [12] }
            }
        })
        .to_string();

        let catalog = ShowcaseCatalog::load(&raw);
        assert!(catalog.alignment.is_empty());
        assert_eq!(catalog.regions.len(), 1);
        assert!(catalog.languages.is_empty());
        assert_eq!(catalog.volume, None);
        assert_eq!(catalog.price_range, None);
    }

    #[test]
    fn malformed_document_yields_empty_catalog() {
        assert_eq!(ShowcaseCatalog::load("{ not json"), ShowcaseCatalog::default());
    }

    #[test]
    fn section_errors_name_the_section() {
        let err = parse_option_set("regions", None).expect_err("missing");
        assert_eq!(err.to_string(), "catalog section `regions` is missing");

        let shape = json!([{ "value": "a" }]);
        let err = parse_option_set("regions", Some(&shape)).expect_err("no label");
        assert!(matches!(err, CatalogError::Shape { section: "regions", .. }));

        let blank = json!([{ "value": "a", "label": " " }]);
        let err = parse_option_set("regions", Some(&blank)).expect_err("blank label");
        assert!(matches!(
            err,
            CatalogError::Options {
                source: OptionSetError::EmptyLabel { .. },
                ..
            }
        ));
    }

    #[test]
    fn slider_rejects_conflicting_separation() {
        let slider = json!({
            "bounds": {
                "min": 0,
                "max": 100,
                "step": 5,
                "min_separation": 10,
                "min_steps_between_thumbs": 2
            },
            "thumbs": [10, 50]
        });
        let err = parse_slider("price_range", Some(&slider)).expect_err("conflict");
        assert!(matches!(
            err,
            CatalogError::Slider {
                source: RangeBoundsError::ConflictingSeparation,
                ..
            }
        ));
    }
}
