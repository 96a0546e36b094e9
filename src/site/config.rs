use std::{collections::BTreeSet, path::Path};

use crate::{
    foundation::core::WeightRange,
    foundation::error::{FolioError, FolioResult},
    text::layout::Monospace,
};

/// One navigation link, keyed by `id`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavLink {
    /// Key, unique within `nav_links`.
    pub id: u32,
    /// Link text.
    #[serde(alias = "name")]
    pub label: String,
}

/// One navigation icon, keyed by `id`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavIcon {
    /// Key, unique within `nav_icons`.
    pub id: u32,
    /// Image path, e.g. `/icons/wifi.svg`.
    #[serde(alias = "img")]
    pub icon: String,
}

/// A hover-animated line of text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextBlockConfig {
    /// Text to split into glyphs.
    pub text: String,
    /// Class applied to every glyph span.
    pub class: String,
    /// Hover weight limits.
    pub range: WeightRange,
    /// Fixed per-glyph advance used for layout, in px.
    pub advance: f64,
    /// Line box height, in px.
    pub line_height: f64,
}

impl TextBlockConfig {
    /// Layout metrics for this block.
    pub fn metrics(&self) -> Monospace {
        Monospace {
            advance: self.advance,
            line_height: self.line_height,
        }
    }

    fn validate(&self, which: &str) -> FolioResult<()> {
        self.range
            .validate()
            .map_err(|e| FolioError::config(format!("{which}: {e}")))?;
        if !(self.advance.is_finite() && self.advance >= 0.0) {
            return Err(FolioError::config(format!(
                "{which}: advance must be a non-negative number"
            )));
        }
        if !(self.line_height.is_finite() && self.line_height >= 0.0) {
            return Err(FolioError::config(format!(
                "{which}: line_height must be a non-negative number"
            )));
        }
        Ok(())
    }
}

/// Everything the page renders that is not behaviour: brand, navigation
/// data, and the two welcome lines.
///
/// Missing fields fall back to the stock portfolio page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand text next to the logo.
    pub brand: String,
    /// Logo image path.
    pub logo: String,
    /// Navigation links, in display order.
    pub nav_links: Vec<NavLink>,
    /// Navigation icons, in display order.
    pub nav_icons: Vec<NavIcon>,
    /// First welcome line.
    pub subtitle: TextBlockConfig,
    /// Second, larger welcome line.
    pub title: TextBlockConfig,
    /// Class on the `<h1>` holding the title glyphs.
    pub title_heading_class: String,
    /// Vertical gap between subtitle and title lines, in px.
    pub title_gap: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "My Portfolio".to_string(),
            logo: "/images/logo.svg".to_string(),
            nav_links: vec![
                NavLink {
                    id: 1,
                    label: "Projects".to_string(),
                },
                NavLink {
                    id: 2,
                    label: "Contact".to_string(),
                },
                NavLink {
                    id: 3,
                    label: "Resume".to_string(),
                },
            ],
            nav_icons: ["wifi", "search", "user", "mode"]
                .iter()
                .zip(1..)
                .map(|(name, id)| NavIcon {
                    id,
                    icon: format!("/icons/{name}.svg"),
                })
                .collect(),
            subtitle: TextBlockConfig {
                text: "Hi, Welcome to my.".to_string(),
                class: "text-3xl font-georama".to_string(),
                range: WeightRange::SUBTITLE,
                advance: 18.0,
                line_height: 36.0,
            },
            title: TextBlockConfig {
                text: "Portfolio".to_string(),
                class: "text-9xl italic font-georama".to_string(),
                range: WeightRange::TITLE,
                advance: 76.0,
                line_height: 128.0,
            },
            title_heading_class: "mt-7".to_string(),
            title_gap: 28.0,
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate the JSON config at `path`.
    #[tracing::instrument]
    pub fn load(path: &Path) -> FolioResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            FolioError::config(format!("read site config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_json_str(&s)?;
        tracing::debug!(
            links = cfg.nav_links.len(),
            icons = cfg.nav_icons.len(),
            "site config loaded"
        );
        Ok(cfg)
    }

    /// Reject duplicate nav ids, invalid weight ranges and negative metrics.
    pub fn validate(&self) -> FolioResult<()> {
        unique_ids("nav_links", self.nav_links.iter().map(|l| l.id))?;
        unique_ids("nav_icons", self.nav_icons.iter().map(|i| i.id))?;
        self.subtitle.validate("subtitle")?;
        self.title.validate("title")?;
        if !(self.title_gap.is_finite() && self.title_gap >= 0.0) {
            return Err(FolioError::config("title_gap must be a non-negative number"));
        }
        Ok(())
    }
}

fn unique_ids(list: &str, ids: impl Iterator<Item = u32>) -> FolioResult<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FolioError::config(format!("{list}: duplicate id {id}")));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/site/config.rs"]
mod tests;
