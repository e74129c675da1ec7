use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::BillingCycle;
use crate::comparison::FeatureUniverse;

pub const DEFAULT_PRELOAD_IMAGES: [&str; 2] = ["pricing-bg.jpg", "logo.svg"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        })
    }
}

/// Everything the visitor can change on the page.
///
/// Each transition returns a new value; the page is re-rendered from it. The
/// value round-trips through the query string so a link fully describes what
/// the visitor sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub billing: BillingCycle,
    pub theme: Theme,
    #[serde(rename = "compare")]
    pub comparison_open: bool,
}

impl ViewState {
    pub fn with_billing_cycle(self, billing: BillingCycle) -> Self {
        Self { billing, ..self }
    }

    pub fn toggle_theme(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    pub fn with_comparison_open(self, comparison_open: bool) -> Self {
        Self {
            comparison_open,
            ..self
        }
    }

    pub fn to_query(self) -> String {
        format!(
            "billing={}&theme={}&compare={}",
            self.billing.as_str(),
            self.theme.as_str(),
            self.comparison_open
        )
    }

    pub fn href(self) -> String {
        format!("/?{}", self.to_query())
    }
}

/// Page-wide settings fixed at startup.
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub universe: FeatureUniverse,
    pub preload_images: Vec<String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            universe: FeatureUniverse::UnionOfAll,
            preload_images: DEFAULT_PRELOAD_IMAGES
                .iter()
                .map(|image| format!("/images/{image}"))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    settings: Arc<PageSettings>,
}

impl AppState {
    pub fn new(settings: PageSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }
}
