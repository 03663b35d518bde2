use serde::{Deserialize, Serialize};

use crate::core::{ChartClassifier, ChartLayout, ChartStyle, DisplayMode, NumberLocale};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_FULLSCREEN_TITLE: &str = "Chart Visualization";

/// Chart view bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Every field is optional
/// in JSON and falls back to the stock value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    #[serde(default = "ChartLayout::inline")]
    pub inline: ChartLayout,
    #[serde(default = "ChartLayout::fullscreen")]
    pub fullscreen: ChartLayout,
    #[serde(default)]
    pub style: ChartStyle,
    #[serde(default)]
    pub locale: NumberLocale,
    #[serde(default)]
    pub rules: ChartClassifier,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_show_summary")]
    pub show_summary: bool,
}

fn default_title() -> String {
    DEFAULT_FULLSCREEN_TITLE.to_owned()
}

fn default_show_summary() -> bool {
    true
}

impl Default for ChartViewConfig {
    fn default() -> Self {
        Self {
            inline: ChartLayout::inline(),
            fullscreen: ChartLayout::fullscreen(),
            style: ChartStyle::default(),
            locale: NumberLocale::default(),
            rules: ChartClassifier::default(),
            title: default_title(),
            show_summary: default_show_summary(),
        }
    }
}

impl ChartViewConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn layout(&self, mode: DisplayMode) -> &ChartLayout {
        match mode {
            DisplayMode::Inline => &self.inline,
            DisplayMode::Fullscreen => &self.fullscreen,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: NumberLocale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_classifier(mut self, rules: ChartClassifier) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, mode: DisplayMode, layout: ChartLayout) -> Self {
        match mode {
            DisplayMode::Inline => self.inline = layout,
            DisplayMode::Fullscreen => self.fullscreen = layout,
        }
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.inline
            .validate()
            .map_err(|e| ChartError::InvalidConfig(format!("inline layout: {e}")))?;
        self.fullscreen
            .validate()
            .map_err(|e| ChartError::InvalidConfig(format!("fullscreen layout: {e}")))?;
        self.style.resolve_palette()?;
        Ok(())
    }
}
