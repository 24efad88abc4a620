use std::fmt;
use std::sync::Arc;

use ratatui::style::{Color, Modifier};
use rustc_hash::{FxBuildHasher, FxHashMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DecorError, Result};
use crate::theme::DisplayMode;

/// Colors and font style a labeled row uses in one display mode.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeOptions {
    pub background_color: Color,
    pub text_color: Color,
    #[cfg_attr(feature = "serde", serde(default = "Modifier::empty"))]
    pub modifier: Modifier,
}

impl ModeOptions {
    pub const fn new(background_color: Color, text_color: Color) -> Self {
        Self {
            background_color,
            text_color,
            modifier: Modifier::empty(),
        }
    }

    pub const fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifier = modifier;
        self
    }
}

/// Case conversion available to configuration files.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LabelCase {
    #[default]
    AsIs,
    Upper,
    Lower,
}

/// Final transformation applied to a label after prefix handling.
#[derive(Clone, Default)]
pub enum LabelFormatter {
    #[default]
    Identity,
    Uppercase,
    Lowercase,
    Custom(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl LabelFormatter {
    /// Wraps a closure as a formatter.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn apply(&self, label: &str) -> String {
        match self {
            Self::Identity => label.to_owned(),
            Self::Uppercase => label.to_uppercase(),
            Self::Lowercase => label.to_lowercase(),
            Self::Custom(f) => f(label),
        }
    }
}

impl From<LabelCase> for LabelFormatter {
    fn from(case: LabelCase) -> Self {
        match case {
            LabelCase::AsIs => Self::Identity,
            LabelCase::Upper => Self::Uppercase,
            LabelCase::Lower => Self::Lowercase,
        }
    }
}

impl fmt::Debug for LabelFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Uppercase => f.write_str("Uppercase"),
            Self::Lowercase => f.write_str("Lowercase"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// A named row style selected by a label prefix (e.g. `"---"` for separators).
///
/// Definitions are built before a render pass and read-only while it runs.
#[derive(Clone, Debug)]
pub struct StyleDefinition {
    name: String,
    prefix: String,
    light: Option<ModeOptions>,
    dark: Option<ModeOptions>,
    formatter: LabelFormatter,
}

impl StyleDefinition {
    /// Creates a style with no mode options and an identity formatter.
    pub fn new(name: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            light: None,
            dark: None,
            formatter: LabelFormatter::Identity,
        }
    }

    /// Registers the options used in `mode`.
    pub fn with_mode(mut self, mode: DisplayMode, options: ModeOptions) -> Self {
        match mode {
            DisplayMode::Light => self.light = Some(options),
            DisplayMode::Dark => self.dark = Some(options),
        }
        self
    }

    pub fn with_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub const fn formatter(&self) -> &LabelFormatter {
        &self.formatter
    }

    /// Returns `true` if the label carries this style's (non-empty) prefix.
    pub fn matches(&self, label: &str) -> bool {
        !self.prefix.is_empty() && label.starts_with(self.prefix.as_str())
    }

    /// Returns the options registered for `mode`.
    ///
    /// A missing entry is a [`DecorError::Configuration`]; no other mode is
    /// substituted.
    pub fn resolve_mode(&self, mode: DisplayMode) -> Result<ModeOptions> {
        let options = match mode {
            DisplayMode::Light => self.light,
            DisplayMode::Dark => self.dark,
        };
        options.ok_or_else(|| DecorError::configuration(self.name.as_str(), mode))
    }

    /// Produces the display label for `raw_label`.
    ///
    /// With `strip_prefix`, the label must begin with the prefix; the prefix and
    /// surrounding whitespace are removed before the formatter runs.
    pub fn format_label(&self, raw_label: &str, strip_prefix: bool) -> Result<String> {
        let label = if strip_prefix {
            raw_label
                .strip_prefix(self.prefix.as_str())
                .ok_or_else(|| DecorError::prefix_mismatch(self.prefix.as_str(), raw_label))?
                .trim()
        } else {
            raw_label
        };
        Ok(self.formatter.apply(label))
    }
}

/// Free-function form of [`StyleDefinition::resolve_mode`].
pub fn resolve_mode(style: &StyleDefinition, mode: DisplayMode) -> Result<ModeOptions> {
    style.resolve_mode(mode)
}

/// Free-function form of [`StyleDefinition::format_label`].
pub fn format_label(
    style: &StyleDefinition,
    raw_label: &str,
    strip_prefix: bool,
) -> Result<String> {
    style.format_label(raw_label, strip_prefix)
}

/// Serializable form of a [`StyleDefinition`].
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StyleConfig {
    pub name: String,
    pub prefix: String,
    #[serde(default)]
    pub light: Option<ModeOptions>,
    #[serde(default)]
    pub dark: Option<ModeOptions>,
    #[serde(default)]
    pub case: LabelCase,
}

#[cfg(feature = "serde")]
impl From<StyleConfig> for StyleDefinition {
    fn from(config: StyleConfig) -> Self {
        Self {
            name: config.name,
            prefix: config.prefix,
            light: config.light,
            dark: config.dark,
            formatter: config.case.into(),
        }
    }
}

/// Ordered set of styles, looked up by name or matched by label prefix.
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    styles: Vec<StyleDefinition>,
    by_name: FxHashMap<String, usize>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            styles: Vec::with_capacity(capacity),
            by_name: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Builds a registry from deserialized configs, in order.
    #[cfg(feature = "serde")]
    pub fn from_configs<I>(configs: I) -> Self
    where
        I: IntoIterator<Item = StyleConfig>,
    {
        let mut registry = Self::new();
        for config in configs {
            registry.register(config.into());
        }
        registry
    }

    /// Adds a style. A style with the same name is replaced in place, keeping
    /// its matching priority.
    pub fn register(&mut self, style: StyleDefinition) {
        if let Some(&idx) = self.by_name.get(style.name()) {
            tracing::debug!("Replacing hierarchy style '{}'", style.name());
            self.styles[idx] = style;
            return;
        }
        self.by_name.insert(style.name.clone(), self.styles.len());
        self.styles.push(style);
    }

    pub fn get(&self, name: &str) -> Option<&StyleDefinition> {
        self.by_name.get(name).map(|&idx| &self.styles[idx])
    }

    /// Returns the first registered style whose prefix starts `label`.
    pub fn match_label(&self, label: &str) -> Option<&StyleDefinition> {
        self.styles.iter().find(|style| style.matches(label))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDefinition> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl FromIterator<StyleDefinition> for StyleRegistry {
    fn from_iter<I: IntoIterator<Item = StyleDefinition>>(iter: I) -> Self {
        let mut registry = Self::new();
        for style in iter {
            registry.register(style);
        }
        registry
    }
}
