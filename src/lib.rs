//! Row decoration for hierarchy tree views: template icons, role-based label colors,
//! banded background tints and prefix-styled labels.
//!
//! The crate decides *what* to draw for a row; the host view walks its rows, calls
//! [`Decorator::decorate`] (or the lower-level [`RowContentResolver`] and
//! [`StyleDefinition`] operations) and draws the returned [`RowVisualAttributes`].
//!
//! Feature flags:
//! - `serde`: serde support for `DisplayMode`, `ModePair`, `RowTints`, `Palette`,
//!   `ModeOptions`, `LabelCase` and `StyleConfig`.

mod context;
mod decorator;
mod error;
mod glyphs;
mod model;
pub mod prelude;
mod resolver;
mod role;
mod style;
mod theme;

pub use context::{RowGeometry, RowLayout, RowState};
pub use decorator::Decorator;
pub use error::{DecorError, Result};
pub use glyphs::{IconGlyphs, row_cell, row_line, row_style};
pub use model::HierarchyModel;
pub use resolver::{RowContentResolver, RowVisualAttributes};
pub use role::{IconId, ItemRole, TemplateAssetKind};
#[cfg(feature = "serde")]
pub use style::StyleConfig;
pub use style::{
    LabelCase, LabelFormatter, ModeOptions, StyleDefinition, StyleRegistry, format_label,
    resolve_mode,
};
pub use theme::{DisplayMode, ModePair, Palette, RowTints};
