pub use crate::{
    DecorError, Decorator, DisplayMode, HierarchyModel, IconGlyphs, IconId, ItemRole, LabelCase,
    LabelFormatter, ModeOptions, ModePair, Palette, RowContentResolver, RowGeometry, RowLayout,
    RowState, RowTints, RowVisualAttributes, StyleDefinition, StyleRegistry, TemplateAssetKind,
    format_label, resolve_mode, row_cell, row_line, row_style,
};

#[cfg(feature = "serde")]
pub use crate::StyleConfig;
