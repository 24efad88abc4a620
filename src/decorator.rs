use ratatui::layout::Rect;

use crate::context::{RowGeometry, RowState};
use crate::error::Result;
use crate::model::HierarchyModel;
use crate::resolver::{RowContentResolver, RowVisualAttributes};
use crate::style::{ModeOptions, StyleDefinition, StyleRegistry};
use crate::theme::DisplayMode;

/// Per-row entry point: default decoration plus labeled styles from the registry.
///
/// The registry is only read while decorating, so a configured decorator can
/// be shared by every row of a render pass.
#[derive(Clone, Debug, Default)]
pub struct Decorator {
    registry: StyleRegistry,
    resolver: RowContentResolver,
}

impl Decorator {
    pub const fn new(registry: StyleRegistry, resolver: RowContentResolver) -> Self {
        Self { registry, resolver }
    }

    pub const fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Mutable access for configuration between render passes.
    pub const fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    pub const fn resolver(&self) -> &RowContentResolver {
        &self.resolver
    }

    /// Decorates one row.
    ///
    /// A style failure (missing mode, prefix mismatch) is logged and the row
    /// falls back to its default decoration.
    pub fn decorate(
        &self,
        state: &RowState,
        geometry: &RowGeometry,
        mode: DisplayMode,
        label: &str,
    ) -> RowVisualAttributes {
        let mut attrs = self.resolver.resolve(state, geometry, mode, label);
        let Some(style) = self.registry.match_label(label) else {
            return attrs;
        };

        match apply_style(style, label, mode) {
            Ok((options, formatted)) => {
                attrs.background_color = options.background_color;
                attrs.text_color = options.text_color;
                attrs.text_modifier = options.modifier;
                attrs.formatted_label = formatted;
                attrs.style = Some(style.name().to_owned());
            }
            Err(err) => {
                tracing::warn!(
                    "Skipping style '{}' for row '{}': {}",
                    style.name(),
                    label,
                    err
                );
            }
        }
        attrs
    }

    /// Decorates a single item of the host model.
    pub fn decorate_item<M: HierarchyModel>(
        &self,
        model: &M,
        id: M::Id,
        geometry: &RowGeometry,
        mode: DisplayMode,
    ) -> RowVisualAttributes {
        let state = model.row_state(id);
        self.decorate(&state, geometry, mode, model.name(id))
    }

    /// Decorates consecutive single-line rows laid out from the top of `area`.
    ///
    /// Rows that do not fit into `area` are not yielded.
    pub fn decorate_rows<'a, M, I>(
        &'a self,
        model: &'a M,
        ids: I,
        area: Rect,
        mode: DisplayMode,
    ) -> impl Iterator<Item = (RowGeometry, RowVisualAttributes)> + 'a
    where
        M: HierarchyModel,
        I: IntoIterator<Item = M::Id> + 'a,
        I::IntoIter: 'a,
    {
        ids.into_iter()
            .zip(0..area.height)
            .map(move |(id, index)| {
                let geometry = RowGeometry::nth_row(area, index);
                let attrs = self.decorate_item(model, id, &geometry, mode);
                (geometry, attrs)
            })
    }
}

fn apply_style(
    style: &StyleDefinition,
    label: &str,
    mode: DisplayMode,
) -> Result<(ModeOptions, String)> {
    let options = style.resolve_mode(mode)?;
    let formatted = style.format_label(label, true)?;
    Ok((options, formatted))
}
