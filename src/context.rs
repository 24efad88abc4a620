use ratatui::layout::Rect;

use crate::role::ItemRole;

/// Per-row facts supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RowState {
    pub role: ItemRole,
    /// The item is the nearest template-instance root (its attachment point).
    pub is_instance_root: bool,
    pub is_selected: bool,
    /// The item is an instance-specific addition not present in any template asset.
    pub has_local_override: bool,
}

impl RowState {
    pub const fn new(role: ItemRole) -> Self {
        Self {
            role,
            is_instance_root: false,
            is_selected: false,
            has_local_override: false,
        }
    }

    /// The item is the attachment point of a template instance.
    pub const fn is_template_root(&self) -> bool {
        self.is_instance_root && self.role.is_template()
    }

    pub const fn instance_root(mut self, is_root: bool) -> Self {
        self.is_instance_root = is_root;
        self
    }

    pub const fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }

    pub const fn local_override(mut self, has_override: bool) -> Self {
        self.has_local_override = has_override;
        self
    }
}

/// Row rectangle plus the nominal height of one row in the same units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowGeometry {
    pub rect: Rect,
    pub row_height: u16,
}

/// Rectangles for the individual glyphs of a decorated row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowLayout {
    pub icon: Rect,
    pub label: Rect,
    /// Square right after the row; may lie outside the row rect.
    pub arrow: Rect,
    /// Overlay on the icon column.
    pub badge: Rect,
}

impl RowGeometry {
    pub const fn new(rect: Rect, row_height: u16) -> Self {
        Self { rect, row_height }
    }

    /// Geometry of the `index`-th row of single-line rows starting at `area`.
    pub const fn nth_row(area: Rect, index: u16) -> Self {
        Self {
            rect: Rect {
                x: area.x,
                y: area.y.saturating_add(index),
                width: area.width,
                height: 1,
            },
            row_height: 1,
        }
    }

    /// Vertical position used for tint banding.
    #[inline]
    pub const fn position(&self) -> u16 {
        self.rect.y
    }

    /// Splits the row into icon, label, arrow and badge rectangles.
    pub const fn layout(&self, icon_width: u16) -> RowLayout {
        let rect = self.rect;
        let icon_width = if icon_width < rect.width {
            icon_width
        } else {
            rect.width
        };
        RowLayout {
            icon: Rect {
                width: icon_width,
                ..rect
            },
            label: Rect {
                x: rect.x.saturating_add(icon_width),
                width: rect.width - icon_width,
                ..rect
            },
            arrow: Rect {
                x: rect.x.saturating_add(rect.width),
                width: rect.height,
                ..rect
            },
            badge: Rect {
                width: icon_width,
                ..rect
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_arrow_after_row() {
        let geometry = RowGeometry::new(Rect::new(4, 2, 20, 1), 1);
        let layout = geometry.layout(2);

        assert_eq!(layout.icon, Rect::new(4, 2, 2, 1));
        assert_eq!(layout.label, Rect::new(6, 2, 18, 1));
        assert_eq!(layout.arrow, Rect::new(24, 2, 1, 1));
        assert_eq!(layout.badge, layout.icon);
    }

    #[test]
    fn layout_clamps_icon_to_narrow_rows() {
        let layout = RowGeometry::new(Rect::new(0, 0, 1, 1), 1).layout(2);
        assert_eq!(layout.icon.width, 1);
        assert_eq!(layout.label.width, 0);
    }

    #[test]
    fn nth_row_offsets_from_area() {
        let geometry = RowGeometry::nth_row(Rect::new(1, 3, 10, 8), 2);
        assert_eq!(geometry.rect, Rect::new(1, 5, 10, 1));
        assert_eq!(geometry.position(), 5);
    }
}
