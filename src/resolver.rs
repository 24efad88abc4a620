use ratatui::style::{Color, Modifier};

use crate::context::{RowGeometry, RowState};
use crate::role::{IconId, ItemRole};
use crate::theme::{DisplayMode, Palette};

/// Everything the host needs to draw one row. Built fresh for every call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowVisualAttributes {
    pub icon: IconId,
    pub text_color: Color,
    pub text_modifier: Modifier,
    pub background_color: Color,
    pub formatted_label: String,
    pub show_aux_badge: bool,
    pub show_continuation_arrow: bool,
    /// Name of the labeled style applied to the row, if any.
    pub style: Option<String>,
}

/// Stateless resolver for icons, text colors, tints and overlay glyphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowContentResolver {
    palette: Palette,
}

impl RowContentResolver {
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Icon for a role, assuming the item is an instance root.
    pub const fn classify_icon(role: ItemRole) -> IconId {
        match role {
            ItemRole::Plain => IconId::GenericObject,
            ItemRole::TemplateModel => IconId::ModelTemplate,
            ItemRole::TemplateVariant => IconId::VariantTemplate,
            ItemRole::TemplateRoot | ItemRole::MissingReference => IconId::GenericTemplate,
        }
    }

    /// Icon for a row: only the instance root gets a template icon, its
    /// members draw as plain objects.
    pub const fn icon_for(state: &RowState) -> IconId {
        if state.is_template_root() {
            Self::classify_icon(state.role)
        } else {
            IconId::GenericObject
        }
    }

    /// Text color with precedence missing-red > selection > template accent > default.
    pub const fn resolve_text_color(
        &self,
        role: ItemRole,
        is_selected: bool,
        mode: DisplayMode,
    ) -> Color {
        if role.is_missing() {
            return self.palette.missing;
        }
        if is_selected {
            return self.palette.selected;
        }
        if role.is_valid_template() {
            return self.palette.template_accent.get(mode);
        }
        self.palette.label
    }

    /// Alternating background tint.
    ///
    /// The parity test is `position % (2 * row_height) != 0`, which bands with a
    /// period of two row heights. A zero row height is treated as one.
    pub const fn resolve_row_tint(&self, geometry: &RowGeometry, mode: DisplayMode) -> Color {
        let row_height = if geometry.row_height == 0 {
            1
        } else {
            geometry.row_height
        };
        let period = (row_height as u32) * 2;
        let is_even_row = (geometry.position() as u32) % period != 0;
        let tints = self.palette.tints.get(mode);
        if is_even_row { tints.even } else { tints.odd }
    }

    /// `is_template_root` must already exclude rows outside template instances
    /// (see [`RowState::is_template_root`]).
    pub const fn should_show_continuation_arrow(is_template_root: bool) -> bool {
        is_template_root
    }

    /// Flags an instance-specific addition sitting outside any template instance.
    pub const fn should_show_aux_badge(role: ItemRole, has_local_override: bool) -> bool {
        !role.is_template() && has_local_override
    }

    /// Resolves the default decoration of a row; `label` is shown unchanged.
    pub fn resolve(
        &self,
        state: &RowState,
        geometry: &RowGeometry,
        mode: DisplayMode,
        label: &str,
    ) -> RowVisualAttributes {
        RowVisualAttributes {
            icon: Self::icon_for(state),
            text_color: self.resolve_text_color(state.role, state.is_selected, mode),
            text_modifier: Modifier::empty(),
            background_color: self.resolve_row_tint(geometry, mode),
            formatted_label: label.to_owned(),
            show_aux_badge: Self::should_show_aux_badge(state.role, state.has_local_override),
            show_continuation_arrow: Self::should_show_continuation_arrow(
                state.is_template_root(),
            ),
            style: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    const ROLES: [ItemRole; 5] = [
        ItemRole::Plain,
        ItemRole::TemplateRoot,
        ItemRole::TemplateVariant,
        ItemRole::TemplateModel,
        ItemRole::MissingReference,
    ];
    const MODES: [DisplayMode; 2] = [DisplayMode::Light, DisplayMode::Dark];

    fn geometry_at(y: u16, row_height: u16) -> RowGeometry {
        RowGeometry::new(Rect::new(0, y, 30, row_height), row_height)
    }

    #[test]
    fn classify_icon_follows_table() {
        use super::RowContentResolver as R;
        assert_eq!(R::classify_icon(ItemRole::Plain), IconId::GenericObject);
        assert_eq!(R::classify_icon(ItemRole::TemplateModel), IconId::ModelTemplate);
        assert_eq!(R::classify_icon(ItemRole::TemplateVariant), IconId::VariantTemplate);
        assert_eq!(R::classify_icon(ItemRole::TemplateRoot), IconId::GenericTemplate);
        assert_eq!(R::classify_icon(ItemRole::MissingReference), IconId::GenericTemplate);
        for role in ROLES {
            assert_eq!(R::classify_icon(role), R::classify_icon(role));
        }
    }

    #[test]
    fn only_instance_root_gets_template_icon_and_arrow() {
        let root = RowState::new(ItemRole::TemplateVariant).instance_root(true);
        let member = RowState::new(ItemRole::TemplateVariant);

        assert_eq!(RowContentResolver::icon_for(&root), IconId::VariantTemplate);
        assert_eq!(RowContentResolver::icon_for(&member), IconId::GenericObject);

        let resolver = RowContentResolver::default();
        let geometry = geometry_at(0, 1);
        assert!(
            resolver
                .resolve(&root, &geometry, DisplayMode::Light, "Door")
                .show_continuation_arrow
        );
        assert!(
            !resolver
                .resolve(&member, &geometry, DisplayMode::Light, "Hinge")
                .show_continuation_arrow
        );
    }

    #[test]
    fn instance_root_flag_outside_templates_has_no_arrow() {
        let resolver = RowContentResolver::default();
        let state = RowState::new(ItemRole::Plain).instance_root(true);
        let attrs = resolver.resolve(&state, &geometry_at(0, 1), DisplayMode::Dark, "Cube");

        assert!(!state.is_template_root());
        assert_eq!(attrs.icon, IconId::GenericObject);
        assert!(!attrs.show_continuation_arrow);
    }

    #[test]
    fn text_color_precedence() {
        let resolver = RowContentResolver::default();
        let palette = *resolver.palette();

        for mode in MODES {
            for selected in [false, true] {
                assert_eq!(
                    resolver.resolve_text_color(ItemRole::MissingReference, selected, mode),
                    palette.missing
                );
            }
            for role in ROLES.into_iter().filter(|r| !r.is_missing()) {
                assert_eq!(resolver.resolve_text_color(role, true, mode), palette.selected);
            }
            for role in [
                ItemRole::TemplateRoot,
                ItemRole::TemplateVariant,
                ItemRole::TemplateModel,
            ] {
                assert_eq!(
                    resolver.resolve_text_color(role, false, mode),
                    palette.template_accent.get(mode)
                );
            }
            assert_eq!(
                resolver.resolve_text_color(ItemRole::Plain, false, mode),
                palette.label
            );
        }
        assert_ne!(
            resolver.resolve_text_color(ItemRole::TemplateRoot, false, DisplayMode::Light),
            resolver.resolve_text_color(ItemRole::TemplateRoot, false, DisplayMode::Dark)
        );
    }

    #[test]
    fn tint_bands_with_two_row_period() {
        let resolver = RowContentResolver::default();
        for mode in MODES {
            let tints = resolver.palette().tints.get(mode);
            for row_height in [1, 16] {
                let at = |n: u16| {
                    resolver.resolve_row_tint(&geometry_at(n * row_height, row_height), mode)
                };
                assert_eq!(at(0), tints.odd);
                assert_eq!(at(1), tints.even);
                assert_eq!(at(2), at(0));
                assert_eq!(at(3), at(1));
                assert_ne!(at(0), at(1));
            }
        }
    }

    #[test]
    fn tint_parity_uses_doubled_height_not_row_index() {
        let resolver = RowContentResolver::default();
        let tints = resolver.palette().tints.light;
        // Half-row offsets are off-band as well.
        assert_eq!(
            resolver.resolve_row_tint(&geometry_at(8, 16), DisplayMode::Light),
            tints.even
        );
        assert_eq!(
            resolver.resolve_row_tint(&geometry_at(64, 16), DisplayMode::Light),
            tints.odd
        );
    }

    #[test]
    fn zero_row_height_does_not_panic() {
        let resolver = RowContentResolver::default();
        let tints = resolver.palette().tints.dark;
        assert_eq!(
            resolver.resolve_row_tint(&geometry_at(3, 0), DisplayMode::Dark),
            tints.even
        );
    }

    #[test]
    fn aux_badge_only_outside_instances() {
        use super::RowContentResolver as R;
        assert!(R::should_show_aux_badge(ItemRole::Plain, true));
        assert!(!R::should_show_aux_badge(ItemRole::Plain, false));
        for role in ROLES.into_iter().filter(|r| r.is_template()) {
            assert!(!R::should_show_aux_badge(role, true));
        }
    }

    #[test]
    fn model_root_in_dark_mode() {
        let resolver = RowContentResolver::default();
        let state = RowState::new(ItemRole::TemplateModel).instance_root(true);
        let attrs = resolver.resolve(&state, &geometry_at(0, 1), DisplayMode::Dark, "Tree");

        assert_eq!(attrs.icon, IconId::ModelTemplate);
        assert_eq!(attrs.text_color, resolver.palette().template_accent.dark);
        assert!(attrs.show_continuation_arrow);
        assert!(!attrs.show_aux_badge);
        assert_eq!(attrs.formatted_label, "Tree");
    }

    #[test]
    fn selected_missing_reference_stays_red() {
        let resolver = RowContentResolver::default();
        let state = RowState::new(ItemRole::MissingReference)
            .instance_root(true)
            .selected(true);
        let attrs = resolver.resolve(&state, &geometry_at(0, 1), DisplayMode::Light, "Lost");

        assert_eq!(attrs.text_color, resolver.palette().missing);
        assert_eq!(attrs.icon, IconId::GenericTemplate);
    }
}
