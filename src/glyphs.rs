use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Cell;
use smallvec::SmallVec;

use crate::resolver::RowVisualAttributes;
use crate::role::IconId;

/// Terminal glyphs for the symbolic icon keys.
#[derive(Clone, Copy, Debug)]
pub struct IconGlyphs<'a> {
    pub object: &'a str,
    pub template: &'a str,
    pub template_model: &'a str,
    pub template_variant: &'a str,
    pub override_added: &'a str,
    pub continuation: &'a str,
}

impl IconGlyphs<'static> {
    pub const fn unicode() -> Self {
        Self {
            object: "◻",
            template: "◆",
            template_model: "▣",
            template_variant: "◈",
            override_added: "+",
            continuation: "›",
        }
    }

    pub const fn ascii() -> Self {
        Self {
            object: "o",
            template: "#",
            template_model: "M",
            template_variant: "V",
            override_added: "+",
            continuation: ">",
        }
    }
}

impl<'a> IconGlyphs<'a> {
    pub const fn glyph(&self, icon: IconId) -> &'a str {
        match icon {
            IconId::GenericObject => self.object,
            IconId::GenericTemplate => self.template,
            IconId::ModelTemplate => self.template_model,
            IconId::VariantTemplate => self.template_variant,
            IconId::AddedOverride => self.override_added,
            IconId::ContinuationArrow => self.continuation,
        }
    }
}

impl Default for IconGlyphs<'static> {
    fn default() -> Self {
        Self::unicode()
    }
}

/// Row style: background tint plus label color and modifier.
pub fn row_style(attrs: &RowVisualAttributes) -> Style {
    Style::default()
        .bg(attrs.background_color)
        .fg(attrs.text_color)
        .add_modifier(attrs.text_modifier)
}

/// Builds `<icon><sep><label>[ <arrow>]` for a decorated row.
///
/// The icon column is two cells wide, matching [`crate::RowGeometry::layout`]
/// with `icon_width = 2`; the override badge takes the separator cell so it
/// stays inside the icon column.
pub fn row_line<'a>(attrs: &'a RowVisualAttributes, glyphs: &IconGlyphs<'a>) -> Line<'a> {
    let label_style = Style::default()
        .fg(attrs.text_color)
        .add_modifier(attrs.text_modifier);

    let mut spans = SmallVec::<[Span<'a>; 6]>::new();
    spans.push(Span::styled(glyphs.glyph(attrs.icon), label_style));
    if attrs.show_aux_badge {
        spans.push(Span::raw(glyphs.glyph(IconId::AddedOverride)));
    } else {
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(attrs.formatted_label.as_str(), label_style));
    if attrs.show_continuation_arrow {
        spans.push(Span::raw(" "));
        spans.push(Span::raw(glyphs.glyph(IconId::ContinuationArrow)));
    }

    spans
        .into_iter()
        .collect::<Line>()
        .style(Style::default().bg(attrs.background_color))
}

pub fn row_cell<'a>(attrs: &'a RowVisualAttributes, glyphs: &IconGlyphs<'a>) -> Cell<'a> {
    Cell::from(row_line(attrs, glyphs)).style(row_style(attrs))
}
