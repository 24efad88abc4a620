// Decorates a small scene hierarchy and prints the rendered rows.
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};
use ratatui::widgets::Widget;

use tui_hierarchy_decor::prelude::*;

// Flat scene: names, template kinds and which rows are instance roots.
struct Scene {
    names: Vec<&'static str>,
    kinds: Vec<TemplateAssetKind>,
    roots: Vec<bool>,
    selected: usize,
}

impl Scene {
    fn new() -> Self {
        use TemplateAssetKind::{MissingAsset, Model, NotATemplate, Regular, Variant};
        Self {
            names: vec![
                "--- Environment",
                "Terrain",
                "Rock",
                "Moss",
                "Door (Red)",
                "Hinge",
                "Lamp",
                "--- Actors",
                "Player",
            ],
            kinds: vec![
                NotATemplate,
                NotATemplate,
                Model,
                Model,
                Variant,
                Variant,
                MissingAsset,
                NotATemplate,
                Regular,
            ],
            roots: vec![false, false, true, false, true, false, true, false, true],
            selected: 8,
        }
    }
}

impl HierarchyModel for Scene {
    type Id = usize;

    fn name(&self, id: usize) -> &str {
        self.names[id]
    }

    fn asset_kind(&self, id: usize) -> TemplateAssetKind {
        self.kinds[id]
    }

    fn is_instance_root(&self, id: usize) -> bool {
        self.roots[id]
    }

    fn is_selected(&self, id: usize) -> bool {
        id == self.selected
    }

    // Terrain was added by hand outside any template.
    fn has_local_override(&self, id: usize) -> bool {
        id == 1
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mode = DisplayMode::from_dark(std::env::args().any(|arg| arg == "--dark"));

    // Separator style: registered for both modes, upper-cased label.
    let separator = StyleDefinition::new("Separator", "---")
        .with_mode(
            DisplayMode::Light,
            ModeOptions::new(Color::Rgb(180, 180, 180), Color::Black).modifier(Modifier::BOLD),
        )
        .with_mode(
            DisplayMode::Dark,
            ModeOptions::new(Color::Rgb(30, 30, 30), Color::White).modifier(Modifier::BOLD),
        )
        .with_formatter(LabelFormatter::Uppercase);
    let registry: StyleRegistry = [separator].into_iter().collect();
    let decorator = Decorator::new(registry, RowContentResolver::default());

    let scene = Scene::new();
    let glyphs = IconGlyphs::unicode();
    let area = Rect::new(0, 0, 32, 9);
    let mut buffer = Buffer::empty(area);

    for (geometry, attrs) in decorator.decorate_rows(&scene, 0..scene.names.len(), area, mode) {
        buffer.set_style(geometry.rect, row_style(&attrs));
        row_line(&attrs, &glyphs).render(geometry.rect, &mut buffer);
    }

    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        println!("{}", row.trim_end());
    }
}
