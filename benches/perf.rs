use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ratatui::layout::Rect;
use ratatui::style::Color;

use tui_hierarchy_decor::{
    Decorator, DisplayMode, HierarchyModel, IconGlyphs, LabelFormatter, ModeOptions,
    RowContentResolver, StyleDefinition, StyleRegistry, TemplateAssetKind, row_line,
};

struct Scene {
    names: Vec<String>,
}

impl Scene {
    fn new(len: usize) -> Self {
        let names = (0..len)
            .map(|idx| {
                if idx % 50 == 0 {
                    format!("--- Group {idx}")
                } else {
                    format!("node-{idx}")
                }
            })
            .collect();
        Self { names }
    }
}

impl HierarchyModel for Scene {
    type Id = usize;

    fn name(&self, id: usize) -> &str {
        &self.names[id]
    }

    fn asset_kind(&self, id: usize) -> TemplateAssetKind {
        match id % 5 {
            0 => TemplateAssetKind::NotATemplate,
            1 => TemplateAssetKind::Regular,
            2 => TemplateAssetKind::Variant,
            3 => TemplateAssetKind::Model,
            _ => TemplateAssetKind::MissingAsset,
        }
    }

    fn is_instance_root(&self, id: usize) -> bool {
        id % 10 == 1
    }

    fn is_selected(&self, id: usize) -> bool {
        id % 7 == 0
    }
}

fn decorator() -> Decorator {
    let registry: StyleRegistry = [
        StyleDefinition::new("Separator", "---")
            .with_mode(DisplayMode::Dark, ModeOptions::new(Color::Black, Color::White))
            .with_formatter(LabelFormatter::Uppercase),
        StyleDefinition::new("Note", "//"),
    ]
    .into_iter()
    .collect();
    Decorator::new(registry, RowContentResolver::default())
}

fn bench_decorate(c: &mut Criterion) {
    let scene = Scene::new(1_000);
    let decorator = decorator();
    let area = Rect::new(0, 0, 80, 1_000);

    c.bench_function("decorate_rows_1000", |b| {
        b.iter(|| {
            let rows =
                decorator.decorate_rows(&scene, 0..scene.names.len(), area, DisplayMode::Dark);
            for row in rows {
                black_box(row);
            }
        });
    });

    c.bench_function("decorate_and_build_lines_1000", |b| {
        let glyphs = IconGlyphs::unicode();
        b.iter(|| {
            for (_, attrs) in
                decorator.decorate_rows(&scene, 0..scene.names.len(), area, DisplayMode::Dark)
            {
                black_box(row_line(&attrs, &glyphs).width());
            }
        });
    });
}

criterion_group!(benches, bench_decorate);
criterion_main!(benches);
