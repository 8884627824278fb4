// src/ui/legend.rs

use crate::model::Species;
use crate::session::ModelKind;
use gtk4::gdk;
use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, CssProvider, DropDown, Frame, Label, Orientation, Stack,
    STYLE_PROVIDER_PRIORITY_APPLICATION,
};

/// Left-hand panel: model selector, current model title, color legend and a
/// mouse controls hint. The legend is a [`Stack`] with one page per model, so
/// switching models is a visible-child swap.
#[derive(Clone)]
pub struct ModelPanel {
    pub root: GtkBox,
    pub selector: DropDown,
    title: Label,
    legend_stack: Stack,
}

impl ModelPanel {
    pub fn build() -> Self {
        inject_css();

        let root = GtkBox::new(Orientation::Vertical, 12);
        root.set_margin_start(12);
        root.set_margin_end(12);
        root.set_margin_top(12);
        root.set_margin_bottom(12);
        root.set_width_request(230);

        root.append(
            &Label::builder()
                .label("Model")
                .halign(Align::Start)
                .build(),
        );

        let titles: Vec<&str> = ModelKind::ALL.iter().map(|kind| kind.title()).collect();
        let selector = DropDown::from_strings(&titles);
        root.append(&selector);

        let title = Label::builder().halign(Align::Start).wrap(true).build();
        title.add_css_class("model-title");
        root.append(&title);

        let legend_stack = Stack::new();
        for kind in ModelKind::ALL {
            legend_stack.add_named(&legend_page(kind), Some(page_name(kind)));
        }
        let legend_frame = Frame::new(Some("Legend"));
        legend_frame.set_child(Some(&legend_stack));
        root.append(&legend_frame);

        let hint = Label::builder()
            .label("Drag to rotate \u{2022} middle-drag to pan \u{2022} scroll to zoom")
            .halign(Align::Start)
            .wrap(true)
            .build();
        hint.add_css_class("controls-hint");
        root.append(&hint);

        Self {
            root,
            selector,
            title,
            legend_stack,
        }
    }

    /// Sync every panel element to the active model. This also moves the
    /// dropdown, so the dropdown's own notify handler must tolerate seeing
    /// its current selection again.
    pub fn show_model(&self, kind: ModelKind) {
        self.title.set_text(kind.title());
        self.legend_stack.set_visible_child_name(page_name(kind));

        let position = ModelKind::ALL
            .iter()
            .position(|candidate| *candidate == kind)
            .unwrap_or(0) as u32;
        if self.selector.selected() != position {
            self.selector.set_selected(position);
        }
    }
}

fn page_name(kind: ModelKind) -> &'static str {
    match kind {
        ModelKind::Lattice => "lattice",
        ModelKind::Molecule => "molecule",
    }
}

fn legend_page(kind: ModelKind) -> GtkBox {
    let page = GtkBox::new(Orientation::Vertical, 6);
    page.set_margin_start(10);
    page.set_margin_end(10);
    page.set_margin_top(8);
    page.set_margin_bottom(8);

    match kind {
        ModelKind::Lattice => {
            page.append(&legend_row(Species::Na, "Na\u{207a} sodium ion"));
            page.append(&legend_row(Species::Cl, "Cl\u{207b} chloride ion"));
        }
        ModelKind::Molecule => {
            page.append(&legend_row(Species::P, "P phosphorus"));
            page.append(&legend_row(Species::Cl, "Cl chlorine"));
        }
    }
    page
}

fn legend_row(species: Species, label: &str) -> GtkBox {
    let row = GtkBox::new(Orientation::Horizontal, 8);

    let swatch = GtkBox::new(Orientation::Horizontal, 0);
    swatch.set_valign(Align::Center);
    swatch.add_css_class("legend-swatch");
    swatch.add_css_class(&format!("swatch-{}", species.symbol().to_lowercase()));
    row.append(&swatch);

    row.append(&Label::builder().label(label).halign(Align::Start).build());
    row
}

/// Panel styling plus one swatch class per species, generated from the same
/// colors the renderer uses so the legend can never drift from the scene.
fn inject_css() {
    let mut css = String::from(
        ".model-title { font-size: 15px; font-weight: bold; }\n\
         .legend-swatch { min-width: 16px; min-height: 16px; border-radius: 8px; }\n\
         .controls-hint { font-size: 11px; color: #888888; }\n",
    );
    for species in Species::ALL {
        let (r, g, b) = species.color();
        css.push_str(&format!(
            ".swatch-{} {{ background-color: rgb({}, {}, {}); }}\n",
            species.symbol().to_lowercase(),
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
        ));
    }

    let provider = CssProvider::new();
    provider.load_from_data(&css);

    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
