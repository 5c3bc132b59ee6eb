//!
//! Fan a [Palette] out to live widgets.
//!
//! The widgets are provided by a [WidgetHost]. It hands out
//! handles per category and is free to find them however it
//! likes. Every change is announced to an [UndoJournal] first.
//!

use crate::color::Rgba;
use crate::palette::{Category, ColorBlock, Palette};
use log::debug;

/// Something with a single color. Text or an image.
pub trait Graphic {
    fn name(&self) -> &str;

    fn set_color(&mut self, color: Rgba);
}

/// Handle to a widget of one of the [Category]s.
pub trait Widget {
    fn name(&self) -> &str;

    /// Replace the state colors.
    ///
    /// Not called for scroll rects.
    fn set_colors(&mut self, colors: ColorBlock);

    /// The image that goes with the widget, if any.
    ///
    /// This is the fill of a slider, the handle image of a
    /// scrollbar and the background of a scroll rect.
    fn image_mut(&mut self) -> Option<&mut dyn Graphic>;
}

/// Provides the widgets that receive the palette.
pub trait WidgetHost {
    /// All text elements.
    fn texts(&mut self) -> Vec<&mut dyn Graphic>;

    /// All widgets of the category.
    fn widgets(&mut self, category: Category) -> Vec<&mut dyn Widget>;
}

/// Receives an entry before each change.
pub trait UndoJournal {
    fn record(&mut self, target: &str, label: &str);
}

/// Journal that forgets everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUndo;

impl UndoJournal for NoUndo {
    fn record(&mut self, _target: &str, _label: &str) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoEntry {
    pub target: String,
    pub label: String,
}

impl UndoJournal for Vec<UndoEntry> {
    fn record(&mut self, target: &str, label: &str) {
        self.push(UndoEntry {
            target: target.to_string(),
            label: label.to_string(),
        });
    }
}

/// Undo label for the state colors of a category.
pub fn color_label(category: Category) -> String {
    format!("Change {} Color", category.title())
}

/// Undo label for the image of a category.
pub fn image_label(category: Category) -> String {
    match category {
        Category::Slider => "Change Slider Fill Color".to_string(),
        c => format!("Change {} Image Color", c.title()),
    }
}

/// Write the palette to every widget the host knows.
///
/// Text gets the text color. Every widget gets the state colors
/// of its category, if it has an image that gets the slider fill,
/// scrollbar image or scroll rect color.
pub fn apply_palette(palette: &Palette, host: &mut impl WidgetHost, undo: &mut impl UndoJournal) {
    let mut n_text = 0;
    for text in host.texts() {
        undo.record(text.name(), "Change Text Color");
        text.set_color(palette.text);
        n_text += 1;
    }

    let mut n_widget = 0;
    let mut n_image = 0;
    for category in Category::array() {
        let block = palette.block(category);
        let image = palette.image(category);
        let color_label = color_label(category);
        let image_label = image_label(category);

        for widget in host.widgets(category) {
            undo.record(widget.name(), &color_label);
            if let Some(block) = block {
                widget.set_colors(block);
            }
            n_widget += 1;

            if let Some(color) = image {
                if let Some(graphic) = widget.image_mut() {
                    undo.record(graphic.name(), &image_label);
                    graphic.set_color(color);
                    n_image += 1;
                }
            }
        }
    }

    debug!(
        "applied palette to {} texts, {} widgets, {} images",
        n_text, n_widget, n_image
    );
}
