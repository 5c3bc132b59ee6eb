//!
//! Load/store of the color schema as json.
//!
//! The schema is a flat record of the [PaletteParameters] and
//! every [Palette] slot. Field names are PascalCase:
//!
//! ```json
//! {
//!   "ThemeColor": { "r": 1.0, "g": 0.3764706, "b": 0.7529412, "a": 1.0 },
//!   "BaseColor": { "r": 0.2509804, "g": 0.2509804, "b": 0.2509804, "a": 1.0 },
//!   "PressedBrightness": 0.2,
//!   ...
//!   "ButtonHighlightColor": { ... },
//!   ...
//!   "ScrollRectColor": { ... }
//! }
//! ```
//!
//! Missing fields fall back to the default schema.
//!

use crate::color::Rgba;
use crate::error::LoadSchemaErr;
use crate::palette::{ColorBlock, Palette, PaletteParameters, derive_palette};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::{File, create_dir_all};
use std::io;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Directory below the project that holds the schema.
pub const SETTINGS_DIR: &str = "ProjectSettings";
/// File name of the schema.
pub const SCHEMA_FILE: &str = "ColorSchema.json";

/// Location of the schema for the given project.
pub fn schema_path(project_dir: &Path) -> PathBuf {
    project_dir.join(SETTINGS_DIR).join(SCHEMA_FILE)
}

/// Flat, persisted form of the parameters and the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ColorSchema {
    pub theme_color: Rgba,
    pub base_color: Rgba,
    pub pressed_brightness: f32,
    pub disabled_saturation: f32,
    pub selected_hue_shift: f32,
    pub text_color: Rgba,
    pub button_color: Rgba,
    pub button_highlight_color: Rgba,
    pub button_pressed_color: Rgba,
    pub button_disabled_color: Rgba,
    pub button_selected_color: Rgba,
    pub slider_color: Rgba,
    pub slider_highlight_color: Rgba,
    pub slider_pressed_color: Rgba,
    pub slider_disabled_color: Rgba,
    pub slider_fill_color: Rgba,
    pub slider_selected_color: Rgba,
    pub toggle_color: Rgba,
    pub toggle_highlight_color: Rgba,
    pub toggle_pressed_color: Rgba,
    pub toggle_disabled_color: Rgba,
    pub toggle_selected_color: Rgba,
    pub dropdown_color: Rgba,
    pub dropdown_highlight_color: Rgba,
    pub dropdown_pressed_color: Rgba,
    pub dropdown_disabled_color: Rgba,
    pub dropdown_selected_color: Rgba,
    pub input_field_color: Rgba,
    pub input_field_highlight_color: Rgba,
    pub input_field_pressed_color: Rgba,
    pub input_field_disabled_color: Rgba,
    pub input_field_selected_color: Rgba,
    pub scrollbar_color: Rgba,
    pub scrollbar_highlight_color: Rgba,
    pub scrollbar_pressed_color: Rgba,
    pub scrollbar_disabled_color: Rgba,
    pub scrollbar_selected_color: Rgba,
    pub scrollbar_image_color: Rgba,
    pub scroll_rect_color: Rgba,
}

/// Default parameters with the palette derived from them.
impl Default for ColorSchema {
    fn default() -> Self {
        let params = PaletteParameters::default();
        Self::new(&params, &derive_palette(&params))
    }
}

impl ColorSchema {
    pub fn new(params: &PaletteParameters, palette: &Palette) -> Self {
        Self {
            theme_color: params.theme_color,
            base_color: params.base_color,
            pressed_brightness: params.pressed_brightness,
            disabled_saturation: params.disabled_saturation,
            selected_hue_shift: params.selected_hue_shift,
            text_color: palette.text,
            button_color: palette.button.normal,
            button_highlight_color: palette.button.highlighted,
            button_pressed_color: palette.button.pressed,
            button_disabled_color: palette.button.disabled,
            button_selected_color: palette.button.selected,
            slider_color: palette.slider.normal,
            slider_highlight_color: palette.slider.highlighted,
            slider_pressed_color: palette.slider.pressed,
            slider_disabled_color: palette.slider.disabled,
            slider_fill_color: palette.slider_fill,
            slider_selected_color: palette.slider.selected,
            toggle_color: palette.toggle.normal,
            toggle_highlight_color: palette.toggle.highlighted,
            toggle_pressed_color: palette.toggle.pressed,
            toggle_disabled_color: palette.toggle.disabled,
            toggle_selected_color: palette.toggle.selected,
            dropdown_color: palette.dropdown.normal,
            dropdown_highlight_color: palette.dropdown.highlighted,
            dropdown_pressed_color: palette.dropdown.pressed,
            dropdown_disabled_color: palette.dropdown.disabled,
            dropdown_selected_color: palette.dropdown.selected,
            input_field_color: palette.input_field.normal,
            input_field_highlight_color: palette.input_field.highlighted,
            input_field_pressed_color: palette.input_field.pressed,
            input_field_disabled_color: palette.input_field.disabled,
            input_field_selected_color: palette.input_field.selected,
            scrollbar_color: palette.scrollbar.normal,
            scrollbar_highlight_color: palette.scrollbar.highlighted,
            scrollbar_pressed_color: palette.scrollbar.pressed,
            scrollbar_disabled_color: palette.scrollbar.disabled,
            scrollbar_selected_color: palette.scrollbar.selected,
            scrollbar_image_color: palette.scrollbar_image,
            scroll_rect_color: palette.scroll_rect,
        }
    }

    pub fn params(&self) -> PaletteParameters {
        PaletteParameters {
            theme_color: self.theme_color,
            base_color: self.base_color,
            pressed_brightness: self.pressed_brightness,
            disabled_saturation: self.disabled_saturation,
            selected_hue_shift: self.selected_hue_shift,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette {
            text: self.text_color,
            button: ColorBlock {
                normal: self.button_color,
                highlighted: self.button_highlight_color,
                pressed: self.button_pressed_color,
                disabled: self.button_disabled_color,
                selected: self.button_selected_color,
            },
            slider: ColorBlock {
                normal: self.slider_color,
                highlighted: self.slider_highlight_color,
                pressed: self.slider_pressed_color,
                disabled: self.slider_disabled_color,
                selected: self.slider_selected_color,
            },
            slider_fill: self.slider_fill_color,
            toggle: ColorBlock {
                normal: self.toggle_color,
                highlighted: self.toggle_highlight_color,
                pressed: self.toggle_pressed_color,
                disabled: self.toggle_disabled_color,
                selected: self.toggle_selected_color,
            },
            dropdown: ColorBlock {
                normal: self.dropdown_color,
                highlighted: self.dropdown_highlight_color,
                pressed: self.dropdown_pressed_color,
                disabled: self.dropdown_disabled_color,
                selected: self.dropdown_selected_color,
            },
            input_field: ColorBlock {
                normal: self.input_field_color,
                highlighted: self.input_field_highlight_color,
                pressed: self.input_field_pressed_color,
                disabled: self.input_field_disabled_color,
                selected: self.input_field_selected_color,
            },
            scrollbar: ColorBlock {
                normal: self.scrollbar_color,
                highlighted: self.scrollbar_highlight_color,
                pressed: self.scrollbar_pressed_color,
                disabled: self.scrollbar_disabled_color,
                selected: self.scrollbar_selected_color,
            },
            scrollbar_image: self.scrollbar_image_color,
            scroll_rect: self.scroll_rect_color,
        }
    }

    /// Load from the given file.
    ///
    /// A missing file gives the default schema. So does an unreadable
    /// or broken file, with a warning in the log.
    pub fn load_or_default(path: &Path) -> Self {
        match File::open(path) {
            Ok(f) => match load_schema(f) {
                Ok(schema) => schema,
                Err(e) => {
                    warn!("ignore color schema {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no color schema at {:?}, use defaults", path);
                Self::default()
            }
            Err(e) => {
                warn!("can't open color schema {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Store to the given file. Creates the parent directory.
    pub fn store_to(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        store_schema(self, File::create(path)?)
    }
}

/// Store a schema as pretty-printed json.
pub fn store_schema(schema: &ColorSchema, mut buf: impl Write) -> Result<(), io::Error> {
    serde_json::to_writer_pretty(&mut buf, schema)?;
    writeln!(buf)?;
    buf.flush()
}

/// Load a schema from json.
pub fn load_schema(mut r: impl Read) -> Result<ColorSchema, io::Error> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)?;
    serde_json::from_str(&buf).map_err(|e| io::Error::other(LoadSchemaErr(e.to_string())))
}
