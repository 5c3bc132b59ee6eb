//!
//! Derives a palette of widget state colors from two colors and
//! applies it to ui widgets.
//!
//! * The theme color drives the highlighted, pressed, disabled and
//!   selected states. Pressed is lighter, disabled is less saturated
//!   and selected has its hue rotated.
//! * The base color is the normal color of every widget. The text
//!   color is derived from it too.
//!
//! ## Usage
//!
//! ```rust
//! # use hue_shift::{PaletteParameters, Rgba, derive_palette};
//! let params = PaletteParameters {
//!     theme_color: Rgba::from_u32(0x2080ff),
//!     ..Default::default()
//! };
//! let palette = derive_palette(&params);
//!
//! assert_eq!(palette.button.normal, params.base_color);
//! assert_eq!(palette.button.pressed, palette.toggle.pressed);
//! ```
//!
//! The palette is persisted with [schema], the editor flags with
//! [prefs] and written to widgets with [apply]. [Editor] ties
//! all of it together.
//!

mod color;
mod editor;
mod error;
mod palette;

pub mod apply;
pub mod prefs;
pub mod schema;

pub use color::{Hsl, Rgba, hsl_to_rgb, rgb_to_hsl};
pub use editor::Editor;
pub use error::LoadSchemaErr;
pub use palette::{
    Category, ColorBlock, Palette, PaletteParameters, Slot, State, derive_palette,
};
pub use schema::{ColorSchema, load_schema, store_schema};
