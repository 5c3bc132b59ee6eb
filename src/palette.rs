use crate::color::{Hsl, Rgba, hsl_to_rgb, rgb_to_hsl};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Widget categories that receive a color set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Button = 0,
    Slider,
    Toggle,
    Dropdown,
    InputField,
    Scrollbar,
    ScrollRect,
}

impl Category {
    pub const LEN: usize = 7;

    pub const fn array() -> [Category; Category::LEN] {
        use Category::*;
        [
            Button, Slider, Toggle, Dropdown, InputField, Scrollbar, ScrollRect,
        ]
    }

    pub fn from_name(n: &str) -> Option<Self> {
        match n {
            "button" => Some(Category::Button),
            "slider" => Some(Category::Slider),
            "toggle" => Some(Category::Toggle),
            "dropdown" => Some(Category::Dropdown),
            "input-field" => Some(Category::InputField),
            "scrollbar" => Some(Category::Scrollbar),
            "scroll-rect" => Some(Category::ScrollRect),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Button => "button",
            Category::Slider => "slider",
            Category::Toggle => "toggle",
            Category::Dropdown => "dropdown",
            Category::InputField => "input-field",
            Category::Scrollbar => "scrollbar",
            Category::ScrollRect => "scroll-rect",
        }
    }

    /// Human-readable name, used for undo labels.
    pub const fn title(self) -> &'static str {
        match self {
            Category::Button => "Button",
            Category::Slider => "Slider",
            Category::Toggle => "Toggle",
            Category::Dropdown => "Dropdown",
            Category::InputField => "Input Field",
            Category::Scrollbar => "Scrollbar",
            Category::ScrollRect => "Scroll Rect",
        }
    }

    /// Scroll rects only have a background image, no state colors.
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Category::ScrollRect)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Interaction states of a selectable widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum State {
    Normal,
    Highlighted,
    Pressed,
    Disabled,
    Selected,
}

impl State {
    pub const LEN: usize = 5;

    pub const fn array() -> [State; State::LEN] {
        use State::*;
        [Normal, Highlighted, Pressed, Disabled, Selected]
    }

    pub fn from_name(n: &str) -> Option<Self> {
        match n {
            "normal" => Some(State::Normal),
            "highlighted" => Some(State::Highlighted),
            "pressed" => Some(State::Pressed),
            "disabled" => Some(State::Disabled),
            "selected" => Some(State::Selected),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            State::Normal => "normal",
            State::Highlighted => "highlighted",
            State::Pressed => "pressed",
            State::Disabled => "disabled",
            State::Selected => "selected",
        }
    }
}

/// The state colors of one selectable widget.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorBlock {
    pub normal: Rgba,
    pub highlighted: Rgba,
    pub pressed: Rgba,
    pub disabled: Rgba,
    pub selected: Rgba,
}

impl ColorBlock {
    pub fn get(&self, state: State) -> Rgba {
        match state {
            State::Normal => self.normal,
            State::Highlighted => self.highlighted,
            State::Pressed => self.pressed,
            State::Disabled => self.disabled,
            State::Selected => self.selected,
        }
    }

    pub fn set(&mut self, state: State, color: Rgba) {
        match state {
            State::Normal => self.normal = color,
            State::Highlighted => self.highlighted = color,
            State::Pressed => self.pressed = color,
            State::Disabled => self.disabled = color,
            State::Selected => self.selected = color,
        }
    }
}

/// The five inputs of the palette derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteParameters {
    /// Accent color for highlighted, pressed, disabled and selected.
    pub theme_color: Rgba,
    /// Normal color of every widget.
    pub base_color: Rgba,
    /// Lightness added for the pressed state. `0..=1`
    pub pressed_brightness: f32,
    /// Multiplier for the saturation of the disabled state. `0..=1`
    pub disabled_saturation: f32,
    /// Hue rotation for the selected state. `-0.5..=0.5`
    pub selected_hue_shift: f32,
}

impl Default for PaletteParameters {
    fn default() -> Self {
        Self {
            theme_color: Rgba::from_u8(255, 96, 192),
            base_color: Rgba::from_u8(64, 64, 64),
            pressed_brightness: 0.2,
            disabled_saturation: 0.3,
            selected_hue_shift: 0.5,
        }
    }
}

impl PaletteParameters {
    /// Copy with every scalar limited to its range.
    /// NaN is replaced by the default value.
    pub fn clamped(self) -> Self {
        self.clamped_or(&Self::default())
    }

    /// Copy with every scalar limited to its range.
    /// NaN is replaced by the value in `prev`.
    pub fn clamped_or(self, prev: &Self) -> Self {
        Self {
            pressed_brightness: clamp_or(
                self.pressed_brightness,
                prev.pressed_brightness,
                0.0,
                1.0,
            ),
            disabled_saturation: clamp_or(
                self.disabled_saturation,
                prev.disabled_saturation,
                0.0,
                1.0,
            ),
            selected_hue_shift: clamp_or(
                self.selected_hue_shift,
                prev.selected_hue_shift,
                -0.5,
                0.5,
            ),
            ..self
        }
    }
}

fn clamp_or(v: f32, prev: f32, min: f32, max: f32) -> f32 {
    if v.is_nan() {
        prev.clamp(min, max)
    } else {
        v.clamp(min, max)
    }
}

/// One individually editable color of a [Palette].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Text,
    State(Category, State),
    SliderFill,
    ScrollbarImage,
}

impl Slot {
    /// Category the slot belongs to. None for the text color.
    pub fn category(&self) -> Option<Category> {
        match self {
            Slot::Text => None,
            Slot::State(c, _) => Some(*c),
            Slot::SliderFill => Some(Category::Slider),
            Slot::ScrollbarImage => Some(Category::Scrollbar),
        }
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Text => write!(f, "text"),
            Slot::State(c, s) => write!(f, "{}.{}", c.name(), s.name()),
            Slot::SliderFill => write!(f, "slider.fill"),
            Slot::ScrollbarImage => write!(f, "scrollbar.image"),
        }
    }
}

impl FromStr for Slot {
    type Err = ();

    /// Parses `text`, `slider.fill`, `scrollbar.image` or `category.state`.
    /// A scroll-rect only knows `scroll-rect.normal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => return Ok(Slot::Text),
            "slider.fill" => return Ok(Slot::SliderFill),
            "scrollbar.image" => return Ok(Slot::ScrollbarImage),
            _ => {}
        }
        let mut ss = s.split('.');
        let Some(category) = ss.next().and_then(Category::from_name) else {
            return Err(());
        };
        let Some(state) = ss.next().and_then(State::from_name) else {
            return Err(());
        };
        if ss.next().is_some() {
            return Err(());
        }
        if !category.is_selectable() && state != State::Normal {
            return Err(());
        }
        Ok(Slot::State(category, state))
    }
}

/// Colors for every widget category.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Palette {
    pub text: Rgba,
    pub button: ColorBlock,
    pub slider: ColorBlock,
    pub slider_fill: Rgba,
    pub toggle: ColorBlock,
    pub dropdown: ColorBlock,
    pub input_field: ColorBlock,
    pub scrollbar: ColorBlock,
    pub scrollbar_image: Rgba,
    pub scroll_rect: Rgba,
}

impl Palette {
    /// State colors of a category. None for scroll rects.
    pub fn block(&self, category: Category) -> Option<ColorBlock> {
        match category {
            Category::Button => Some(self.button),
            Category::Slider => Some(self.slider),
            Category::Toggle => Some(self.toggle),
            Category::Dropdown => Some(self.dropdown),
            Category::InputField => Some(self.input_field),
            Category::Scrollbar => Some(self.scrollbar),
            Category::ScrollRect => None,
        }
    }

    fn block_mut(&mut self, category: Category) -> Option<&mut ColorBlock> {
        match category {
            Category::Button => Some(&mut self.button),
            Category::Slider => Some(&mut self.slider),
            Category::Toggle => Some(&mut self.toggle),
            Category::Dropdown => Some(&mut self.dropdown),
            Category::InputField => Some(&mut self.input_field),
            Category::Scrollbar => Some(&mut self.scrollbar),
            Category::ScrollRect => None,
        }
    }

    /// Color for the image attached to a widget.
    ///
    /// This is the slider fill, the scrollbar image and
    /// the scroll rect background.
    pub fn image(&self, category: Category) -> Option<Rgba> {
        match category {
            Category::Slider => Some(self.slider_fill),
            Category::Scrollbar => Some(self.scrollbar_image),
            Category::ScrollRect => Some(self.scroll_rect),
            _ => None,
        }
    }

    pub fn slot(&self, slot: Slot) -> Rgba {
        match slot {
            Slot::Text => self.text,
            Slot::State(Category::ScrollRect, _) => self.scroll_rect,
            Slot::State(c, s) => self.block(c).unwrap_or_default().get(s),
            Slot::SliderFill => self.slider_fill,
            Slot::ScrollbarImage => self.scrollbar_image,
        }
    }

    pub fn set_slot(&mut self, slot: Slot, color: Rgba) {
        match slot {
            Slot::Text => self.text = color,
            Slot::State(Category::ScrollRect, _) => self.scroll_rect = color,
            Slot::State(c, s) => {
                if let Some(block) = self.block_mut(c) {
                    block.set(s, color);
                }
            }
            Slot::SliderFill => self.slider_fill = color,
            Slot::ScrollbarImage => self.scrollbar_image = color,
        }
    }

    /// All slots in display order.
    pub fn slots() -> Vec<Slot> {
        let mut r = vec![Slot::Text];
        for c in Category::array() {
            if c.is_selectable() {
                for s in State::array() {
                    r.push(Slot::State(c, s));
                }
            } else {
                r.push(Slot::State(c, State::Normal));
            }
            match c {
                Category::Slider => r.push(Slot::SliderFill),
                Category::Scrollbar => r.push(Slot::ScrollbarImage),
                _ => {}
            }
        }
        r
    }
}

/// Derive the full palette.
///
/// * Every normal color, the slider fill, the scrollbar image and the
///   scroll rect get the base color.
/// * The text color keeps hue and saturation of the base color, its
///   lightness flips to 0.2 for light bases and 0.8 for dark bases.
/// * Highlighted is the theme color.
/// * Pressed adds `pressed_brightness` to the lightness of the theme color.
/// * Disabled multiplies its saturation with `disabled_saturation`.
/// * Selected rotates its hue by `selected_hue_shift`.
///
/// The state colors are the same for all categories.
pub fn derive_palette(params: &PaletteParameters) -> Palette {
    let base = params.base_color;

    let Hsl { h, s, l } = rgb_to_hsl(base);
    let text = hsl_to_rgb(Hsl::new(h, s, if l > 0.5 { 0.2 } else { 0.8 }));

    let Hsl { h, s, l } = rgb_to_hsl(params.theme_color);
    let highlighted = hsl_to_rgb(Hsl::new(h, s, l));
    let pressed = hsl_to_rgb(Hsl::new(h, s, (l + params.pressed_brightness).min(1.0)));
    let disabled = hsl_to_rgb(Hsl::new(h, s * params.disabled_saturation, l));
    let selected = hsl_to_rgb(Hsl::new(
        (h + params.selected_hue_shift).rem_euclid(1.0),
        s,
        l,
    ));

    let block = ColorBlock {
        normal: base,
        highlighted,
        pressed,
        disabled,
        selected,
    };

    debug!(
        "derive palette theme={} base={} -> text={} pressed={} disabled={} selected={}",
        params.theme_color, base, text, pressed, disabled, selected
    );

    Palette {
        text,
        button: block,
        slider: block,
        slider_fill: base,
        toggle: block,
        dropdown: block,
        input_field: block,
        scrollbar: block,
        scrollbar_image: base,
        scroll_rect: base,
    }
}
