//!
//! Color values and the RGB <-> HSL conversion.
//!
//! Both directions follow the classic CSS formulas.
//! All channels are normalized to `0.0..=1.0`, the hue
//! is a fraction of a full turn.
//!

use crate::error::LoadSchemaErr;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Color with normalized channels.
///
/// Serializes as `{"r":..,"g":..,"b":..,"a":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from 8-bit channels.
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Color from 0xRRGGBB.
    pub const fn from_u32(c: u32) -> Self {
        Self::from_u8((c >> 16) as u8, (c >> 8) as u8, c as u8)
    }

    /// Channels as 8-bit values, rounded.
    pub fn to_u8(self) -> (u8, u8, u8, u8) {
        fn ch(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        (ch(self.r), ch(self.g), ch(self.b), ch(self.a))
    }

    /// Same color with another alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Convert to HSL. Alpha is dropped.
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }
}

/// Formats as `#rrggbb` or `#rrggbbaa` if not opaque.
impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (r, g, b, a) = self.to_u8();
        if a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }
}

/// Parses `#rrggbb` and `#rrggbbaa`. The `#` is optional.
impl FromStr for Rgba {
    type Err = LoadSchemaErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(LoadSchemaErr(format!("invalid color {:?}", s)));
        }
        let Ok(v) = u32::from_str_radix(hex, 16) else {
            return Err(LoadSchemaErr(format!("invalid color {:?}", s)));
        };
        if hex.len() == 6 {
            Ok(Self::from_u32(v))
        } else {
            Ok(Self::from_u32(v >> 8).with_alpha((v & 0xff) as f32 / 255.0))
        }
    }
}

/// Hue, saturation, lightness.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Fraction of a full turn, `0.0..1.0`.
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert to an opaque RGB color.
    pub fn to_rgb(self) -> Rgba {
        hsl_to_rgb(self)
    }
}

/// RGB to HSL.
///
/// For achromatic colors the hue is undefined and set to 0.
pub fn rgb_to_hsl(color: Rgba) -> Hsl {
    let Rgba { r, g, b, .. } = color;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// HSL to RGB. The result is opaque.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgba {
    let Hsl { h, s, l } = hsl;
    if s == 0.0 {
        return Rgba::rgb(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Rgba::rgb(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

// t must be within one turn of 0..1.
fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hue_wraps_once() {
        assert_eq!(hue_to_rgb(0.0, 1.0, -0.25), 0.0);
        assert_eq!(hue_to_rgb(0.0, 1.0, 1.25), 1.0);
        assert_eq!(hue_to_rgb(0.2, 0.8, 0.4), 0.8);
    }

    #[test]
    fn parse_hex() {
        assert_eq!("#ff0000".parse::<Rgba>().expect("red"), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!("404040".parse::<Rgba>().expect("gray"), Rgba::from_u8(64, 64, 64));
        let c = "#00ff0080".parse::<Rgba>().expect("alpha");
        assert_eq!(c.to_u8(), (0, 255, 0, 128));
        assert!("#12345".parse::<Rgba>().is_err());
        assert!("#gg0000".parse::<Rgba>().is_err());
        assert!("#ffé000".parse::<Rgba>().is_err());
        assert!("+fffff".parse::<Rgba>().is_err());
        assert!("#+fffff".parse::<Rgba>().is_err());
    }

    #[test]
    fn format_hex() {
        assert_eq!(Rgba::from_u32(0xff60c0).to_string(), "#ff60c0");
        assert_eq!(Rgba::WHITE.with_alpha(0.0).to_string(), "#ffffff00");
    }
}
