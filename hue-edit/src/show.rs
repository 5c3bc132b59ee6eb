use crossterm::style::{Color, StyledContent, Stylize};
use hue_shift::{Category, Editor, Palette, Rgba};
use std::fmt::Write;

fn swatch(color: Rgba) -> StyledContent<&'static str> {
    let (r, g, b, _) = color.to_u8();
    "      ".on(Color::Rgb { r, g, b })
}

fn line(buf: &mut String, label: &str, color: Rgba) {
    _ = writeln!(buf, "  {:<28} {} {}", label, swatch(color), color);
}

/// Render parameters and palette. Folded categories only
/// show their header.
pub(crate) fn render(editor: &Editor) -> String {
    let params = editor.params();
    let palette = editor.palette();
    let prefs = &editor.prefs;

    let mut buf = String::new();
    _ = writeln!(buf, "{}", editor.schema_path().display());
    _ = writeln!(
        buf,
        "  {:<28} {}",
        "sync with theme",
        if prefs.sync_with_theme { "on" } else { "off" }
    );
    line(&mut buf, "theme", params.theme_color);
    line(&mut buf, "base", params.base_color);
    _ = writeln!(buf, "  {:<28} {:.3}", "pressed", params.pressed_brightness);
    _ = writeln!(buf, "  {:<28} {:.3}", "disabled", params.disabled_saturation);
    _ = writeln!(buf, "  {:<28} {:.3}", "hue-shift", params.selected_hue_shift);
    line(&mut buf, "text", palette.text);

    for c in Category::array() {
        if !prefs.is_expanded(c) {
            _ = writeln!(buf, "▸ {}", c);
            continue;
        }
        _ = writeln!(buf, "▾ {}", c);
        for slot in Palette::slots().into_iter().filter(|v| v.category() == Some(c)) {
            line(&mut buf, &slot.to_string(), palette.slot(slot));
        }
    }
    buf
}
