use hue_shift::{Category, Hsl, PaletteParameters, Rgba, derive_palette, hsl_to_rgb, rgb_to_hsl};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn defaults() {
    let params = PaletteParameters::default();
    assert_eq!(params.theme_color, Rgba::from_u8(255, 96, 192));
    assert_eq!(params.base_color, Rgba::from_u8(64, 64, 64));
    assert_eq!(params.pressed_brightness, 0.2);
    assert_eq!(params.disabled_saturation, 0.3);
    assert_eq!(params.selected_hue_shift, 0.5);
}

#[test]
fn text_on_dark_base() {
    let palette = derive_palette(&PaletteParameters::default());
    assert_eq!(palette.text, Rgba::rgb(0.8, 0.8, 0.8));
}

#[test]
fn text_on_light_base() {
    let params = PaletteParameters {
        base_color: Rgba::rgb(0.9, 0.9, 0.9),
        ..Default::default()
    };
    assert_eq!(derive_palette(&params).text, Rgba::rgb(0.2, 0.2, 0.2));
}

#[test]
fn text_keeps_hue() {
    let params = PaletteParameters {
        base_color: hsl_to_rgb(Hsl::new(0.6, 0.5, 0.3)),
        ..Default::default()
    };
    let text = rgb_to_hsl(derive_palette(&params).text);
    assert!(close(text.h, 0.6), "{:?}", text);
    assert!(close(text.s, 0.5), "{:?}", text);
    assert!(close(text.l, 0.8), "{:?}", text);
}

#[test]
fn normal_is_base() {
    let params = PaletteParameters {
        base_color: Rgba::from_u32(0x336699),
        ..Default::default()
    };
    let palette = derive_palette(&params);
    for c in Category::array() {
        if let Some(block) = palette.block(c) {
            assert_eq!(block.normal, params.base_color, "{}", c);
        }
    }
    assert_eq!(palette.slider_fill, params.base_color);
    assert_eq!(palette.scrollbar_image, params.base_color);
    assert_eq!(palette.scroll_rect, params.base_color);
}

#[test]
fn homogeneous_states() {
    let params = PaletteParameters {
        theme_color: Rgba::from_u32(0x2080ff),
        ..Default::default()
    };
    let palette = derive_palette(&params);
    let button = palette.button;
    for c in Category::array() {
        if let Some(block) = palette.block(c) {
            assert_eq!(block, button, "{}", c);
        }
    }
}

#[test]
fn idempotent() {
    let params = PaletteParameters {
        theme_color: Rgba::from_u32(0x8f3a12),
        base_color: Rgba::from_u32(0xe0e0d0),
        pressed_brightness: 0.35,
        disabled_saturation: 0.7,
        selected_hue_shift: -0.2,
    };
    assert_eq!(derive_palette(&params), derive_palette(&params));
}

#[test]
fn highlighted_is_theme() {
    let params = PaletteParameters::default();
    let h = derive_palette(&params).button.highlighted;
    let t = params.theme_color;
    assert!(close(h.r, t.r) && close(h.g, t.g) && close(h.b, t.b), "{:?}", h);
}

#[test]
fn pressed_lightness() {
    let params = PaletteParameters {
        theme_color: Rgba::rgb(1.0, 0.3765, 0.7529),
        pressed_brightness: 0.2,
        ..Default::default()
    };
    let pressed = rgb_to_hsl(derive_palette(&params).button.pressed);
    assert!((pressed.l - 0.888).abs() < 1e-3, "{:?}", pressed);
}

#[test]
fn pressed_monotonic() {
    let mut last = 0.0;
    for i in 0..=20 {
        let params = PaletteParameters {
            pressed_brightness: i as f32 * 0.05,
            ..Default::default()
        };
        let l = rgb_to_hsl(derive_palette(&params).button.pressed).l;
        assert!(l + 1e-6 >= last, "{} < {}", l, last);
        assert!(l <= 1.0 + 1e-6);
        last = l;
    }
    assert!(close(last, 1.0));
}

#[test]
fn disabled_saturation() {
    let params = PaletteParameters {
        theme_color: Rgba::from_u32(0x20c040),
        disabled_saturation: 0.0,
        ..Default::default()
    };
    let disabled = derive_palette(&params).button.disabled;
    assert_eq!(disabled.r, disabled.g);
    assert_eq!(disabled.g, disabled.b);

    let params = PaletteParameters {
        disabled_saturation: 1.0,
        ..params
    };
    let palette = derive_palette(&params);
    assert_eq!(palette.button.disabled, palette.button.highlighted);

    let params = PaletteParameters {
        disabled_saturation: 0.5,
        ..params
    };
    let theme = rgb_to_hsl(params.theme_color);
    let disabled = rgb_to_hsl(derive_palette(&params).button.disabled);
    assert!(close(disabled.s, theme.s * 0.5), "{:?}", disabled);
    assert!(close(disabled.l, theme.l), "{:?}", disabled);
}

#[test]
fn selected_hue_wraps() {
    let params = PaletteParameters {
        theme_color: Rgba::rgb(1.0, 0.0, 0.0),
        selected_hue_shift: 0.5,
        ..Default::default()
    };
    let selected = rgb_to_hsl(derive_palette(&params).button.selected);
    assert!(close(selected.h, 0.5), "{:?}", selected);

    let params = PaletteParameters {
        theme_color: hsl_to_rgb(Hsl::new(0.8, 0.6, 0.5)),
        ..params
    };
    let selected = rgb_to_hsl(derive_palette(&params).button.selected);
    assert!(close(selected.h, 0.3), "{:?}", selected);
    assert!(close(selected.s, 0.6), "{:?}", selected);
    assert!(close(selected.l, 0.5), "{:?}", selected);
}

#[test]
fn selected_negative_shift() {
    let params = PaletteParameters {
        theme_color: hsl_to_rgb(Hsl::new(0.1, 0.8, 0.4)),
        selected_hue_shift: -0.5,
        ..Default::default()
    };
    let selected = rgb_to_hsl(derive_palette(&params).button.selected);
    assert!(close(selected.h, 0.6), "{:?}", selected);
}
