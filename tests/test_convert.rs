use hue_shift::{Hsl, Rgba, hsl_to_rgb, rgb_to_hsl};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn close_rgb(a: Rgba, b: Rgba) -> bool {
    close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b)
}

#[test]
fn primaries() {
    assert_eq!(rgb_to_hsl(Rgba::rgb(1.0, 0.0, 0.0)), Hsl::new(0.0, 1.0, 0.5));

    let g = rgb_to_hsl(Rgba::rgb(0.0, 1.0, 0.0));
    assert!(close(g.h, 1.0 / 3.0));
    let b = rgb_to_hsl(Rgba::rgb(0.0, 0.0, 1.0));
    assert!(close(b.h, 2.0 / 3.0));

    // red is max, blue above green
    let m = rgb_to_hsl(Rgba::rgb(1.0, 0.0, 1.0));
    assert!(close(m.h, 5.0 / 6.0));
    assert!(close(m.s, 1.0));
    assert!(close(m.l, 0.5));

    let cyan = hsl_to_rgb(Hsl::new(0.5, 1.0, 0.5));
    assert!(close_rgb(cyan, Rgba::rgb(0.0, 1.0, 1.0)), "{:?}", cyan);
}

#[test]
fn theme_color() {
    let hsl = rgb_to_hsl(Rgba::rgb(1.0, 0.3765, 0.7529));
    assert!((hsl.h - 0.8994).abs() < 1e-3, "{:?}", hsl);
    assert!(close(hsl.s, 1.0));
    assert!((hsl.l - 0.688).abs() < 1e-3, "{:?}", hsl);
}

#[test]
fn light_saturation_branch() {
    // l > 0.5 uses d / (2 - max - min)
    let hsl = rgb_to_hsl(Rgba::rgb(0.9, 0.7, 0.7));
    assert!(close(hsl.l, 0.8));
    assert!(close(hsl.s, 0.2 / 0.4));
    assert!(close(hsl.h, 0.0));
}

#[test]
fn achromatic() {
    for v in [0.0, 0.3, 0.5, 1.0] {
        let hsl = rgb_to_hsl(Rgba::rgb(v, v, v));
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.l, v);
    }
    for h in [0.0, 0.25, 0.7, 1.0] {
        assert_eq!(hsl_to_rgb(Hsl::new(h, 0.0, 0.6)), Rgba::rgb(0.6, 0.6, 0.6));
    }
}

#[test]
fn rgb_roundtrip() {
    let steps = [0.0, 0.25, 0.5, 0.75, 1.0];
    for r in steps {
        for g in steps {
            for b in steps {
                if r == g && g == b {
                    continue;
                }
                let c = Rgba::rgb(r, g, b);
                let cc = hsl_to_rgb(rgb_to_hsl(c));
                assert!(close_rgb(c, cc), "{:?} -> {:?}", c, cc);
            }
        }
    }
}

#[test]
fn hsl_roundtrip() {
    for hsl in [
        Hsl::new(0.25, 0.5, 0.4),
        Hsl::new(0.9, 0.8, 0.7),
        Hsl::new(0.1, 0.3, 0.2),
        Hsl::new(0.6, 1.0, 0.5),
    ] {
        let back = rgb_to_hsl(hsl_to_rgb(hsl));
        assert!(close(back.h, hsl.h), "{:?} -> {:?}", hsl, back);
        assert!(close(back.s, hsl.s), "{:?} -> {:?}", hsl, back);
        assert!(close(back.l, hsl.l), "{:?} -> {:?}", hsl, back);
    }
}

#[test]
fn alpha_is_opaque() {
    let c = Rgba::rgba(0.2, 0.4, 0.6, 0.5);
    assert_eq!(c.to_hsl().to_rgb().a, 1.0);
}
