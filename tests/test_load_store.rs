use anyhow::Error;
use hue_shift::schema::schema_path;
use hue_shift::{
    Category, ColorSchema, LoadSchemaErr, PaletteParameters, Rgba, Slot, State, derive_palette,
    load_schema, store_schema,
};
use std::fs::{create_dir_all, remove_dir_all, write};
use std::path::PathBuf;

fn tmp_project(name: &str) -> PathBuf {
    let dir = PathBuf::from("tmp").join(name);
    _ = remove_dir_all(&dir);
    create_dir_all(&dir).expect("tmp");
    dir
}

#[test]
fn store_load() -> Result<(), Error> {
    let params = PaletteParameters {
        theme_color: Rgba::from_u32(0x12ab34),
        pressed_brightness: 0.45,
        ..Default::default()
    };
    let mut palette = derive_palette(&params);
    palette.set_slot(Slot::State(Category::Toggle, State::Selected), Rgba::WHITE);
    palette.set_slot(Slot::SliderFill, Rgba::rgba(0.1, 0.2, 0.3, 0.4));
    let schema = ColorSchema::new(&params, &palette);

    let mut buf = Vec::new();
    store_schema(&schema, &mut buf)?;
    let loaded = load_schema(buf.as_slice())?;

    assert_eq!(loaded, schema);
    assert_eq!(loaded.params(), params);
    assert_eq!(loaded.palette(), palette);
    Ok(())
}

#[test]
fn field_names() -> Result<(), Error> {
    let mut buf = Vec::new();
    store_schema(&ColorSchema::default(), &mut buf)?;
    let json = String::from_utf8(buf)?;

    for name in [
        "\"ThemeColor\"",
        "\"BaseColor\"",
        "\"PressedBrightness\"",
        "\"DisabledSaturation\"",
        "\"SelectedHueShift\"",
        "\"TextColor\"",
        "\"ButtonHighlightColor\"",
        "\"SliderFillColor\"",
        "\"InputFieldSelectedColor\"",
        "\"ScrollbarImageColor\"",
        "\"ScrollRectColor\"",
    ] {
        assert!(json.contains(name), "missing {}", name);
    }
    assert!(json.contains("\"r\""));
    assert!(json.contains("\"a\""));
    Ok(())
}

#[test]
fn load_partial() -> Result<(), Error> {
    let json = r#"{
        "PressedBrightness": 0.5,
        "ButtonColor": { "r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0 },
        "TextColor": { "r": 0.0, "g": 1.0, "b": 0.0 }
    }"#;
    let schema = load_schema(json.as_bytes())?;

    assert_eq!(schema.pressed_brightness, 0.5);
    assert_eq!(schema.button_color, Rgba::rgb(1.0, 0.0, 0.0));
    assert_eq!(schema.text_color, Rgba::rgb(0.0, 1.0, 0.0));
    assert_eq!(
        schema.theme_color,
        PaletteParameters::default().theme_color
    );
    assert_eq!(
        schema.scroll_rect_color,
        ColorSchema::default().scroll_rect_color
    );
    Ok(())
}

#[test]
fn load_broken() {
    let err = load_schema("{ not json".as_bytes()).expect_err("broken");
    let inner = err
        .get_ref()
        .and_then(|e| e.downcast_ref::<LoadSchemaErr>());
    assert!(inner.is_some(), "{:?}", err);
}

#[test]
fn missing_file() {
    let dir = tmp_project("missing_file");
    let schema = ColorSchema::load_or_default(&schema_path(&dir));
    assert_eq!(schema, ColorSchema::default());
    assert_eq!(
        schema.palette(),
        derive_palette(&PaletteParameters::default())
    );
}

#[test]
fn corrupt_file() -> Result<(), Error> {
    let dir = tmp_project("corrupt_file");
    let path = schema_path(&dir);
    create_dir_all(path.parent().expect("parent"))?;
    write(&path, "{\"ThemeColor\": 12")?;

    assert_eq!(ColorSchema::load_or_default(&path), ColorSchema::default());
    Ok(())
}

#[test]
fn store_to_project() -> Result<(), Error> {
    let dir = tmp_project("store_to_project");
    let path = schema_path(&dir);
    assert!(path.ends_with("ProjectSettings/ColorSchema.json"));

    let params = PaletteParameters {
        selected_hue_shift: -0.25,
        ..Default::default()
    };
    let schema = ColorSchema::new(&params, &derive_palette(&params));
    schema.store_to(&path)?;

    assert!(path.exists());
    assert_eq!(ColorSchema::load_or_default(&path), schema);
    Ok(())
}
