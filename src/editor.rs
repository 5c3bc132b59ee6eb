use crate::apply::{UndoJournal, WidgetHost, apply_palette};
use crate::color::Rgba;
use crate::palette::{Palette, PaletteParameters, Slot, derive_palette};
use crate::prefs::{EditorPreferences, SessionStore};
use crate::schema::{ColorSchema, schema_path};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};

/// Editing session for the palette of one project.
///
/// Loads the schema and the session flags on
/// [enable](Editor::enable) and writes both back on
/// [disable](Editor::disable).
#[derive(Debug)]
pub struct Editor {
    project_dir: PathBuf,
    params: PaletteParameters,
    palette: Palette,
    pub prefs: EditorPreferences,
}

impl Editor {
    /// Start a session with defaults. Nothing is loaded.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let schema = ColorSchema::default();
        Self {
            project_dir: project_dir.into(),
            params: schema.params(),
            palette: schema.palette(),
            prefs: Default::default(),
        }
    }

    /// Start a session for the project.
    ///
    /// Loads the color schema, without one the defaults are
    /// used and derived. Loads the flags from the session store.
    pub fn enable(project_dir: impl Into<PathBuf>, session: &SessionStore) -> Self {
        let project_dir = project_dir.into();
        let schema = ColorSchema::load_or_default(&schema_path(&project_dir));
        debug!("enable editor for {:?}", project_dir);
        Self {
            project_dir,
            params: schema.params(),
            palette: schema.palette(),
            prefs: EditorPreferences::load(session),
        }
    }

    /// End the session. Stores the schema and the session flags.
    pub fn disable(&self, session: &mut SessionStore) -> Result<(), io::Error> {
        self.schema().store_to(&self.schema_path())?;
        self.prefs.save(session);
        session.store()
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn schema_path(&self) -> PathBuf {
        schema_path(&self.project_dir)
    }

    pub fn schema(&self) -> ColorSchema {
        ColorSchema::new(&self.params, &self.palette)
    }

    pub fn params(&self) -> &PaletteParameters {
        &self.params
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Derive the palette from the current parameters.
    /// Overwrites every individual change.
    pub fn derive(&mut self) {
        self.palette = derive_palette(&self.params);
    }

    /// Change parameters. Scalars are clamped to their range.
    /// Re-derives if sync is on and anything changed.
    pub fn edit(&mut self, f: impl FnOnce(&mut PaletteParameters)) {
        let mut params = self.params;
        f(&mut params);
        let params = params.clamped_or(&self.params);
        if params != self.params {
            self.params = params;
            if self.prefs.sync_with_theme {
                self.derive();
            }
        }
    }

    pub fn set_theme_color(&mut self, color: Rgba) {
        self.edit(|p| p.theme_color = color);
    }

    pub fn set_base_color(&mut self, color: Rgba) {
        self.edit(|p| p.base_color = color);
    }

    pub fn set_pressed_brightness(&mut self, v: f32) {
        self.edit(|p| p.pressed_brightness = v);
    }

    pub fn set_disabled_saturation(&mut self, v: f32) {
        self.edit(|p| p.disabled_saturation = v);
    }

    pub fn set_selected_hue_shift(&mut self, v: f32) {
        self.edit(|p| p.selected_hue_shift = v);
    }

    /// Change a single color of the palette.
    pub fn set_slot(&mut self, slot: Slot, color: Rgba) {
        self.palette.set_slot(slot, color);
    }

    pub fn set_sync_with_theme(&mut self, sync: bool) {
        self.prefs.sync_with_theme = sync;
    }

    /// Write the palette to the widgets of the host.
    pub fn apply(&self, host: &mut impl WidgetHost, undo: &mut impl UndoJournal) {
        undo.record("editor", "Apply UI Color");
        apply_palette(&self.palette, host, undo);
    }
}
