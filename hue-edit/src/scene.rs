//!
//! Scene documents.
//!
//! A json file listing widgets and their colors, stands in for
//! the live widgets of an editor.
//!
//! ```json
//! { "widgets": [
//!     { "name": "title", "kind": "text", "color": {"r":1,"g":1,"b":1,"a":1} },
//!     { "name": "volume", "kind": "slider",
//!       "colors": { "normal": {..}, "highlighted": {..}, .. },
//!       "image": { "name": "fill", "color": {..} } }
//! ] }
//! ```
//!

use anyhow::{Error, anyhow};
use hue_shift::apply::{Graphic, Widget, WidgetHost};
use hue_shift::{Category, ColorBlock, Rgba};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

pub(crate) const TEXT: &str = "text";

#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct SceneDoc {
    #[serde(default)]
    pub(crate) widgets: Vec<SceneWidget>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SceneWidget {
    pub(crate) name: String,
    /// `text` or a category name.
    pub(crate) kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) colors: Option<ColorBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) image: Option<SceneImage>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SceneImage {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) color: Rgba,
}

impl SceneDoc {
    pub(crate) fn load(path: &Path) -> Result<SceneDoc, Error> {
        let f = File::open(path).map_err(|e| anyhow!("open scene {:?}: {}", path, e))?;
        let doc: SceneDoc = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| anyhow!("invalid scene {:?}: {}", path, e))?;
        for w in &doc.widgets {
            if w.kind != TEXT && Category::from_name(&w.kind).is_none() {
                warn!("scene {:?}: unknown kind {:?} for {:?}", path, w.kind, w.name);
            }
        }
        debug!("loaded scene {:?} with {} widgets", path, doc.widgets.len());
        Ok(doc)
    }

    pub(crate) fn store(&self, path: &Path) -> Result<(), Error> {
        let mut f = File::create(path)?;
        serde_json::to_writer_pretty(&mut f, self)?;
        writeln!(f)?;
        Ok(())
    }
}

impl Graphic for SceneImage {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }
}

impl Graphic for SceneWidget {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = Some(color);
    }
}

impl Widget for SceneWidget {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_colors(&mut self, colors: ColorBlock) {
        self.colors = Some(colors);
    }

    fn image_mut(&mut self) -> Option<&mut dyn Graphic> {
        match &mut self.image {
            Some(image) => Some(image),
            None => None,
        }
    }
}

impl WidgetHost for SceneDoc {
    fn texts(&mut self) -> Vec<&mut dyn Graphic> {
        let mut r: Vec<&mut dyn Graphic> = Vec::new();
        for w in self.widgets.iter_mut() {
            if w.kind == TEXT {
                r.push(w);
            }
        }
        r
    }

    fn widgets(&mut self, category: Category) -> Vec<&mut dyn Widget> {
        let mut r: Vec<&mut dyn Widget> = Vec::new();
        for w in self.widgets.iter_mut() {
            if w.kind == category.name() {
                r.push(w);
            }
        }
        r
    }
}
