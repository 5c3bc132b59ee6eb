mod scene;
mod show;

use crate::scene::SceneDoc;
use anyhow::{Error, anyhow};
use configparser::ini::Ini;
use dirs::{cache_dir, config_dir};
use hue_shift::apply::UndoEntry;
use hue_shift::prefs::SessionStore;
use hue_shift::{Category, Editor, Rgba, Slot};
use log::{LevelFilter, debug};
use std::env::{args, temp_dir};
use std::fs;
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

fn main() -> Result<(), Error> {
    let arg = match parse_arg(args().skip(1)) {
        Ok(arg) => arg,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!();
            eprintln!("{}", USAGE);
            exit(1);
        }
    };
    if let Cmd::Help = arg.cmd {
        println!("{}", USAGE);
        exit(0);
    }

    let config = Config::load(arg.project)?;
    setup_logging(&config)?;

    let mut session = SessionStore::load(config.session_path.clone());
    let mut editor = Editor::enable(&config.project, &session);

    run(&mut editor, arg.cmd, arg.verbose)?;

    editor.disable(&mut session)?;
    Ok(())
}

const USAGE: &str = "\
hue-edit [--project DIR] [--verbose] command

commands:
    show                    print parameters and palette
    set key=value ...       change parameters or single colors
    derive                  derive the palette from the parameters
    sync on|off             derive on every parameter change
    fold category on|off    show a category folded
    apply scene.json ...    write the palette to scene documents

parameters: theme=#rrggbb base=#rrggbb pressed=0..1
            disabled=0..1 hue-shift=-0.5..0.5
colors:     text, slider.fill, scrollbar.image, category.state
            category is one of button, slider, toggle, dropdown,
            input-field, scrollbar, scroll-rect
            state is one of normal, highlighted, pressed,
            disabled, selected";

#[derive(Debug, PartialEq)]
enum Cmd {
    Help,
    Show,
    Set(Vec<(String, String)>),
    Derive,
    Sync(bool),
    Fold(Category, bool),
    Apply(Vec<PathBuf>),
}

#[derive(Debug, PartialEq)]
struct Arg {
    project: Option<PathBuf>,
    verbose: bool,
    cmd: Cmd,
}

fn parse_on_off(s: &str) -> Result<bool, String> {
    match s {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        _ => Err(format!("expected on|off, not {:?}", s)),
    }
}

fn parse_arg(args: impl Iterator<Item = String>) -> Result<Arg, String> {
    let mut project = None;
    let mut verbose = false;
    let mut cmd = None;
    let mut rest = Vec::new();

    enum S {
        Start,
        Project,
        Rest,
    }
    let mut s = S::Start;
    for arg in args {
        match s {
            S::Start => {
                if arg == "--project" {
                    s = S::Project;
                } else if arg == "--verbose" || arg == "-v" {
                    verbose = true;
                } else if arg == "--help" || arg == "-h" {
                    cmd = Some(arg);
                    break;
                } else if arg.starts_with('-') {
                    return Err(format!("unknown option {:?}", arg));
                } else {
                    cmd = Some(arg);
                    s = S::Rest;
                }
            }
            S::Project => {
                project = Some(PathBuf::from(arg));
                s = S::Start;
            }
            S::Rest => {
                rest.push(arg);
            }
        }
    }
    if let S::Project = s {
        return Err("--project needs a directory".to_string());
    }

    let cmd = match cmd.as_deref() {
        None | Some("--help") | Some("-h") | Some("help") => Cmd::Help,
        Some("show") => Cmd::Show,
        Some("derive") => Cmd::Derive,
        Some("set") => {
            if rest.is_empty() {
                return Err("set needs key=value".to_string());
            }
            let mut kv = Vec::new();
            for r in rest.drain(..) {
                let Some((k, v)) = r.split_once('=') else {
                    return Err(format!("expected key=value, not {:?}", r));
                };
                kv.push((k.trim().to_string(), v.trim().to_string()));
            }
            Cmd::Set(kv)
        }
        Some("sync") => match rest.as_slice() {
            [v] => Cmd::Sync(parse_on_off(v)?),
            _ => return Err("sync on|off".to_string()),
        },
        Some("fold") => match rest.as_slice() {
            [c, v] => {
                let Some(c) = Category::from_name(c) else {
                    return Err(format!("unknown category {:?}", c));
                };
                Cmd::Fold(c, parse_on_off(v)?)
            }
            _ => return Err("fold category on|off".to_string()),
        },
        Some("apply") => {
            if rest.is_empty() {
                return Err("apply needs a scene file".to_string());
            }
            Cmd::Apply(rest.drain(..).map(PathBuf::from).collect())
        }
        Some(c) => return Err(format!("unknown command {:?}", c)),
    };

    Ok(Arg {
        project,
        verbose,
        cmd,
    })
}

fn run(editor: &mut Editor, cmd: Cmd, verbose: bool) -> Result<(), Error> {
    match cmd {
        Cmd::Help => {}
        Cmd::Show => {
            print!("{}", show::render(editor));
        }
        Cmd::Set(kv) => {
            set_values(editor, &kv)?;
            print!("{}", show::render(editor));
        }
        Cmd::Derive => {
            editor.derive();
            print!("{}", show::render(editor));
        }
        Cmd::Sync(sync) => {
            editor.set_sync_with_theme(sync);
        }
        Cmd::Fold(c, fold) => {
            editor.prefs.set_expanded(c, !fold);
        }
        Cmd::Apply(paths) => {
            for path in paths {
                let mut doc = SceneDoc::load(&path)?;
                let mut undo: Vec<UndoEntry> = Vec::new();
                editor.apply(&mut doc, &mut undo);
                doc.store(&path)?;

                println!("{}: {} changes", path.display(), undo.len() - 1);
                if verbose {
                    for u in &undo {
                        println!("    {:<24} {}", u.target, u.label);
                    }
                }
            }
        }
    }
    Ok(())
}

fn parse_scalar(k: &str, v: &str) -> Result<f32, Error> {
    let f = v.parse::<f32>()?;
    if !f.is_finite() {
        return Err(anyhow!("{} must be a number, not {:?}", k, v));
    }
    Ok(f)
}

/// Parameters are changed first, with at most one re-derive.
/// Single colors are set afterwards.
fn set_values(editor: &mut Editor, kv: &[(String, String)]) -> Result<(), Error> {
    let mut params = *editor.params();
    let mut slots = Vec::new();

    for (k, v) in kv {
        match k.as_str() {
            "theme" => params.theme_color = v.parse::<Rgba>()?,
            "base" => params.base_color = v.parse::<Rgba>()?,
            "pressed" => params.pressed_brightness = parse_scalar(k, v)?,
            "disabled" => params.disabled_saturation = parse_scalar(k, v)?,
            "hue-shift" => params.selected_hue_shift = parse_scalar(k, v)?,
            _ => {
                let Ok(slot) = k.parse::<Slot>() else {
                    return Err(anyhow!("unknown key {:?}", k));
                };
                slots.push((slot, v.parse::<Rgba>()?));
            }
        }
    }

    editor.edit(|p| *p = params);
    for (slot, color) in slots {
        debug!("set {} = {}", slot, color);
        editor.set_slot(slot, color);
    }
    Ok(())
}

/// Configuration.
#[derive(Debug)]
struct Config {
    project: PathBuf,
    log_level: LevelFilter,
    log_file: Option<PathBuf>,
    session_path: PathBuf,
}

impl Config {
    fn load(project: Option<PathBuf>) -> Result<Config, Error> {
        let mut cfg_project = None;
        let mut log_level = LevelFilter::Debug;
        let mut log_file = None;

        if let Some(cfg_dir) = config_dir() {
            let cfg_path = cfg_dir.join("hue-edit");
            let cfg_file = cfg_path.join("hue-edit.ini");
            log_file = Some(cfg_path.join("hue-edit.log"));
            if cfg_file.exists() {
                let mut ini = Ini::new();
                match ini.load(&cfg_file) {
                    Ok(_) => {}
                    Err(e) => {
                        return Err(anyhow!(e));
                    }
                }

                if let Some(v) = ini.get("default", "project") {
                    cfg_project = Some(PathBuf::from(v));
                }
                if let Some(v) = ini.get("default", "log-level") {
                    log_level = v
                        .parse::<LevelFilter>()
                        .map_err(|e| anyhow!("log-level {:?}: {}", v, e))?;
                }
            } else {
                create_dir_all(&cfg_path)?;
                let mut f = File::create_new(cfg_file)?;
                f.write_all(
                    b"[default]
# project directory used without --project
# project = .
# off, error, warn, info, debug, trace
# log-level = debug
",
                )?;
            }
        };

        let session_path = cache_dir()
            .unwrap_or_else(temp_dir)
            .join("hue-edit")
            .join("session.ini");

        Ok(Config {
            project: project
                .or(cfg_project)
                .unwrap_or_else(|| PathBuf::from(".")),
            log_level,
            log_file,
            session_path,
        })
    }
}

fn setup_logging(cfg: &Config) -> Result<(), Error> {
    let Some(log_file) = &cfg.log_file else {
        return Ok(());
    };
    _ = fs::remove_file(log_file);
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("{:<5} {}", record.level(), message)) //
        })
        .level(cfg.log_level)
        .chain(fern::log_file(log_file)?)
        .apply()?;
    Ok(())
}
