use normview_kernel::Flavour;
use normview_memory::{MemoryHost, MemorySurfaceSet};
use normview_viewer::{ViewController, ViewerConfig, ViewerId};
use std::path::Path;
use std::process;
use std::rc::Rc;

pub const DEFAULT_CONFIG_PATH: &str = "normview.toml";
pub const VIEWER_ID: &str = "normview-cli";

pub type Controller = ViewController<MemorySurfaceSet, MemoryHost>;

pub fn load_surface_set_or_exit(path: &str) -> Rc<MemorySurfaceSet> {
    let set = MemorySurfaceSet::load_json(path).unwrap_or_else(|e| {
        eprintln!("error: failed to load surface list at {path}: {e}");
        process::exit(1);
    });
    Rc::new(set)
}

/// An explicit `--config` must exist; the default path is optional.
pub fn load_config_or_exit(path: Option<&str>) -> ViewerConfig {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (DEFAULT_CONFIG_PATH, false),
    };
    if !required && !Path::new(path).exists() {
        return ViewerConfig::default();
    }
    ViewerConfig::load(path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    })
}

pub fn parse_flavour_or_exit(raw: &str) -> Flavour {
    raw.parse::<Flavour>().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    })
}

/// A controller viewing `set` from its packet in a fresh in-memory tree.
pub fn open_viewer_or_exit(set: Rc<MemorySurfaceSet>, config: ViewerConfig) -> Controller {
    let (host, list) = MemoryHost::for_set(&set).unwrap_or_else(|e| {
        eprintln!("error: failed to build packet tree: {e}");
        process::exit(1);
    });
    ViewController::new(ViewerId::new(VIEWER_ID), list, Some(set), host, config)
}
