use crate::support::{load_config_or_exit, load_surface_set_or_exit, open_viewer_or_exit};
use normview_kernel::{SurfaceSet, Triangulation, coordinate_count};
use serde_json::json;

pub fn run(document: String, config: Option<String>, json: bool) {
    let set = load_surface_set_or_exit(&document);
    let config = load_config_or_exit(config.as_deref());
    let viewer = open_viewer_or_exit(set.clone(), config);

    let native = set.flavour();
    let active = viewer.active_flavour();
    let tri = set.triangulation();

    if json {
        let flavours: Vec<_> = viewer
            .valid_flavours()
            .iter()
            .map(|&flavour| {
                json!({
                    "token": flavour.token(),
                    "name": flavour.name(),
                    "columns": coordinate_count(flavour, tri),
                    "native": flavour == native,
                    "active": Some(flavour) == active,
                })
            })
            .collect();
        let payload = json!({
            "triangulation": tri.label(),
            "surfaces": set.len(),
            "embeddedOnly": set.is_embedded_only(),
            "native": native.token(),
            "flavours": flavours,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
        return;
    }

    let selector = viewer.selector();
    println!("normview flavours");
    println!("  triangulation: {}", tri.label());
    println!("  surfaces: {}", set.len());
    println!("  native: {}", native);
    println!("  {}", selector.caption);
    for (index, item) in selector.items.iter().enumerate() {
        let marker = if selector.selected == Some(index) { "*" } else { " " };
        match item.flavour() {
            Some(flavour) => println!(
                "  {marker} {:<12} {} ({} columns)",
                flavour.token(),
                item.label(),
                coordinate_count(flavour, tri)
            ),
            None => println!("  {marker} {}", item.label()),
        }
    }
}
