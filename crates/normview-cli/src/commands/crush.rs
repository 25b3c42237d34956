use crate::support::{load_surface_set_or_exit, open_viewer_or_exit};
use normview_kernel::Triangulation;
use normview_memory::PacketContent;
use normview_viewer::ViewerConfig;
use serde_json::json;
use std::process;

pub fn run(document: String, rows: Vec<usize>, json: bool) {
    let set = load_surface_set_or_exit(&document);
    let mut viewer = open_viewer_or_exit(set, ViewerConfig::default());

    if let Err(e) = viewer.selection_changed(rows) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let node = viewer.invoke_crush().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let tree = viewer.host().tree();
    let Some(packet) = tree.node(node) else {
        eprintln!("error: crushed packet {node} is missing from the tree");
        process::exit(1);
    };
    let parent = packet
        .parent
        .and_then(|id| tree.node(id))
        .map_or("", |parent| parent.label.as_str());
    let tetrahedra = match &packet.content {
        PacketContent::Triangulation(tri) => tri.tetrahedron_count(),
        _ => 0,
    };

    if json {
        let payload = json!({
            "packet": node,
            "label": packet.label,
            "parent": parent,
            "tetrahedra": tetrahedra,
            "events": viewer.host().events(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
        return;
    }

    println!("normview crush");
    println!("  inserted: {} ({node})", packet.label);
    println!("  under: {parent}");
    println!("  tetrahedra: {tetrahedra}");
}
