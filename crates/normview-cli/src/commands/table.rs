use crate::support::{
    load_config_or_exit, load_surface_set_or_exit, open_viewer_or_exit, parse_flavour_or_exit,
};
use normview_table::TableSnapshot;
use normview_viewer::ViewPhase;
use serde_json::json;
use std::process;

pub struct Args {
    pub document: String,
    pub flavour: Option<String>,
    pub config: Option<String>,
    pub json: bool,
}

pub fn run(args: Args) {
    let set = load_surface_set_or_exit(&args.document);
    let config = load_config_or_exit(args.config.as_deref());
    let width = config.column_width;
    let palette = config.palette;
    let mut viewer = open_viewer_or_exit(set, config);

    if let Some(raw) = args.flavour.as_deref() {
        let flavour = parse_flavour_or_exit(raw);
        if !viewer.select_flavour(flavour) {
            eprintln!(
                "error: `{}` is not available for this surface list",
                flavour.token()
            );
            process::exit(1);
        }
    }

    let snapshot = TableSnapshot::capture(viewer.table(), width).unwrap_or_else(|e| {
        eprintln!("error: failed to render table: {e}");
        process::exit(1);
    });

    if args.json {
        let payload = json!({
            "flavour": viewer.active_flavour().map(|f| f.token()),
            "phase": viewer.phase(),
            "palette": palette,
            "table": snapshot,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
        return;
    }

    match viewer.active_flavour() {
        Some(flavour) if viewer.phase() == ViewPhase::Ready => {
            println!("normview table ({flavour})");
            println!("  rows: {}", snapshot.rows.len());
            println!("  digest: {}", snapshot.digest);
            println!();
            println!("{}", snapshot.to_text());
        }
        _ => println!("normview table: no coordinate system available"),
    }
}
