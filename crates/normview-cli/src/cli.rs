use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "normview",
    about = "Normview: coordinate-system tables over enumerated normal surface lists",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the coordinate systems a surface list can be viewed in
    Flavours {
        /// Path to a surface list JSON document
        document: String,

        /// Viewer config TOML (defaults to ./normview.toml when present)
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the surface table in one coordinate system
    Table {
        /// Path to a surface list JSON document
        document: String,

        /// Coordinate system to view (e.g. `standard`, `quad`, `edge_weight`)
        #[arg(long)]
        flavour: Option<String>,

        /// Viewer config TOML (defaults to ./normview.toml when present)
        #[arg(long)]
        config: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Crush the selected surface and show where the result lands
    Crush {
        /// Path to a surface list JSON document
        document: String,

        /// Selected table row (repeatable)
        #[arg(long = "row")]
        rows: Vec<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
