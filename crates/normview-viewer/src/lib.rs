//! Viewer layer.
//!
//! [`ViewController`] owns the active surface list and flavour, publishes a
//! fresh table generation whenever either changes, and runs the crush
//! action against a [`ViewerHost`]. Everything runs synchronously on the
//! caller's thread.

pub mod config;
pub mod controller;
pub mod crush;
pub mod error;
pub mod host;
pub mod selector;

pub use config::{Palette, Rgb, ViewerConfig};
pub use controller::{EditLock, ViewController, ViewPhase};
pub use crush::CRUSHED_LABEL_PREFIX;
pub use error::{ConfigError, CrushError, ViewerError};
pub use host::{HostError, PacketId, ViewerHost, ViewerId};
pub use selector::{FlavourSelector, SelectorItem};
