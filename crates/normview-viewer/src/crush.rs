//! The crush action.
//!
//! Crushing consumes exactly one selected surface. The engine call happens
//! first; the tree is only touched once it has succeeded.

use crate::controller::ViewController;
use crate::error::CrushError;
use crate::host::{PacketId, ViewerHost};
use normview_kernel::{SurfaceSet, Triangulation};
use std::rc::Rc;

pub const CRUSHED_LABEL_PREFIX: &str = "Crushed ";

impl<S: SurfaceSet, H: ViewerHost<S>> ViewController<S, H> {
    /// Crush the selected surface and insert the result as the last child
    /// of this viewer's packet. Failures are also reported to the host.
    pub fn invoke_crush(&mut self) -> Result<PacketId, CrushError> {
        let result = self.crush_selected();
        if let Err(err) = &result {
            if err.is_selection_error() {
                log::debug!("crush refused: {err}");
            } else {
                log::warn!("crush failed: {err}");
            }
            self.host.report_error(&err.to_string());
        }
        result
    }

    fn crush_selected(&mut self) -> Result<PacketId, CrushError> {
        let row = match self.selection.as_slice() {
            [] => return Err(CrushError::NoSelection),
            [row] => *row,
            _ => return Err(CrushError::MultipleSelection),
        };
        // A non-empty selection implies a published table, hence a list.
        let set = self.set.as_ref().map(Rc::clone).ok_or(CrushError::NoSelection)?;
        let surface = set.surface(row).ok_or(CrushError::NoSelection)?;

        let crushed = self.host.crush(surface).map_err(CrushError::Engine)?;

        let candidate = format!("{CRUSHED_LABEL_PREFIX}{}", set.triangulation().label());
        let label = self.host.make_unique_label(&candidate);
        let node = self
            .host
            .insert_child_last(self.packet, label.clone(), crushed)
            .map_err(CrushError::Tree)?;
        self.host.notify_subtree_inserted(node, &self.id, true);

        log::info!("crushed surface {row} into {node} `{label}`");
        Ok(node)
    }
}
