//! The selection-driven view controller.
//!
//! ```text
//!            update_set(Some)            update_set(Some)
//!   Empty ───────────────► FlavourUnavailable ◄────────► Ready
//!     ▲                        │                           │
//!     └────── update_set(None) ┴───────────────────────────┘
//! ```
//!
//! The edit lock is orthogonal to the phase: while it is held the
//! selector is disabled and an empty table is published, but the active
//! list and flavour are kept for when the lock is released.

use crate::config::ViewerConfig;
use crate::error::ViewerError;
use crate::host::{PacketId, ViewerHost, ViewerId};
use crate::selector::FlavourSelector;
use normview_kernel::{Flavour, SurfaceSet, valid_flavours_for};
use normview_table::{CellValue, SurfaceTable, TableError, TableModel, TableSchema};
use serde::Serialize;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewPhase {
    /// No surface list.
    Empty,
    /// A list, but no coordinate system can show it.
    FlavourUnavailable,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditLock {
    #[default]
    Released,
    /// The packet is being edited in another part of the interface.
    EditingElsewhere,
}

pub struct ViewController<S: SurfaceSet, H: ViewerHost<S>> {
    pub(crate) id: ViewerId,
    pub(crate) packet: PacketId,
    pub(crate) host: H,
    config: ViewerConfig,
    pub(crate) set: Option<Rc<S>>,
    valid: Vec<Flavour>,
    flavour: Option<Flavour>,
    lock: EditLock,
    table: SurfaceTable<S>,
    generation: u64,
    pub(crate) selection: Vec<usize>,
}

impl<S: SurfaceSet, H: ViewerHost<S>> ViewController<S, H> {
    /// A viewer for the packet `packet`, initially showing `set`.
    pub fn new(
        id: ViewerId,
        packet: PacketId,
        set: Option<Rc<S>>,
        host: H,
        config: ViewerConfig,
    ) -> Self {
        let mut controller = Self {
            id,
            packet,
            host,
            config,
            set: None,
            valid: Vec::new(),
            flavour: None,
            lock: EditLock::Released,
            table: SurfaceTable::empty(),
            generation: 0,
            selection: Vec::new(),
        };
        controller.update_set(set);
        controller
    }

    /// Show `set`, rereading everything even if it is the list already shown.
    ///
    /// The current flavour survives when still valid; otherwise the list's
    /// native flavour takes over.
    pub fn update_set(&mut self, set: Option<Rc<S>>) {
        self.set = set;
        self.refresh_flavours();
        self.selection.clear();
        self.publish();
    }

    /// Switch flavour. Returns whether the request was accepted.
    pub fn select_flavour(&mut self, flavour: Flavour) -> bool {
        if self.phase() != ViewPhase::Ready || self.is_editing_elsewhere() {
            return false;
        }
        if !self.valid.contains(&flavour) {
            log::debug!("ignoring flavour {} not valid for this list", flavour.token());
            return false;
        }
        if self.flavour == Some(flavour) {
            return true;
        }
        self.flavour = Some(flavour);
        self.selection.clear();
        self.publish();
        true
    }

    /// Take the edit lock: disable flavour selection and show nothing.
    pub fn editing_elsewhere(&mut self) {
        self.lock = EditLock::EditingElsewhere;
        self.selection.clear();
        self.publish();
    }

    /// Release the edit lock and redisplay from the current state.
    pub fn reflect_current_state(&mut self) {
        self.lock = EditLock::Released;
        self.refresh_flavours();
        self.selection.clear();
        self.publish();
    }

    /// Record the rows currently selected in the table.
    pub fn selection_changed(
        &mut self,
        rows: impl IntoIterator<Item = usize>,
    ) -> Result<(), ViewerError> {
        let count = self.table.row_count();
        let mut selection = Vec::new();
        for row in rows {
            if row >= count {
                return Err(ViewerError::RowOutOfRange { row, count });
            }
            selection.push(row);
        }
        selection.sort_unstable();
        selection.dedup();
        self.selection = selection;
        Ok(())
    }

    pub fn phase(&self) -> ViewPhase {
        match &self.set {
            None => ViewPhase::Empty,
            Some(_) if self.valid.is_empty() => ViewPhase::FlavourUnavailable,
            Some(_) => ViewPhase::Ready,
        }
    }

    pub fn lock(&self) -> EditLock {
        self.lock
    }

    pub fn is_editing_elsewhere(&self) -> bool {
        self.lock == EditLock::EditingElsewhere
    }

    pub fn active_set(&self) -> Option<&Rc<S>> {
        self.set.as_ref()
    }

    pub fn active_flavour(&self) -> Option<Flavour> {
        self.flavour
    }

    pub fn valid_flavours(&self) -> &[Flavour] {
        &self.valid
    }

    pub fn selector(&self) -> FlavourSelector {
        FlavourSelector::build(&self.valid, self.flavour, self.is_editing_elsewhere())
    }

    /// The table generation currently published to renderers.
    pub fn table(&self) -> &SurfaceTable<S> {
        &self.table
    }

    pub fn schema(&self) -> &Rc<TableSchema> {
        self.table.schema()
    }

    /// Bumped every time a new table generation is published.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn viewer_id(&self) -> &ViewerId {
        &self.id
    }

    pub fn packet(&self) -> PacketId {
        self.packet
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn refresh_flavours(&mut self) {
        let previous = self.flavour;
        self.valid = valid_flavours_for(self.set.as_deref());
        self.flavour = self.resolve_flavour(previous);
        if previous.is_some() && previous != self.flavour {
            log::debug!(
                "flavour {:?} no longer valid, now {:?}",
                previous.map(Flavour::token),
                self.flavour.map(Flavour::token)
            );
        }
    }

    fn resolve_flavour(&self, previous: Option<Flavour>) -> Option<Flavour> {
        let set = self.set.as_ref()?;
        if self.valid.is_empty() {
            return None;
        }
        if let Some(flavour) = previous.filter(|f| self.valid.contains(f)) {
            return Some(flavour);
        }
        if previous.is_none()
            && let Some(initial) = self.config.initial_flavour.filter(|f| self.valid.contains(f))
        {
            return Some(initial);
        }
        let native = set.flavour();
        if self.valid.contains(&native) {
            Some(native)
        } else {
            self.valid.first().copied()
        }
    }

    fn publish(&mut self) {
        self.generation += 1;
        self.table = match (&self.set, self.flavour, self.lock) {
            (Some(set), Some(flavour), EditLock::Released) => SurfaceTable::new(
                Rc::clone(set),
                Rc::new(TableSchema::for_set(set.as_ref(), flavour)),
            ),
            _ => SurfaceTable::empty(),
        };
    }
}

impl<S: SurfaceSet, H: ViewerHost<S>> TableModel for ViewController<S, H> {
    fn row_count(&self) -> usize {
        self.table.row_count()
    }

    fn column_count(&self) -> usize {
        self.table.column_count()
    }

    fn column_name(&self, column: usize) -> Result<&str, TableError> {
        self.table.column_name(column)
    }

    fn column_tooltip(&self, column: usize) -> Result<&str, TableError> {
        self.table.column_tooltip(column)
    }

    fn value_at(&self, row: usize, column: usize) -> Result<CellValue, TableError> {
        self.table.value_at(row, column)
    }
}
