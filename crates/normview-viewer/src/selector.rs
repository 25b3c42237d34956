//! The flavour selector shown above the table.

use normview_kernel::Flavour;

pub const SELECTOR_CAPTION: &str = "Coordinate System:";
pub const EDITING_CAPTION: &str = "Editing...";
pub const UNAVAILABLE_LABEL: &str = "<Unavailable>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorItem {
    Flavour(Flavour),
    /// Placeholder when the list cannot be shown in any flavour.
    Unavailable,
}

impl SelectorItem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flavour(flavour) => flavour.name(),
            Self::Unavailable => UNAVAILABLE_LABEL,
        }
    }

    pub fn flavour(&self) -> Option<Flavour> {
        match self {
            Self::Flavour(flavour) => Some(*flavour),
            Self::Unavailable => None,
        }
    }
}

/// A read-only picture of the selector for renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlavourSelector {
    pub caption: &'static str,
    pub items: Vec<SelectorItem>,
    pub selected: Option<usize>,
    pub enabled: bool,
}

impl FlavourSelector {
    pub(crate) fn build(valid: &[Flavour], active: Option<Flavour>, locked: bool) -> Self {
        let caption = if locked {
            EDITING_CAPTION
        } else {
            SELECTOR_CAPTION
        };

        if valid.is_empty() {
            return Self {
                caption,
                items: vec![SelectorItem::Unavailable],
                selected: Some(0),
                enabled: false,
            };
        }

        Self {
            caption,
            items: valid.iter().copied().map(SelectorItem::Flavour).collect(),
            selected: active.and_then(|f| valid.iter().position(|v| *v == f)),
            enabled: !locked,
        }
    }

    pub fn selected_item(&self) -> Option<SelectorItem> {
        self.selected.and_then(|i| self.items.get(i).copied())
    }
}
