//! Type-safe item identifiers.
//!
//! An `ItemId` is the dense index of an interned item name. Vocabularies
//! intern names in lexicographic order, so comparing ids compares names.

use lasso::{Key, Spur};
use serde::{Deserialize, Serialize};

/// Interned "attribute=value" or target-class item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create an item id from a dense index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The dense index of this item.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The interner key for this item.
    pub(crate) fn spur(self) -> Option<Spur> {
        Spur::try_from_usize(self.index())
    }
}

impl From<Spur> for ItemId {
    fn from(spur: Spur) -> Self {
        Self(spur.into_usize() as u32)
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
