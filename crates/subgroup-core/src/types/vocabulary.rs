//! Item vocabulary: interned item names plus the target-class flag.
//!
//! Uses `lasso::Rodeo` while building and freezes into a `RodeoReader`
//! for contention-free lookups. Names are interned in sorted order so
//! that `ItemId` ordering is the lexicographic tie-break order.

use std::collections::BTreeMap;
use std::fmt;

use lasso::{Rodeo, RodeoReader};

use super::identifiers::ItemId;

/// Placeholder returned when resolving an id the vocabulary never issued.
pub const UNKNOWN_ITEM_NAME: &str = "<unknown>";

/// Collects item names before freezing them into an [`ItemVocabulary`].
#[derive(Debug, Default, Clone)]
pub struct ItemVocabularyBuilder {
    entries: BTreeMap<String, bool>,
}

impl ItemVocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a non-target item.
    pub fn add_attribute(&mut self, name: impl Into<String>) -> &mut Self {
        self.entries.entry(name.into()).or_insert(false);
        self
    }

    /// Register a target-class item. A name registered as both is a target.
    pub fn add_target(&mut self, name: impl Into<String>) -> &mut Self {
        self.entries.insert(name.into(), true);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the collected names. Ids follow lexicographic name order.
    pub fn build(self) -> ItemVocabulary {
        let mut rodeo = Rodeo::default();
        let mut targets = Vec::with_capacity(self.entries.len());
        for (name, is_target) in self.entries {
            rodeo.get_or_intern(name);
            targets.push(is_target);
        }
        ItemVocabulary {
            names: rodeo.into_reader(),
            targets,
        }
    }
}

/// Immutable vocabulary of items produced by one encoding run.
pub struct ItemVocabulary {
    names: RodeoReader,
    targets: Vec<bool>,
}

impl ItemVocabulary {
    pub fn builder() -> ItemVocabularyBuilder {
        ItemVocabularyBuilder::new()
    }

    /// Build a vocabulary from attribute item names and target item names.
    pub fn from_names<A, T>(attributes: A, targets: T) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let mut builder = ItemVocabularyBuilder::new();
        for name in attributes {
            builder.add_attribute(name);
        }
        for name in targets {
            builder.add_target(name);
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Look up the id of an item name.
    pub fn id_of(&self, name: &str) -> Option<ItemId> {
        self.names.get(name).map(ItemId::from)
    }

    /// Resolve an id back to its name.
    pub fn name(&self, id: ItemId) -> &str {
        id.spur()
            .and_then(|spur| self.names.try_resolve(&spur))
            .unwrap_or(UNKNOWN_ITEM_NAME)
    }

    /// Resolve a list of ids to names, preserving order.
    pub fn names_of(&self, items: &[ItemId]) -> Vec<&str> {
        items.iter().map(|&id| self.name(id)).collect()
    }

    /// Whether the item is a target-class item.
    pub fn is_target(&self, id: ItemId) -> bool {
        self.targets.get(id.index()).copied().unwrap_or(false)
    }

    /// All ids, in lexicographic name order.
    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        (0..self.targets.len() as u32).map(ItemId::new)
    }

    /// All target-class ids, in lexicographic name order.
    pub fn target_ids(&self) -> Vec<ItemId> {
        self.ids().filter(|&id| self.is_target(id)).collect()
    }
}

impl Default for ItemVocabulary {
    fn default() -> Self {
        ItemVocabularyBuilder::new().build()
    }
}

impl fmt::Debug for ItemVocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemVocabulary")
            .field("items", &self.len())
            .field("targets", &self.targets.iter().filter(|t| **t).count())
            .finish()
    }
}
