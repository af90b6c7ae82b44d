//! Arena-allocated FP-tree.
//!
//! Nodes live in one `Vec` and refer to each other by index. Every node
//! keeps its parent handle and a short child list; the header table lists
//! the frequent items in tree order (descending count, ties by item id)
//! together with every node carrying that item.

use smallvec::SmallVec;
use subgroup_core::types::{FxHashMap, ItemId};

/// Index of a node in the arena.
pub type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone)]
struct FpNode {
    item: ItemId,
    count: u64,
    parent: NodeId,
    children: SmallVec<[NodeId; 4]>,
}

/// One header-table row: an item, its total count in this tree, and the
/// nodes that carry it.
#[derive(Debug, Clone)]
pub struct HeaderEntry {
    pub item: ItemId,
    pub count: u64,
    pub nodes: Vec<NodeId>,
}

/// A weighted prefix path of a conditional pattern base.
pub type WeightedPath = (Vec<ItemId>, u64);

#[derive(Debug, Clone)]
pub struct FpTree {
    nodes: Vec<FpNode>,
    header: Vec<HeaderEntry>,
    rank: FxHashMap<ItemId, usize>,
}

impl FpTree {
    /// Build a tree from weighted item paths, keeping only items whose total
    /// weight reaches `min_count`.
    pub fn build<P: AsRef<[ItemId]>>(paths: &[(P, u64)], min_count: u64) -> Self {
        let mut counts: FxHashMap<ItemId, u64> = FxHashMap::default();
        for (items, weight) in paths {
            for &item in items.as_ref() {
                *counts.entry(item).or_insert(0) += weight;
            }
        }

        let mut frequent: Vec<(ItemId, u64)> = counts
            .into_iter()
            .filter(|&(_, count)| count >= min_count)
            .collect();
        frequent.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let rank: FxHashMap<ItemId, usize> = frequent
            .iter()
            .enumerate()
            .map(|(rank, &(item, _))| (item, rank))
            .collect();
        let header = frequent
            .into_iter()
            .map(|(item, count)| HeaderEntry {
                item,
                count,
                nodes: Vec::new(),
            })
            .collect();

        let mut tree = Self {
            nodes: vec![FpNode {
                item: ItemId::new(u32::MAX),
                count: 0,
                parent: ROOT,
                children: SmallVec::new(),
            }],
            header,
            rank,
        };

        let mut ordered: Vec<(usize, ItemId)> = Vec::new();
        for (items, weight) in paths {
            ordered.clear();
            ordered.extend(
                items
                    .as_ref()
                    .iter()
                    .filter_map(|item| tree.rank.get(item).map(|&r| (r, *item))),
            );
            if ordered.is_empty() {
                continue;
            }
            ordered.sort_unstable();
            tree.insert(&ordered, *weight);
        }
        tree
    }

    /// Insert one rank-ordered path with the given weight.
    fn insert(&mut self, ordered: &[(usize, ItemId)], weight: u64) {
        let mut current = ROOT;
        for &(rank, item) in ordered {
            let existing = self.nodes[current as usize]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child as usize].item == item);
            current = match existing {
                Some(child) => {
                    self.nodes[child as usize].count += weight;
                    child
                }
                None => {
                    let id = self.nodes.len() as NodeId;
                    self.nodes.push(FpNode {
                        item,
                        count: weight,
                        parent: current,
                        children: SmallVec::new(),
                    });
                    self.nodes[current as usize].children.push(id);
                    self.header[rank].nodes.push(id);
                    id
                }
            };
        }
    }

    /// True when no item reached the threshold.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Header table in tree order (most frequent first).
    pub fn header(&self) -> &[HeaderEntry] {
        &self.header
    }

    /// Number of nodes, excluding the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// If the tree is one chain, its `(item, count)` nodes from the top.
    pub fn single_path(&self) -> Option<Vec<(ItemId, u64)>> {
        let mut path = Vec::new();
        let mut current = ROOT;
        loop {
            let children = &self.nodes[current as usize].children;
            match children.len() {
                0 => return Some(path),
                1 => {
                    current = children[0];
                    let node = &self.nodes[current as usize];
                    path.push((node.item, node.count));
                }
                _ => return None,
            }
        }
    }

    /// Conditional pattern base of the header entry at `index`: the prefix
    /// path above every node of that item, weighted by the node count.
    pub fn conditional_base(&self, index: usize) -> Vec<WeightedPath> {
        self.header[index]
            .nodes
            .iter()
            .filter_map(|&node_id| {
                let node = &self.nodes[node_id as usize];
                let mut prefix = Vec::new();
                let mut current = node.parent;
                while current != ROOT {
                    let ancestor = &self.nodes[current as usize];
                    prefix.push(ancestor.item);
                    current = ancestor.parent;
                }
                (!prefix.is_empty()).then_some((prefix, node.count))
            })
            .collect()
    }
}
