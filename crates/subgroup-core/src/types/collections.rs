//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

use super::identifiers::ItemId;

/// SmallVec optimized for short item lists (itemsets rarely exceed 4 items).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

/// Sorted, duplicate-free list of items.
pub type ItemList = SmallVec4<ItemId>;

/// Returns true if every element of sorted `needle` appears in sorted `haystack`.
pub fn is_sorted_subset<T: Ord>(needle: &[T], haystack: &[T]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    let mut rest = haystack.iter();
    'outer: for wanted in needle {
        for candidate in rest.by_ref() {
            match candidate.cmp(wanted) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => continue 'outer,
                std::cmp::Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}

/// Sort and deduplicate an item list in place.
pub fn normalize_items(items: &mut ItemList) {
    items.sort_unstable();
    items.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_of_sorted_slices() {
        assert!(is_sorted_subset(&[1, 3], &[1, 2, 3]));
        assert!(is_sorted_subset::<u32>(&[], &[1]));
        assert!(is_sorted_subset(&[1, 2, 3], &[1, 2, 3]));
        assert!(!is_sorted_subset(&[0, 3], &[1, 2, 3]));
        assert!(!is_sorted_subset(&[4], &[1, 2, 3]));
        assert!(!is_sorted_subset(&[1, 2], &[2]));
    }
}
