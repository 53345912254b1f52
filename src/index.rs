// 🗂️ Derived Index - Rebuildable grouping view over a repository
//
// The index is a projection, never a source of truth: every rebuild clears the
// previous mapping and repopulates it from the items it is handed.

use std::collections::BTreeMap;
use std::fmt;

/// Groups entities by a secondary key, keeping source order inside each group.
///
/// Keys with no entities are never stored; `get` on such a key returns an
/// empty slice.
#[derive(Clone)]
pub struct GroupIndex<K: Ord + Clone, T: Clone> {
    key_fn: fn(&T) -> K,
    groups: BTreeMap<K, Vec<T>>,
}

impl<K: Ord + Clone, T: Clone> GroupIndex<K, T> {
    /// Empty index that will group by `key_fn` once rebuilt
    pub fn new(key_fn: fn(&T) -> K) -> Self {
        GroupIndex {
            key_fn,
            groups: BTreeMap::new(),
        }
    }

    pub fn build(items: &[T], key_fn: fn(&T) -> K) -> Self {
        let mut index = Self::new(key_fn);
        index.rebuild(items);
        index
    }

    /// Clear and repopulate from `items`
    pub fn rebuild(&mut self, items: &[T]) {
        self.groups.clear();
        for item in items {
            self.groups
                .entry((self.key_fn)(item))
                .or_default()
                .push(item.clone());
        }
        tracing::debug!(groups = self.groups.len(), items = items.len(), "index rebuilt");
    }

    pub fn get(&self, key: &K) -> &[T] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.groups.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn groups(&self) -> &BTreeMap<K, Vec<T>> {
        &self.groups
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K, T> fmt::Debug for GroupIndex<K, T>
where
    K: Ord + Clone + fmt::Debug,
    T: Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupIndex")
            .field("groups", &self.groups)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: i64,
        owner: i64,
    }

    fn owner_of(note: &Note) -> i64 {
        note.owner
    }

    fn notes() -> Vec<Note> {
        vec![
            Note { id: 1, owner: 1 },
            Note { id: 2, owner: 1 },
            Note { id: 3, owner: 2 },
            Note { id: 4, owner: 3 },
            Note { id: 5, owner: 2 },
        ]
    }

    #[test]
    fn test_groups_keep_source_order() {
        let index = GroupIndex::build(&notes(), owner_of);

        let ids: Vec<i64> = index.get(&2).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 5]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_absent_key_is_empty_not_stored() {
        let index = GroupIndex::build(&notes(), owner_of);

        assert!(index.get(&42).is_empty());
        assert!(!index.contains_key(&42));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let items = notes();
        let mut index = GroupIndex::build(&items, owner_of);
        let first = index.groups().clone();

        index.rebuild(&items);

        assert_eq!(index.groups(), &first);
    }

    #[test]
    fn test_rebuild_drops_stale_keys() {
        let mut index = GroupIndex::build(&notes(), owner_of);
        assert!(index.contains_key(&3));

        let remaining: Vec<Note> = notes().into_iter().filter(|n| n.owner != 3).collect();
        index.rebuild(&remaining);

        assert!(!index.contains_key(&3));
        assert_eq!(index.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_new_index_is_empty() {
        let index: GroupIndex<i64, Note> = GroupIndex::new(owner_of);
        assert!(index.is_empty());
        assert!(index.get(&1).is_empty());
    }
}
