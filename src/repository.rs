// 📦 Generic Repository - Typed in-memory collections
// Two flavours of the same contract:
// - Repository<T>:      linear sequence, absence reported as Option/bool
// - KeyedRepository<T>: id-keyed map, absence and collisions are errors

use crate::error::{RepositoryError, RepositoryResult};
use indexmap::IndexMap;

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Anything with a stable integer identity
pub trait Entity: Clone {
    fn id(&self) -> i64;
}

/// Entities that expose exactly one mutable field: their stock quantity
pub trait Stocked: Entity {
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}

// ============================================================================
// LENIENT REPOSITORY (linear scan)
// ============================================================================

/// Insertion-ordered collection scanned with predicates.
///
/// Does not enforce unique ids. Lookups return `None` and removals return
/// `false` when nothing matches, leaving the contents untouched.
#[derive(Debug, Clone)]
pub struct Repository<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Repository { items: Vec::new() }
    }

    /// Append unconditionally
    pub fn add(&mut self, item: T) {
        tracing::debug!(id = item.id(), "repository add");
        self.items.push(item);
    }

    /// First entity with the given id
    pub fn get_by_id(&self, id: i64) -> Option<&T> {
        self.find(|item| item.id() == id)
    }

    /// First entity matching the predicate
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(*item))
    }

    pub fn remove_by_id(&mut self, id: i64) -> bool {
        self.remove_where(|item| item.id() == id)
    }

    /// Remove the first match. Returns whether anything was removed.
    pub fn remove_where<P>(&mut self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        match self.items.iter().position(|item| predicate(item)) {
            Some(index) => {
                let removed = self.items.remove(index);
                tracing::debug!(id = removed.id(), "repository remove");
                true
            }
            None => false,
        }
    }

    /// Defensive copy of the contents, in insertion order
    pub fn get_all(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Replace the whole collection (snapshot reload)
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// STRICT REPOSITORY (keyed by id)
// ============================================================================

/// Id-keyed collection that rejects duplicates and treats absence as an error.
///
/// Backed by an `IndexMap`, so `get_all` still yields insertion order.
#[derive(Debug, Clone)]
pub struct KeyedRepository<T: Entity> {
    items: IndexMap<i64, T>,
}

impl<T: Entity> KeyedRepository<T> {
    pub fn new() -> Self {
        KeyedRepository {
            items: IndexMap::new(),
        }
    }

    /// Insert, failing with `DuplicateEntity` if the id is taken.
    /// A failed call leaves the repository unchanged.
    pub fn add(&mut self, item: T) -> RepositoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(RepositoryError::DuplicateEntity { id });
        }
        tracing::debug!(id, "keyed repository add");
        self.items.insert(id, item);
        Ok(())
    }

    pub fn get_by_id(&self, id: i64) -> RepositoryResult<&T> {
        self.items
            .get(&id)
            .ok_or(RepositoryError::EntityNotFound { id })
    }

    /// Remove and return the entity, preserving the order of the rest
    pub fn remove(&mut self, id: i64) -> RepositoryResult<T> {
        let removed = self
            .items
            .shift_remove(&id)
            .ok_or(RepositoryError::EntityNotFound { id })?;
        tracing::debug!(id, "keyed repository remove");
        Ok(removed)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.contains_key(&id)
    }

    /// Defensive copy of the contents, in insertion order
    pub fn get_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Stocked> KeyedRepository<T> {
    /// Set a new quantity and return the stored value.
    ///
    /// Negative values are rejected with `InvalidValue` before the id is
    /// looked up; the stored quantity is untouched on any failure.
    pub fn update_quantity(&mut self, id: i64, new_quantity: i64) -> RepositoryResult<i64> {
        if new_quantity < 0 {
            return Err(RepositoryError::InvalidValue {
                field: "Quantity",
                value: new_quantity,
            });
        }

        let item = self
            .items
            .get_mut(&id)
            .ok_or(RepositoryError::EntityNotFound { id })?;
        item.set_quantity(new_quantity);
        tracing::debug!(id, quantity = new_quantity, "quantity updated");

        Ok(item.quantity())
    }
}

impl<T: Entity> Default for KeyedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
