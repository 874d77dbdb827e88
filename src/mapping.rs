//! Mapping: the container abstraction `pick` and `assign_existing_keys`
//! are written against.
//!
//! Both traits expose a container's own entries and a presence lookup, and
//! nothing else. In particular `MappingMut` has no way to insert or remove
//! an entry, so code that only holds a `MappingMut` cannot change the key
//! set of the container it borrows.

use core::hash::{BuildHasher, Hash};
use indexmap::IndexMap;
use std::collections::{btree_map, hash_map, BTreeMap, HashMap};

/// Read access to a key-value container's own entries.
pub trait Mapping {
    type Key;
    type Value;
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Iterates own entries in the container's natural order.
    fn entries(&self) -> Self::Iter<'_>;

    /// Presence lookup. `Some` means `key` is an own key, whatever the value.
    fn get_value(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get_value(key).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Value-only mutable access. The key set of the container is fixed.
pub trait MappingMut: Mapping {
    type IterMut<'a>: Iterator<Item = (&'a Self::Key, &'a mut Self::Value)>
    where
        Self: 'a;

    fn entries_mut(&mut self) -> Self::IterMut<'_>;

    fn get_value_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;
}

impl<K, V, S> Mapping for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = indexmap::map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }
    #[inline]
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
    fn len(&self) -> usize {
        IndexMap::len(self)
    }
}

impl<K, V, S> MappingMut for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type IterMut<'a>
        = indexmap::map::IterMut<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
    #[inline]
    fn get_value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }
    #[inline]
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V, S> MappingMut for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type IterMut<'a>
        = hash_map::IterMut<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
    #[inline]
    fn get_value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }
}

impl<K, V, S> Mapping for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = hashbrown::hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }
    #[inline]
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }
}

impl<K, V, S> MappingMut for hashbrown::HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type IterMut<'a>
        = hashbrown::hash_map::IterMut<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
    #[inline]
    fn get_value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;
    type Iter<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }
    #[inline]
    fn get_value(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K, V> MappingMut for BTreeMap<K, V>
where
    K: Ord,
{
    type IterMut<'a>
        = btree_map::IterMut<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries_mut(&mut self) -> Self::IterMut<'_> {
        self.iter_mut()
    }
    #[inline]
    fn get_value_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_mut(key)
    }
}
