//! Method-call forms of the free functions, for chaining.

use crate::assign::{assign_existing_entries, assign_existing_keys};
use crate::mapping::{Mapping, MappingMut};
use crate::pick::{pick, pick_into, picked, Pick};

/// Extension methods available on every [`Mapping`].
pub trait MappingExt: Mapping {
    /// See [`pick`](crate::pick()).
    fn pick<Q>(&self, keys: &[Q]) -> Self
    where
        Self: Sized + FromIterator<(Self::Key, Self::Value)>,
        Self::Key: Clone,
        Self::Value: Clone,
        Q: PartialEq<Self::Key>,
    {
        pick(self, keys)
    }

    /// See [`pick_into`](crate::pick_into).
    fn pick_into<O, Q>(&self, keys: &[Q]) -> O
    where
        Self: Sized,
        Self::Key: Clone,
        Self::Value: Clone,
        Q: PartialEq<Self::Key>,
        O: FromIterator<(Self::Key, Self::Value)>,
    {
        pick_into(self, keys)
    }

    /// See [`picked`](crate::picked).
    fn picked<'a, Q>(&'a self, keys: &'a [Q]) -> Pick<'a, Self, Q>
    where
        Self: Sized,
        Q: PartialEq<Self::Key>,
    {
        picked(self, keys)
    }

    /// See [`assign_existing_keys`](crate::assign_existing_keys).
    fn assign_existing_keys<S>(&mut self, source: &S) -> &mut Self
    where
        Self: MappingMut + Sized,
        S: Mapping<Key = Self::Key, Value = Self::Value>,
        Self::Value: Clone,
    {
        assign_existing_keys(self, source)
    }

    /// See [`assign_existing_entries`](crate::assign_existing_entries).
    fn assign_existing_entries<I>(&mut self, entries: I) -> &mut Self
    where
        Self: MappingMut + Sized,
        I: IntoIterator<Item = (Self::Key, Self::Value)>,
    {
        assign_existing_entries(self, entries)
    }
}

impl<M> MappingExt for M where M: Mapping + ?Sized {}
