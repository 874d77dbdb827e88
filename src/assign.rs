//! Constrained assigner: overwrite values of keys a target already has.
//!
//! Only `MappingMut` is required of the target, which gives no access to
//! insertion or removal, so the target's key set is the same after every
//! call as before it.

use crate::mapping::{Mapping, MappingMut};

/// For every own key of `target` that `source` also has, sets the target's
/// value to a clone of the source's value. Returns `target` for chaining.
///
/// Presence is what counts: a source entry holding `None` still
/// overwrites. Target keys missing from `source` are left alone, and source
/// keys missing from `target` are never added.
///
/// ```
/// use indexmap::IndexMap;
/// use map_pick::assign_existing_keys;
///
/// let mut a: IndexMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
/// let b: IndexMap<&str, i32> = [("x", 9), ("z", 3)].into_iter().collect();
/// assign_existing_keys(&mut a, &b);
/// assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![("x", 9), ("y", 2)]);
/// ```
pub fn assign_existing_keys<'t, T, S>(target: &'t mut T, source: &S) -> &'t mut T
where
    T: MappingMut,
    S: Mapping<Key = T::Key, Value = T::Value>,
    T::Value: Clone,
{
    if source.is_empty() {
        return target;
    }
    for (k, v) in target.entries_mut() {
        if let Some(sv) = source.get_value(k) {
            v.clone_from(sv);
        }
    }
    target
}

/// By-value form of [`assign_existing_keys`]: moves each value of `entries`
/// into `target` when its key is already present there, and drops the rest.
/// If a key repeats in `entries`, the last occurrence wins.
pub fn assign_existing_entries<T, I>(target: &mut T, entries: I) -> &mut T
where
    T: MappingMut,
    I: IntoIterator<Item = (T::Key, T::Value)>,
{
    for (k, v) in entries {
        if let Some(slot) = target.get_value_mut(&k) {
            *slot = v;
        }
    }
    target
}
