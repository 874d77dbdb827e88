//! Selector: restrict a mapping to a requested set of keys.

use crate::mapping::Mapping;

/// Lazy iterator over the entries of a mapping whose keys appear in a key
/// slice. Entries are visited in the mapping's own order.
pub struct Pick<'a, M, Q>
where
    M: Mapping + 'a,
{
    it: M::Iter<'a>,
    keys: &'a [Q],
}

impl<'a, M, Q> Iterator for Pick<'a, M, Q>
where
    M: Mapping + 'a,
    Q: PartialEq<M::Key>,
{
    type Item = (&'a M::Key, &'a M::Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let keys = self.keys;
        self.it.find(|(k, _)| keys.iter().any(|q| q == *k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.it.size_hint().1)
    }
}

/// Borrowing form of [`pick`]: yields `(&K, &V)` for every own entry of
/// `obj` whose key is in `keys`, without cloning anything.
pub fn picked<'a, M, Q>(obj: &'a M, keys: &'a [Q]) -> Pick<'a, M, Q>
where
    M: Mapping,
    Q: PartialEq<M::Key>,
{
    Pick {
        it: obj.entries(),
        keys,
    }
}

/// Returns a new mapping holding each entry of `obj` whose key is in `keys`.
///
/// Keys absent from `obj` are ignored and repeated keys do not repeat
/// entries. The result follows `obj`'s iteration order, not the order of
/// `keys`. `obj` is left untouched; values are cloned.
///
/// ```
/// use indexmap::IndexMap;
/// use map_pick::pick;
///
/// let obj: IndexMap<&str, i32> = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
/// let out = pick(&obj, &["z", "x"]);
/// assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![("x", 1), ("z", 3)]);
/// ```
pub fn pick<M, Q>(obj: &M, keys: &[Q]) -> M
where
    M: Mapping + FromIterator<(M::Key, M::Value)>,
    M::Key: Clone,
    M::Value: Clone,
    Q: PartialEq<M::Key>,
{
    pick_into(obj, keys)
}

/// Like [`pick`], but collects into any container `O`, e.g. picking from a
/// `HashMap` into a `BTreeMap`.
pub fn pick_into<O, M, Q>(obj: &M, keys: &[Q]) -> O
where
    M: Mapping,
    M::Key: Clone,
    M::Value: Clone,
    Q: PartialEq<M::Key>,
    O: FromIterator<(M::Key, M::Value)>,
{
    picked(obj, keys)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{pick, pick_into, picked};
    use indexmap::IndexMap;
    use std::collections::{BTreeMap, HashMap};

    fn xyz() -> IndexMap<String, i32> {
        [("x", 1), ("y", 2), ("z", 3)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn picks_requested_keys() {
        let out = pick(&xyz(), &["x", "z"]);
        let expected: IndexMap<String, i32> =
            [("x".to_string(), 1), ("z".to_string(), 3)].into_iter().collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn result_follows_source_order_not_key_order() {
        let out = pick(&xyz(), &["z", "y", "x"]);
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["x", "y", "z"]);
    }

    #[test]
    fn empty_keys_yield_empty_mapping() {
        let keys: [&str; 0] = [];
        assert!(pick(&xyz(), &keys).is_empty());
    }

    #[test]
    fn absent_keys_are_ignored() {
        assert!(pick(&xyz(), &["a", "b"]).is_empty());
        let out = pick(&xyz(), &["a", "y"]);
        assert_eq!(out.len(), 1);
        assert_eq!(out.get("y"), Some(&2));
    }

    #[test]
    fn repeated_keys_do_not_repeat_entries() {
        let src = xyz();
        let out: Vec<(&str, i32)> = picked(&src, &["y", "y", "y"])
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(out, vec![("y", 2)]);
        assert_eq!(pick(&src, &["y", "x", "y"]).len(), 2);
    }

    #[test]
    fn source_is_not_mutated() {
        let src = xyz();
        let before = src.clone();
        let _ = pick(&src, &["x"]);
        assert_eq!(src, before);
    }

    #[test]
    fn pick_into_other_container() {
        let src: HashMap<&'static str, i32> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
        let out: BTreeMap<&'static str, i32> = pick_into(&src, &["c", "a"]);
        assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![("a", 1), ("c", 3)]);
    }

    #[test]
    fn picked_borrows_without_cloning() {
        // Value type is not Clone; only the borrowing form is available.
        struct Opaque(u8);
        let mut src: IndexMap<&'static str, Opaque> = IndexMap::new();
        src.insert("a", Opaque(1));
        src.insert("b", Opaque(2));
        let got: Vec<u8> = picked(&src, &["b"]).map(|(_, v)| v.0).collect();
        assert_eq!(got, vec![2]);
    }
}
