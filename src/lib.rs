//! map-pick: two small helpers over key-value containers.
//!
//! - `pick(obj, keys)` returns a new mapping holding only the entries of
//!   `obj` whose keys are listed in `keys`.
//! - `assign_existing_keys(target, source)` overwrites the values of keys
//!   `target` already has with the values `source` holds for them, and
//!   returns `target` for chaining.
//!
//! Design:
//!
//! Mapping layer
//! - Both helpers are written against the `Mapping` / `MappingMut` traits
//!   rather than a concrete map. Implementations are provided for
//!   `IndexMap`, `std::collections::HashMap`, `BTreeMap` and
//!   `hashbrown::HashMap`, each generic over its hasher where it has one.
//! - Key enumeration is explicit iteration over a container's own entries;
//!   key presence is an explicit lookup, so a present entry holding `None`
//!   is distinct from an absent one.
//!
//! Ordering
//! - `pick` follows the source's iteration order, never the order of the
//!   requested keys. Use `IndexMap` when insertion order matters.
//! - `assign_existing_keys` walks the target's entries; order is
//!   unobservable in the result since keys are unique.
//!
//! Invariants
//! - `pick` never mutates its source and its result only holds keys that
//!   were both requested and present.
//! - `MappingMut` exposes values mutably but has no insert or remove, so
//!   `assign_existing_keys` cannot change the target's key set.
//!
//! Notes and non-goals
//! - Shallow: values are cloned with `Clone`, nothing is merged
//!   recursively.
//! - No validation or error reporting; nothing here can fail.
//! - Matching a key against the requested key slice is a linear scan.

mod assign;
mod assign_proptest;
mod ext;
pub mod mapping;
mod pick;
mod pick_proptest;

// Public surface
pub use assign::{assign_existing_entries, assign_existing_keys};
pub use ext::MappingExt;
pub use mapping::{Mapping, MappingMut};
pub use pick::{pick, pick_into, picked, Pick};
