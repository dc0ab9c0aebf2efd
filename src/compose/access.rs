//! Safe property and element access.
//!
//! Lookups never panic: a missing key, an out-of-range index or an empty
//! slice produce absence. The plain variants return [`Option`], the `safe_`
//! variants return [`Maybe`] so they chain with the rest of the control
//! containers.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::control::Maybe;

/// Containers that can look up a value by key.
///
/// Maps are keyed by their key type (and `String`-keyed maps by `&str` as
/// well); sequences are keyed by `usize` index.
pub trait Keyed<K> {
    /// The type of the values stored in the container.
    type Value;

    /// Returns a reference to the value stored under `key`, if any.
    fn lookup(&self, key: &K) -> Option<&Self::Value>;
}

impl<K, V, S> Keyed<K> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<'k, V, S> Keyed<&'k str> for HashMap<String, V, S>
where
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &&'k str) -> Option<&V> {
        self.get(*key)
    }
}

impl<K: Ord, V> Keyed<K> for BTreeMap<K, V> {
    type Value = V;

    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<'k, V> Keyed<&'k str> for BTreeMap<String, V> {
    type Value = V;

    #[inline]
    fn lookup(&self, key: &&'k str) -> Option<&V> {
        self.get(*key)
    }
}

impl<T> Keyed<usize> for [T] {
    type Value = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T, const N: usize> Keyed<usize> for [T; N] {
    type Value = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Keyed<usize> for Vec<T> {
    type Value = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

/// Creates an accessor that reads `key` out of a container.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use pointfree::compose::prop;
///
/// let user = HashMap::from([("name".to_string(), "Ada".to_string())]);
/// let name = prop("name");
///
/// assert_eq!(name(&user), Some("Ada".to_string()));
/// assert_eq!(prop("email")(&user), None);
/// assert_eq!(prop(1_usize)(&vec![10, 20, 30]), Some(20));
/// ```
pub fn prop<C, K>(key: K) -> impl Fn(&C) -> Option<C::Value> + Clone
where
    C: Keyed<K> + ?Sized,
    C::Value: Clone,
    K: Clone,
{
    move |container: &C| container.lookup(&key).cloned()
}

/// Like [`prop`], but wraps the result in a [`Maybe`].
///
/// ```
/// use std::collections::BTreeMap;
/// use pointfree::compose::safe_prop;
/// use pointfree::control::Maybe;
///
/// let ports = BTreeMap::from([("http", 80), ("https", 443)]);
/// let https = safe_prop("https");
///
/// assert_eq!(https(&ports), Maybe::Just(443));
/// assert!(safe_prop("ftp")(&ports).is_nothing());
/// ```
pub fn safe_prop<C, K>(key: K) -> impl Fn(&C) -> Maybe<C::Value> + Clone
where
    C: Keyed<K> + ?Sized,
    C::Value: Clone,
    K: Clone,
{
    move |container: &C| Maybe::from(container.lookup(&key).cloned())
}

/// Returns the first element, or `None` for an empty slice.
#[inline]
pub fn head<T: Clone>(items: &[T]) -> Option<T> {
    items.first().cloned()
}

/// Returns the last element, or `None` for an empty slice.
#[inline]
pub fn last<T: Clone>(items: &[T]) -> Option<T> {
    items.last().cloned()
}

/// Returns the first element as a [`Maybe`].
///
/// ```
/// use pointfree::compose::safe_head;
/// use pointfree::control::Maybe;
///
/// assert_eq!(safe_head(&[1, 2, 3]).map(|n| n * 10), Maybe::Just(10));
/// assert_eq!(safe_head::<i32>(&[]), Maybe::Nothing);
/// ```
#[inline]
pub fn safe_head<T: Clone>(items: &[T]) -> Maybe<T> {
    Maybe::from(head(items))
}

/// Returns the last element as a [`Maybe`].
#[inline]
pub fn safe_last<T: Clone>(items: &[T]) -> Maybe<T> {
    Maybe::from(last(items))
}
