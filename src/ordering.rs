//! Key-based three-way comparison.

use std::cmp::Ordering;

/// Compare two items by a key-extraction function.
///
/// Returns the ordering of `key(a)` relative to `key(b)`.
pub fn compare_by<T, K, F>(key: F, a: &T, b: &T) -> Ordering
where
    F: Fn(&T) -> K,
    K: Ord,
{
    key(a).cmp(&key(b))
}

/// Compare two items by a key that is only partially ordered.
///
/// Keys that compare neither less nor greater (including incomparable
/// pairs such as NaN) yield `Ordering::Equal`.
pub fn compare_by_partial<T, K, F>(key: F, a: &T, b: &T) -> Ordering
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let ka = key(a);
    let kb = key(b);

    if ka < kb {
        Ordering::Less
    } else if ka > kb {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
