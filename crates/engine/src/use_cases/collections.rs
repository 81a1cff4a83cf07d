//! Ordering helpers shared by the selection and information views.

use std::collections::HashSet;
use std::hash::Hash;

/// Sort by display name, ascending and case-sensitive.
///
/// Stable: entries with equal names keep their source order.
pub fn sort_by_name<T>(items: &mut [T], name: impl Fn(&T) -> &str) {
    items.sort_by(|a, b| name(a).cmp(name(b)));
}

/// Drop later entries whose key was already seen.
pub fn distinct_by<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_is_case_sensitive_and_stable() {
        let mut items = vec![("b", 1), ("B", 2), ("a", 3), ("b", 4)];
        sort_by_name(&mut items, |item| item.0);
        assert_eq!(items, vec![("B", 2), ("a", 3), ("b", 1), ("b", 4)]);
    }

    #[test]
    fn distinct_keeps_first_occurrence() {
        let items = vec![("Strike", 1), ("Parry", 2), ("Strike", 3)];
        let unique = distinct_by(items, |item| item.0);
        assert_eq!(unique, vec![("Strike", 1), ("Parry", 2)]);
    }
}
