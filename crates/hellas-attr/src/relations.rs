//! Symmetric relation maps

use std::collections::{BTreeMap, BTreeSet};

/// Build a relation map from groups of mutually related items
///
/// Every member of a group is related to every other member of every group
/// it appears in. Duplicates collapse and nothing is related to itself; an
/// item that only ever appears alone maps to an empty set.
///
/// # Example
/// ```rust
/// use hellas_attr::relations;
///
/// let rel = relations([vec!["a", "b", "c"], vec!["a", "x"]]);
/// assert_eq!(rel["a"].iter().copied().collect::<Vec<_>>(), vec!["b", "c", "x"]);
/// assert_eq!(rel["x"].iter().copied().collect::<Vec<_>>(), vec!["a"]);
/// ```
pub fn relations<T, G, I>(groups: I) -> BTreeMap<T, BTreeSet<T>>
where
    T: Ord + Clone,
    G: IntoIterator<Item = T>,
    I: IntoIterator<Item = G>,
{
    let mut related: BTreeMap<T, BTreeSet<T>> = BTreeMap::new();
    for group in groups {
        let members: Vec<T> = group.into_iter().collect();
        for member in &members {
            let entry = related.entry(member.clone()).or_default();
            entry.extend(members.iter().filter(|other| *other != member).cloned());
        }
    }
    related
}
