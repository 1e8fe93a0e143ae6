//! Many-to-many relationship index.
//!
//! [`RelationIndex`] stores directed edges between resource ids (group to
//! user, owner to policy ARN, and so on) separately from the resources
//! themselves. Both directions are indexed so either side can be listed or
//! purged, and edges keep their insertion order.

use std::collections::HashMap;

/// Ordered, deduplicated many-to-many index.
#[derive(Debug, Clone, Default)]
pub struct RelationIndex {
    forward: HashMap<String, Vec<String>>,
    reverse: HashMap<String, Vec<String>>,
}

impl RelationIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edge `source -> target`.
    ///
    /// Returns `false` if the edge already existed; nothing is duplicated.
    pub fn add(&mut self, source: &str, target: &str) -> bool {
        if self.contains(source, target) {
            return false;
        }
        self.forward
            .entry(source.to_owned())
            .or_default()
            .push(target.to_owned());
        self.reverse
            .entry(target.to_owned())
            .or_default()
            .push(source.to_owned());
        true
    }

    /// Remove the edge `source -> target`.
    ///
    /// Returns `false` if there was no such edge.
    pub fn remove(&mut self, source: &str, target: &str) -> bool {
        let removed = detach(&mut self.forward, source, target);
        if removed {
            detach(&mut self.reverse, target, source);
        }
        removed
    }

    /// Whether the edge `source -> target` exists.
    #[must_use]
    pub fn contains(&self, source: &str, target: &str) -> bool {
        self.forward
            .get(source)
            .is_some_and(|targets| targets.iter().any(|t| t == target))
    }

    /// Targets reachable from `source`, in the order the edges were added.
    #[must_use]
    pub fn targets(&self, source: &str) -> &[String] {
        self.forward.get(source).map(Vec::as_slice).unwrap_or_default()
    }

    /// Sources pointing at `target`, in the order the edges were added.
    #[must_use]
    pub fn sources(&self, target: &str) -> &[String] {
        self.reverse.get(target).map(Vec::as_slice).unwrap_or_default()
    }

    /// Drop every edge leaving `source`. Returns the targets that were detached.
    pub fn remove_source(&mut self, source: &str) -> Vec<String> {
        let targets = self.forward.remove(source).unwrap_or_default();
        for target in &targets {
            detach(&mut self.reverse, target, source);
        }
        targets
    }

    /// Drop every edge arriving at `target`. Returns the sources that were detached.
    pub fn remove_target(&mut self, target: &str) -> Vec<String> {
        let sources = self.reverse.remove(target).unwrap_or_default();
        for source in &sources {
            detach(&mut self.forward, source, target);
        }
        sources
    }

    /// Total number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    /// Whether the index holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Drop every edge.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.reverse.clear();
    }
}

/// Remove `to` from the adjacency list of `from`, pruning empty lists.
fn detach(map: &mut HashMap<String, Vec<String>>, from: &str, to: &str) -> bool {
    let Some(list) = map.get_mut(from) else {
        return false;
    };
    let before = list.len();
    list.retain(|existing| existing != to);
    let removed = list.len() != before;
    if list.is_empty() {
        map.remove(from);
    }
    removed
}
