//! Generic resource table used by every emulated service.
//!
//! A [`ResourceTable`] keeps records of one resource type keyed by their
//! server-assigned id, preserves insertion order for listing, and optionally
//! enforces uniqueness of a secondary key (usually the resource name).
//!
//! The table itself is not synchronized. Services own their tables behind a
//! single per-scope lock so compound operations stay atomic.

use std::collections::HashMap;

use crate::error::StoreError;

/// A record that can be stored in a [`ResourceTable`].
pub trait Resource: Clone {
    /// Resource kind used in error values (e.g. `group`).
    const KIND: &'static str;

    /// Server-assigned identifier.
    fn id(&self) -> &str;

    /// Secondary key that must be unique within the table, if any.
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

/// Insertion-ordered collection of resources with unique-key enforcement.
#[derive(Debug, Clone)]
pub struct ResourceTable<R: Resource> {
    records: HashMap<String, R>,
    order: Vec<String>,
    unique: HashMap<String, String>,
}

impl<R: Resource> Default for ResourceTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> ResourceTable<R> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            unique: HashMap::new(),
        }
    }

    /// Insert a new record.
    ///
    /// # Errors
    ///
    /// [`StoreError::AlreadyExists`] when the record's unique key or id is
    /// already taken. The table is left unchanged.
    pub fn insert(&mut self, record: R) -> Result<&R, StoreError> {
        if let Some(key) = record.unique_key() {
            if self.unique.contains_key(key) {
                return Err(StoreError::AlreadyExists {
                    kind: R::KIND,
                    key: key.to_owned(),
                });
            }
        }
        let id = record.id().to_owned();
        if self.records.contains_key(&id) {
            return Err(StoreError::AlreadyExists {
                kind: R::KIND,
                key: id,
            });
        }

        if let Some(key) = record.unique_key() {
            self.unique.insert(key.to_owned(), id.clone());
        }
        self.order.push(id.clone());
        Ok(self.records.entry(id).or_insert(record))
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.get(id)
    }

    /// Look up a record by its unique key (exact, case-sensitive).
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&R> {
        self.unique.get(key).and_then(|id| self.records.get(id))
    }

    /// Look up a record by id first, then by unique key.
    #[must_use]
    pub fn resolve(&self, id_or_key: &str) -> Option<&R> {
        self.get(id_or_key).or_else(|| self.get_by_key(id_or_key))
    }

    /// Look up a record by id, failing with [`StoreError::NotFound`].
    pub fn require(&self, id: &str) -> Result<&R, StoreError> {
        self.get(id).ok_or_else(|| StoreError::NotFound {
            kind: R::KIND,
            key: id.to_owned(),
        })
    }

    /// Mutable access for patches that do not change the unique key.
    ///
    /// Use [`ResourceTable::update`] when the unique key may change.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut R> {
        self.records.get_mut(id)
    }

    /// Apply `patch` to the record with the given id.
    ///
    /// The patch runs on a copy. If it changes the unique key, the new key is
    /// checked against every other record before anything is committed, so a
    /// rejected update leaves the table untouched.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`] if no record has this id.
    /// - [`StoreError::Conflict`] if the new unique key is already held.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut R)) -> Result<&R, StoreError> {
        let current = self.require(id)?;
        let old_key = current.unique_key().map(str::to_owned);
        let mut next = current.clone();
        patch(&mut next);

        let new_key = next.unique_key().map(str::to_owned);
        if new_key != old_key {
            if let Some(ref key) = new_key {
                if self.unique.get(key).is_some_and(|owner| owner != id) {
                    return Err(StoreError::Conflict {
                        kind: R::KIND,
                        key: key.clone(),
                    });
                }
            }
            if let Some(ref key) = old_key {
                self.unique.remove(key);
            }
            if let Some(key) = new_key {
                self.unique.insert(key, id.to_owned());
            }
        }

        let slot = self
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound {
                kind: R::KIND,
                key: id.to_owned(),
            })?;
        *slot = next;
        Ok(slot)
    }

    /// Remove a record by id and return it.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no record has this id.
    pub fn remove(&mut self, id: &str) -> Result<R, StoreError> {
        let record = self.records.remove(id).ok_or_else(|| StoreError::NotFound {
            kind: R::KIND,
            key: id.to_owned(),
        })?;
        if let Some(key) = record.unique_key() {
            self.unique.remove(key);
        }
        self.order.retain(|existing| existing != id);
        Ok(record)
    }

    /// Iterate records in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &R> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.order.clear();
        self.unique.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: String,
        name: String,
        color: String,
    }

    impl Resource for Widget {
        const KIND: &'static str = "widget";

        fn id(&self) -> &str {
            &self.id
        }

        fn unique_key(&self) -> Option<&str> {
            Some(&self.name)
        }
    }

    fn widget(id: &str, name: &str) -> Widget {
        Widget {
            id: id.to_owned(),
            name: name.to_owned(),
            color: "red".to_owned(),
        }
    }

    fn table_with(names: &[(&str, &str)]) -> ResourceTable<Widget> {
        let mut table = ResourceTable::new();
        for (id, name) in names {
            table.insert(widget(id, name)).unwrap();
        }
        table
    }

    #[test]
    fn test_should_insert_and_resolve_by_id_or_name() {
        let table = table_with(&[("w1", "alpha")]);
        assert_eq!(table.get("w1").unwrap().name, "alpha");
        assert_eq!(table.get_by_key("alpha").unwrap().id, "w1");
        assert_eq!(table.resolve("alpha").unwrap().id, "w1");
        assert_eq!(table.resolve("w1").unwrap().id, "w1");
    }

    #[test]
    fn test_should_match_names_case_sensitively() {
        let mut table = table_with(&[("w1", "alpha")]);
        assert!(table.get_by_key("Alpha").is_none());
        assert!(table.insert(widget("w2", "Alpha")).is_ok());
    }

    #[test]
    fn test_should_reject_duplicate_unique_key() {
        let mut table = table_with(&[("w1", "alpha")]);
        let err = table.insert(widget("w2", "alpha")).unwrap_err();
        assert_eq!(
            err,
            StoreError::AlreadyExists {
                kind: "widget",
                key: "alpha".to_owned()
            }
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_should_list_in_insertion_order() {
        let table = table_with(&[("z", "zeta"), ("a", "alpha"), ("m", "mu")]);
        let names: Vec<&str> = table.list().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_should_rename_and_reindex() {
        let mut table = table_with(&[("w1", "alpha")]);
        let updated = table
            .update("w1", |w| w.name = "beta".to_owned())
            .unwrap()
            .clone();
        assert_eq!(updated.id, "w1");
        assert!(table.get_by_key("alpha").is_none());
        assert_eq!(table.get_by_key("beta").unwrap().id, "w1");
    }

    #[test]
    fn test_should_reject_conflicting_rename_without_mutation() {
        let mut table = table_with(&[("w1", "alpha"), ("w2", "beta")]);
        let err = table
            .update("w1", |w| {
                w.name = "beta".to_owned();
                w.color = "blue".to_owned();
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
        let untouched = table.get("w1").unwrap();
        assert_eq!(untouched.name, "alpha");
        assert_eq!(untouched.color, "red");
        assert_eq!(table.get_by_key("beta").unwrap().id, "w2");
    }

    #[test]
    fn test_should_allow_update_keeping_same_name() {
        let mut table = table_with(&[("w1", "alpha")]);
        table.update("w1", |w| w.color = "green".to_owned()).unwrap();
        assert_eq!(table.get_by_key("alpha").unwrap().color, "green");
    }

    #[test]
    fn test_should_report_missing_records() {
        let mut table = table_with(&[]);
        assert!(matches!(
            table.update("nope", |_| {}),
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            table.remove("nope"),
            Err(StoreError::NotFound { .. })
        ));
        assert!(table.require("nope").is_err());
    }

    #[test]
    fn test_should_remove_record_and_free_name() {
        let mut table = table_with(&[("w1", "alpha"), ("w2", "beta")]);
        let removed = table.remove("w1").unwrap();
        assert_eq!(removed.name, "alpha");
        assert_eq!(table.list().count(), 1);
        assert!(table.insert(widget("w3", "alpha")).is_ok());
    }
}
