//! Multi-account, multi-region state management.
//!
//! Provides [`AccountRegionStore`], a thread-safe concurrent store that
//! partitions service state by account ID and region. Nothing is shared
//! between scopes.

use std::sync::Arc;

use dashmap::DashMap;

use crate::types::{AccountId, AwsRegion, RequestContext};

/// Thread-safe, multi-account, multi-region state store.
///
/// Each (account, region) pair gets its own isolated state instance of type `T`.
///
/// # Examples
///
/// ```
/// use mockstack_core::{AccountRegionStore, AccountId, AwsRegion};
///
/// #[derive(Debug, Default)]
/// struct MyServiceState {
///     counter: std::sync::atomic::AtomicU64,
/// }
///
/// let store = AccountRegionStore::<MyServiceState>::new();
/// let state = store.get_or_create(&AccountId::default(), &AwsRegion::default());
/// state.counter.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
/// ```
#[derive(Debug)]
pub struct AccountRegionStore<T: Default + Send + Sync> {
    inner: DashMap<(AccountId, AwsRegion), Arc<T>>,
}

impl<T: Default + Send + Sync> AccountRegionStore<T> {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Get or create the state for the given account and region.
    ///
    /// If the state does not exist, a new default instance is created atomically.
    #[must_use]
    pub fn get_or_create(&self, account: &AccountId, region: &AwsRegion) -> Arc<T> {
        self.inner
            .entry((account.clone(), region.clone()))
            .or_insert_with(|| Arc::new(T::default()))
            .clone()
    }

    /// Get or create the state for the scope of a request.
    #[must_use]
    pub fn for_context(&self, ctx: &RequestContext) -> Arc<T> {
        self.get_or_create(&ctx.account_id, &ctx.region)
    }

    /// Get the state for the given account and region, if it exists.
    #[must_use]
    pub fn get(&self, account: &AccountId, region: &AwsRegion) -> Option<Arc<T>> {
        self.inner
            .get(&(account.clone(), region.clone()))
            .map(|v| v.clone())
    }

    /// Remove the state for the given account and region.
    #[must_use]
    pub fn remove(&self, account: &AccountId, region: &AwsRegion) -> Option<Arc<T>> {
        self.inner
            .remove(&(account.clone(), region.clone()))
            .map(|(_, v)| v)
    }

    /// Reset all state in the store.
    pub fn reset(&self) {
        self.inner.clear();
    }

    /// Number of (account, region) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Default + Send + Sync> Default for AccountRegionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    #[derive(Debug, Default)]
    struct TestState {
        value: AtomicU64,
    }

    #[test]
    fn test_should_create_state_on_first_access() {
        let store = AccountRegionStore::<TestState>::new();
        assert!(store.is_empty());
        let state = store.for_context(&RequestContext::default());
        assert_eq!(store.len(), 1);
        assert_eq!(state.value.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_should_return_same_state_for_same_scope() {
        let store = AccountRegionStore::<TestState>::new();
        let ctx = RequestContext::for_region("eu-west-1");

        store.for_context(&ctx).value.store(42, Ordering::Relaxed);
        let again = store.get(&ctx.account_id, &ctx.region).unwrap();
        assert_eq!(again.value.load(Ordering::Relaxed), 42);
    }

    #[test]
    fn test_should_isolate_accounts_and_regions() {
        let store = AccountRegionStore::<TestState>::new();
        let other_account = AccountId::new("111111111111").unwrap();

        store
            .for_context(&RequestContext::default())
            .value
            .store(1, Ordering::Relaxed);

        let eu = store.for_context(&RequestContext::for_region("eu-west-1"));
        let other = store.get_or_create(&other_account, &AwsRegion::default());
        assert_eq!(eu.value.load(Ordering::Relaxed), 0);
        assert_eq!(other.value.load(Ordering::Relaxed), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_should_remove_and_reset_state() {
        let store = AccountRegionStore::<TestState>::new();
        let _ = store.get_or_create(&AccountId::default(), &AwsRegion::default());
        let _ = store.get_or_create(&AccountId::default(), &AwsRegion::new("eu-west-1"));

        assert!(
            store
                .remove(&AccountId::default(), &AwsRegion::new("eu-west-1"))
                .is_some()
        );
        assert_eq!(store.len(), 1);
        store.reset();
        assert!(store.is_empty());
    }
}
