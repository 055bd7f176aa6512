//! Content port definition.

use async_trait::async_trait;

use crate::domain::entities::{AccessToken, ContentInstance, SelectionType};
use crate::domain::errors::FetchError;

/// Port for fetching top content and the profile picture from the
/// backing service.
#[async_trait]
pub trait ContentPort: Send + Sync {
    /// Fetches up to `limit` top items for the given selection type.
    async fn fetch_top(
        &self,
        token: &AccessToken,
        selection: SelectionType,
        limit: usize,
    ) -> Result<Vec<ContentInstance>, FetchError>;

    /// Fetches the user's profile picture URL.
    async fn fetch_profile_picture(&self, token: &AccessToken) -> Result<String, FetchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Mock content port for testing, with call counters.
    pub struct MockContentPort {
        items: Mutex<Vec<ContentInstance>>,
        profile_url: String,
        fail_top: AtomicBool,
        fail_profile: AtomicBool,
        top_calls: AtomicUsize,
        profile_calls: AtomicUsize,
    }

    impl MockContentPort {
        /// Creates a mock returning the given items for every fetch.
        pub fn new(items: Vec<ContentInstance>) -> Self {
            Self {
                items: Mutex::new(items),
                profile_url: "https://img.example/profile.jpg".to_string(),
                fail_top: AtomicBool::new(false),
                fail_profile: AtomicBool::new(false),
                top_calls: AtomicUsize::new(0),
                profile_calls: AtomicUsize::new(0),
            }
        }

        /// Makes subsequent top fetches fail with a network error.
        pub fn set_fail_top(&self, value: bool) {
            self.fail_top.store(value, Ordering::SeqCst);
        }

        /// Makes subsequent profile fetches fail with a network error.
        pub fn set_fail_profile(&self, value: bool) {
            self.fail_profile.store(value, Ordering::SeqCst);
        }

        /// Replaces the items returned by subsequent top fetches.
        pub fn set_items(&self, items: Vec<ContentInstance>) {
            *self.items.lock().unwrap() = items;
        }

        /// Number of top fetches issued so far.
        pub fn top_calls(&self) -> usize {
            self.top_calls.load(Ordering::SeqCst)
        }

        /// Number of profile fetches issued so far.
        pub fn profile_calls(&self) -> usize {
            self.profile_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentPort for MockContentPort {
        async fn fetch_top(
            &self,
            _token: &AccessToken,
            _selection: SelectionType,
            limit: usize,
        ) -> Result<Vec<ContentInstance>, FetchError> {
            self.top_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_top.load(Ordering::SeqCst) {
                return Err(FetchError::network("mock network failure"));
            }
            let items = self.items.lock().unwrap();
            Ok(items.iter().take(limit).cloned().collect())
        }

        async fn fetch_profile_picture(&self, _token: &AccessToken) -> Result<String, FetchError> {
            self.profile_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_profile.load(Ordering::SeqCst) {
                return Err(FetchError::network("mock network failure"));
            }
            Ok(self.profile_url.clone())
        }
    }
}
