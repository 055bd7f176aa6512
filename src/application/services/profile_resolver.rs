//! Profile picture resolution.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::entities::AccessToken;
use crate::domain::ports::ContentPort;

/// Resolves the user's profile picture URL, independent of content
/// resolution.
///
/// On a failed fetch the previously resolved URL stays in place. The
/// URL is also not cleared when resolution runs with the feature
/// disabled; callers that stop including the picture keep the last
/// value around (matches the historical behavior, see DESIGN.md).
pub struct ProfilePictureResolver {
    port: Arc<dyn ContentPort>,
    current: RwLock<Option<String>>,
}

impl ProfilePictureResolver {
    /// Creates a new resolver with no picture resolved yet.
    #[must_use]
    pub fn new(port: Arc<dyn ContentPort>) -> Self {
        Self {
            port,
            current: RwLock::new(None),
        }
    }

    /// Runs one resolution cycle.
    ///
    /// When `include` is false no request is issued and the prior value
    /// is returned unchanged. Fetch failures are logged and absorbed.
    pub async fn resolve(&self, token: &AccessToken, include: bool) -> Option<String> {
        if !include {
            debug!("Profile picture disabled, skipping fetch");
            return self.current.read().await.clone();
        }

        match self.port.fetch_profile_picture(token).await {
            Ok(url) => {
                info!("Successfully fetched profile picture");
                let mut current = self.current.write().await;
                *current = Some(url.clone());
                Some(url)
            }
            Err(e) => {
                warn!(error = %e, "Error fetching profile picture");
                self.current.read().await.clone()
            }
        }
    }

    /// Last resolved URL, if any.
    pub async fn current(&self) -> Option<String> {
        self.current.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockContentPort;

    fn make_resolver() -> (ProfilePictureResolver, Arc<MockContentPort>) {
        let port = Arc::new(MockContentPort::new(Vec::new()));
        (ProfilePictureResolver::new(port.clone()), port)
    }

    #[tokio::test]
    async fn test_disabled_never_fetches() {
        let (resolver, port) = make_resolver();

        let url = resolver.resolve(&AccessToken::new("t"), false).await;

        assert!(url.is_none());
        assert_eq!(port.profile_calls(), 0);
    }

    #[tokio::test]
    async fn test_enabled_fetches_and_stores() {
        let (resolver, port) = make_resolver();

        let url = resolver.resolve(&AccessToken::new("t"), true).await;

        assert_eq!(url.as_deref(), Some("https://img.example/profile.jpg"));
        assert_eq!(resolver.current().await, url);
        assert_eq!(port.profile_calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_prior_value() {
        let (resolver, port) = make_resolver();
        resolver.resolve(&AccessToken::new("t"), true).await;

        port.set_fail_profile(true);
        let url = resolver.resolve(&AccessToken::new("t"), true).await;

        assert_eq!(url.as_deref(), Some("https://img.example/profile.jpg"));
    }

    #[tokio::test]
    async fn test_disabling_keeps_prior_value() {
        let (resolver, port) = make_resolver();
        resolver.resolve(&AccessToken::new("t"), true).await;

        let url = resolver.resolve(&AccessToken::new("t"), false).await;

        assert_eq!(url.as_deref(), Some("https://img.example/profile.jpg"));
        assert_eq!(port.profile_calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_with_no_prior_value() {
        let (resolver, port) = make_resolver();
        port.set_fail_profile(true);

        let url = resolver.resolve(&AccessToken::new("t"), true).await;

        assert!(url.is_none());
    }
}
