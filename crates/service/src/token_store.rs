use std::{collections::HashMap, sync::Arc};

use rand::{rngs::OsRng, RngCore};
use tokio::sync::RwLock;
use tracing::debug;

use models::{Role, Session};

/// Process-wide map from opaque bearer token to session record.
///
/// Sessions live for the process lifetime: there is no expiry, logout or
/// revocation in this demo, so the store only ever grows.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

/// 128 random bits from the OS, hex-encoded. Uniqueness rests on the
/// randomness space; there is no collision check.
fn generate_token() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session and return its token.
    pub async fn issue(&self, email: String, role: Role, client_id: Option<u64>) -> String {
        let token = generate_token();
        let session = Session { email, role, client_id };
        let mut map = self.inner.write().await;
        map.insert(token.clone(), session);
        debug!(sessions = map.len(), "session issued");
        token
    }

    /// Look a token up, cloning the session out.
    pub async fn resolve(&self, token: &str) -> Option<Session> {
        let map = self.inner.read().await;
        map.get(token).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn issue_then_resolve_round_trip() {
        let store = TokenStore::new();
        let token = store
            .issue("a@a.com".into(), Role::Client, Some(1))
            .await;
        assert!(!token.is_empty());
        let session = store.resolve(&token).await.unwrap();
        assert_eq!(session.email, "a@a.com");
        assert_eq!(session.role, Role::Client);
        assert_eq!(session.client_id, Some(1));
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let store = TokenStore::new();
        assert!(store.resolve("deadbeef").await.is_none());
    }

    #[tokio::test]
    async fn tokens_are_hex_and_unique_over_a_large_sample() {
        let store = TokenStore::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let token = store.issue("u@e.com".into(), Role::Admin, None).await;
            assert_eq!(token.len(), 32);
            assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(seen.insert(token), "duplicate token issued");
        }
    }
}
