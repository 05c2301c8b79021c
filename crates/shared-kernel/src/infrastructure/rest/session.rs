// crates/shared-kernel/src/infrastructure/rest/session.rs

use std::sync::RwLock;
use async_trait::async_trait;

/// Stockage de session injecté (persistant sur mobile, absent sur le web).
/// La gestion du cycle de vie des jetons reste hors de ce crate.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn access_token(&self) -> Option<String>;
}

/// Aucune session : la clé API sert de bearer
pub struct NoSession;

#[async_trait]
impl SessionProvider for NoSession {
    async fn access_token(&self) -> Option<String> {
        None
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

#[async_trait]
impl SessionProvider for MemorySessionStore {
    async fn access_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }
}
