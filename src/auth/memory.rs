//! In-memory identity provider.

use super::{AuthError, AuthProvider, AuthResult, Session, UserId};
use crate::contact::domain::looks_like_email;
use async_trait::async_trait;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tokio::sync::watch;

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 6;

const SALT_LEN: usize = 16;

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    email: String,
    display_name: String,
    salt: [u8; SALT_LEN],
    digest: [u8; 32],
}

fn hash_password(salt: &[u8], password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Identity provider keeping accounts in memory.
///
/// E-mail addresses are matched case-insensitively and passwords are stored
/// as salted SHA-256 digests.
#[derive(Debug)]
pub struct InMemoryAuthProvider {
    accounts: RwLock<HashMap<String, Account>>,
    session: watch::Sender<Option<Session>>,
}

impl Default for InMemoryAuthProvider {
    fn default() -> Self {
        let (session, _) = watch::channel(None);
        Self {
            accounts: RwLock::new(HashMap::new()),
            session,
        }
    }
}

impl InMemoryAuthProvider {
    /// Creates a provider without accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered accounts.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn start(&self, session: Session) -> Session {
        self.session.send_replace(Some(session.clone()));
        session
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<Session> {
        let account = self
            .accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&normalize_email(email))
            .cloned()
            .ok_or(AuthError::InvalidCredentials)?;
        if hash_password(&account.salt, password) != account.digest {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(self.start(Session {
            user_id: account.user_id,
            email: Some(account.email),
            display_name: Some(account.display_name),
            is_anonymous: false,
        }))
    }

    async fn sign_in_anonymously(&self) -> AuthResult<Session> {
        Ok(self.start(Session {
            user_id: UserId::generate(),
            email: None,
            display_name: None,
            is_anonymous: true,
        }))
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> AuthResult<Session> {
        let trimmed = email.trim();
        if !looks_like_email(trimmed) {
            return Err(AuthError::InvalidEmail(email.to_owned()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword {
                min_len: MIN_PASSWORD_LEN,
            });
        }

        let mut salt = [0_u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let account = Account {
            user_id: UserId::generate(),
            email: trimmed.to_owned(),
            display_name: display_name.trim().to_owned(),
            salt,
            digest: hash_password(&salt, password),
        };

        {
            let mut accounts = self
                .accounts
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let key = normalize_email(trimmed);
            if accounts.contains_key(&key) {
                return Err(AuthError::EmailInUse(trimmed.to_owned()));
            }
            accounts.insert(key, account.clone());
        }

        Ok(self.start(Session {
            user_id: account.user_id,
            email: Some(account.email),
            display_name: Some(account.display_name),
            is_anonymous: false,
        }))
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.session.send_replace(None);
        Ok(())
    }

    fn session(&self) -> watch::Receiver<Option<Session>> {
        self.session.subscribe()
    }
}
