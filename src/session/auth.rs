/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Process-wide session state
//!
//! [`Session`] owns the durable credential pair (access token, refresh token
//! and operator profile) and the in-flight renewal state used by the HTTP
//! client to make sure only one token renewal runs at a time:
//! - the first request that sees a 401 becomes the renewal leader
//! - every request that sees a 401 while the leader is working queues a
//!   one-shot waiter and replays once the leader settles
//! - waiters are drained exactly once per renewal attempt
//!
//! Every logout or fresh login starts a new credential epoch. A renewal
//! only commits its token pair if the epoch it started in is still current,
//! so a logout that lands mid-renewal stays logged out.

use crate::application::config::Config;
use crate::constants::{AUTH_TOKEN_KEY, AUTH_USER_KEY, LOGIN_PATH, REFRESH_TOKEN_KEY};
use crate::error::AppError;
use crate::model::auth::{AuthData, AuthUser, StoredAuth, TokenPair};
use crate::session::interface::{Navigator, SessionStore};
use crate::session::store::{FileStore, HeadlessNavigator, MemoryStore};
use std::fmt;
use std::mem;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

/// Outcome delivered to a queued request: the new access token, or `None`
/// when the renewal failed
pub type RenewalOutcome = Option<String>;

#[derive(Debug, Default)]
struct RenewalState {
    is_renewing: bool,
    waiters: Vec<oneshot::Sender<RenewalOutcome>>,
}

/// Role assigned to a request that observed a 401
#[derive(Debug)]
pub enum RenewalTicket<'a> {
    /// No renewal was running; the holder must perform it
    Leader(RenewalGuard<'a>),
    /// A renewal is already running; await its outcome
    Waiter(oneshot::Receiver<RenewalOutcome>),
}

/// Held by the renewal leader until the renewal settles
///
/// Dropping the guard without calling [`succeed`](RenewalGuard::succeed)
/// settles the renewal as failed, which also covers a leader future that is
/// cancelled halfway.
#[derive(Debug)]
pub struct RenewalGuard<'a> {
    session: &'a Session,
    token: Option<String>,
    epoch: u64,
}

impl RenewalGuard<'_> {
    /// Credential epoch observed when the renewal started
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Settles the renewal successfully, releasing every waiter with `token`
    pub fn succeed(mut self, token: String) {
        self.token = Some(token);
    }

    /// Settles the renewal as failed; waiters are released without a token
    pub fn fail(self) {}
}

impl Drop for RenewalGuard<'_> {
    fn drop(&mut self) {
        self.session.settle_renewal(self.token.take());
    }
}

/// Credential pair, profile and renewal coordination shared by every request
pub struct Session {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_path: String,
    renewal: Mutex<RenewalState>,
    epoch: Mutex<u64>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("login_path", &self.login_path)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Creates a session over the given store and navigator
    pub fn new(store: Arc<dyn SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            store,
            navigator,
            login_path: LOGIN_PATH.to_string(),
            renewal: Mutex::new(RenewalState::default()),
            epoch: Mutex::new(0),
        }
    }

    /// Creates an in-memory session with a headless navigator
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(HeadlessNavigator::default()),
        )
    }

    /// Creates a session as described by the configuration
    ///
    /// A file-backed store is used when `storage.path` is set.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let store: Arc<dyn SessionStore> = match &config.storage.path {
            Some(path) => Arc::new(FileStore::open(path)?),
            None => Arc::new(MemoryStore::new()),
        };
        let mut session = Self::new(store, Arc::new(HeadlessNavigator::default()));
        session.login_path = config.login_path.clone();
        Ok(session)
    }

    /// Overrides the login entry point used by [`clear_auth`](Session::clear_auth)
    pub fn with_login_path(mut self, login_path: impl Into<String>) -> Self {
        self.login_path = login_path.into();
        self
    }

    /// Stored access token
    pub fn access_token(&self) -> Option<String> {
        self.store.get(AUTH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored refresh token
    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Stored operator profile; an unreadable blob counts as absent
    pub fn user(&self) -> Option<AuthUser> {
        let raw = self.store.get(AUTH_USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring unreadable stored profile: {}", e);
                None
            }
        }
    }

    /// Overwrites both tokens
    pub fn store_tokens(&self, tokens: &TokenPair) -> Result<(), AppError> {
        self.store.set(AUTH_TOKEN_KEY, &tokens.access_token)?;
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token)?;
        debug!("Stored renewed token pair");
        Ok(())
    }

    /// Persists the payload of a successful authentication
    ///
    /// The refresh token is removed when the payload carries none, so the
    /// pair never mixes tokens from different logins.
    pub fn store_auth_data(&self, data: &AuthData) -> Result<(), AppError> {
        let mut epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
        *epoch += 1;
        self.store.set(AUTH_TOKEN_KEY, &data.access_token)?;
        match &data.refresh_token {
            Some(refresh) => self.store.set(REFRESH_TOKEN_KEY, refresh)?,
            None => self.store.remove(REFRESH_TOKEN_KEY)?,
        }
        if let Some(user) = &data.user {
            self.store.set(AUTH_USER_KEY, &serde_json::to_string(user)?)?;
        }
        info!(
            "Stored credentials for {}",
            data.user
                .as_ref()
                .and_then(|u| u.email.as_deref())
                .unwrap_or("unknown user")
        );
        Ok(())
    }

    /// Token and profile, when both are stored
    pub fn auth_data(&self) -> Option<StoredAuth> {
        Some(StoredAuth {
            token: self.access_token()?,
            user: self.user()?,
        })
    }

    /// True when both a token and a profile are stored
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some() && self.store.get(AUTH_USER_KEY).is_some()
    }

    /// True when the stored profile is flagged as system admin
    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_system_admin)
    }

    /// Current credential epoch, bumped by every logout and login
    pub fn credentials_epoch(&self) -> u64 {
        *self.epoch.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a renewed token pair unless the credentials were cleared or
    /// replaced since `epoch`
    ///
    /// # Returns
    /// * `true` when the pair was stored
    pub fn commit_tokens(&self, epoch: u64, tokens: &TokenPair) -> Result<bool, AppError> {
        let current = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
        if *current != epoch {
            info!("Credentials changed during renewal, discarding renewed token pair");
            return Ok(false);
        }
        self.store_tokens(tokens)?;
        Ok(true)
    }

    /// Removes the credential pair and the profile, then sends the navigator
    /// to the login entry point unless it is already there
    pub fn clear_auth(&self) {
        let mut epoch = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
        self.remove_credentials(&mut epoch);
        drop(epoch);
        self.redirect_to_login();
    }

    /// Same as [`clear_auth`](Session::clear_auth), but only if the
    /// credentials still belong to `epoch`
    ///
    /// # Returns
    /// * `true` when the credentials were cleared
    pub fn clear_auth_since(&self, epoch: u64) -> bool {
        let mut current = self.epoch.lock().unwrap_or_else(PoisonError::into_inner);
        if *current != epoch {
            debug!("Credentials already replaced, nothing to clear");
            return false;
        }
        self.remove_credentials(&mut current);
        drop(current);
        self.redirect_to_login();
        true
    }

    fn remove_credentials(&self, epoch: &mut u64) {
        *epoch += 1;
        for key in [AUTH_TOKEN_KEY, REFRESH_TOKEN_KEY, AUTH_USER_KEY] {
            if let Err(e) = self.store.remove(key) {
                error!("Failed to remove {} from session store: {}", key, e);
            }
        }
        info!("Cleared stored credentials");
    }

    fn redirect_to_login(&self) {
        if self.navigator.current_location() != self.login_path {
            self.navigator.navigate(&self.login_path);
        }
    }

    /// Claims the renewal slot or queues behind the current holder
    ///
    /// The flag check and set happen under one lock acquisition, with no
    /// suspension point in between.
    pub fn begin_renewal(&self) -> RenewalTicket<'_> {
        let epoch = self.credentials_epoch();
        let mut state = self.renewal.lock().unwrap_or_else(PoisonError::into_inner);
        if state.is_renewing {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            debug!("Renewal in flight, {} request(s) waiting", state.waiters.len());
            RenewalTicket::Waiter(rx)
        } else {
            state.is_renewing = true;
            RenewalTicket::Leader(RenewalGuard {
                session: self,
                token: None,
                epoch,
            })
        }
    }

    /// True while a renewal is outstanding
    pub fn is_renewing(&self) -> bool {
        self.renewal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_renewing
    }

    /// Number of requests queued behind the outstanding renewal
    pub fn pending_waiters(&self) -> usize {
        self.renewal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .waiters
            .len()
    }

    fn settle_renewal(&self, outcome: RenewalOutcome) {
        let waiters = {
            let mut state = self.renewal.lock().unwrap_or_else(PoisonError::into_inner);
            state.is_renewing = false;
            mem::take(&mut state.waiters)
        };

        debug!(
            "Renewal settled ({}), releasing {} waiter(s)",
            if outcome.is_some() { "ok" } else { "failed" },
            waiters.len()
        );

        for waiter in waiters {
            // A waiter whose request was dropped has nothing left to replay
            let _ = waiter.send(outcome.clone());
        }
    }
}
