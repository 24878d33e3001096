use crate::errors::AccountError;
use crate::models::AccountProfile;
use crate::storage::KeyValueStore;
use crate::validation::validate_link;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, warn};

pub const ACCOUNTS_KEY: &str = "instagram-saved-accounts";

/// Saved Instagram profiles in insertion order, plus the one currently in use.
///
/// Every mutation rewrites the full collection through the key-value port.
pub struct AccountStore {
    backend: Arc<dyn KeyValueStore>,
    accounts: Vec<AccountProfile>,
    active_id: Option<String>,
    last_id: u64,
}

impl AccountStore {
    /// Reads the saved collection. Missing or unreadable data starts an empty list.
    pub async fn load(backend: Arc<dyn KeyValueStore>) -> Self {
        let accounts = match backend.load(ACCOUNTS_KEY).await {
            Ok(Some(bytes)) => match serde_json::from_slice::<Vec<AccountProfile>>(&bytes) {
                Ok(accounts) => accounts,
                Err(err) => {
                    error!("failed to parse saved accounts: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                error!("failed to read saved accounts: {err}");
                Vec::new()
            }
        };

        let last_id = accounts
            .iter()
            .filter_map(|account| account.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let active_id = accounts.first().map(|account| account.id.clone());

        info!(count = accounts.len(), "loaded saved accounts");

        Self {
            backend,
            accounts,
            active_id,
            last_id,
        }
    }

    pub fn accounts(&self) -> &[AccountProfile] {
        &self.accounts
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn active(&self) -> Option<&AccountProfile> {
        let id = self.active_id.as_deref()?;
        self.accounts.iter().find(|account| account.id == id)
    }

    pub async fn add(&mut self, handler: &str, link: &str) -> Result<AccountProfile, AccountError> {
        let handler = check_fields(handler, link)?;

        let account = AccountProfile {
            id: self.next_id(),
            handler,
            link: link.to_string(),
        };
        self.accounts.push(account.clone());
        self.active_id = Some(account.id.clone());
        info!(id = %account.id, handler = %account.handler, "account added");

        self.persist().await?;
        Ok(account)
    }

    pub async fn edit(
        &mut self,
        id: &str,
        handler: &str,
        link: &str,
    ) -> Result<AccountProfile, AccountError> {
        let handler = check_fields(handler, link)?;

        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.id == id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;
        account.handler = handler;
        account.link = link.to_string();
        let updated = account.clone();
        info!(id = %updated.id, handler = %updated.handler, "account updated");

        self.persist().await?;
        Ok(updated)
    }

    pub fn select(&mut self, id: &str) -> Result<AccountProfile, AccountError> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.id == id)
            .cloned()
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;
        self.active_id = Some(account.id.clone());
        Ok(account)
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), AccountError> {
        if self.accounts.len() <= 1 {
            return Err(AccountError::LastAccountProtected);
        }

        let index = self
            .accounts
            .iter()
            .position(|account| account.id == id)
            .ok_or_else(|| AccountError::NotFound(id.to_string()))?;
        let removed = self.accounts.remove(index);

        if self.active_id.as_deref() == Some(removed.id.as_str()) {
            self.active_id = self.accounts.first().map(|account| account.id.clone());
        }
        info!(id = %removed.id, handler = %removed.handler, "account deleted");

        self.persist().await
    }

    async fn persist(&self) -> Result<(), AccountError> {
        let payload = serde_json::to_vec_pretty(&self.accounts)
            .map_err(|err| AccountError::PersistenceUnavailable(err.to_string()))?;

        if let Err(err) = self.backend.save(ACCOUNTS_KEY, &payload).await {
            warn!("accounts kept in memory only: {err}");
            return Err(AccountError::PersistenceUnavailable(err.to_string()));
        }
        Ok(())
    }

    /// Millisecond timestamp, bumped past the last issued id when the clock repeats.
    fn next_id(&mut self) -> String {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        match self.last_id.checked_add(1) {
            Some(next) => {
                self.last_id = now.max(next);
                self.last_id.to_string()
            }
            None => self.free_id(now),
        }
    }

    /// First numeric id from `start` (wrapping) that no saved account uses.
    fn free_id(&self, start: u64) -> String {
        let taken = |candidate: &u64| {
            let candidate = candidate.to_string();
            self.accounts.iter().any(|account| account.id == candidate)
        };
        (start..=u64::MAX)
            .chain(0..start)
            .find(|candidate| !taken(candidate))
            .unwrap_or(start)
            .to_string()
    }
}

/// Returns the handler without surrounding blanks or a leading `@`.
fn check_fields(handler: &str, link: &str) -> Result<String, AccountError> {
    let handler = handler.trim();
    let handler = handler.strip_prefix('@').unwrap_or(handler);
    if handler.is_empty() || link.is_empty() {
        return Err(AccountError::MissingField);
    }

    let validation = validate_link(link);
    if !validation.valid {
        return Err(AccountError::ValidationFailed(validation.message));
    }

    Ok(handler.to_string())
}
