use crate::accounts::AccountStore;
use crate::session::Session;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<Mutex<AccountStore>>,
    pub session: Arc<Mutex<Session>>,
    pub include_comments: bool,
}

impl AppState {
    pub fn new(accounts: AccountStore, session: Session, include_comments: bool) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
            session: Arc::new(Mutex::new(session)),
            include_comments,
        }
    }
}
