use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/accounts",
            get(handlers::list_accounts).post(handlers::add_account),
        )
        .route(
            "/api/accounts/:id",
            put(handlers::edit_account).delete(handlers::delete_account),
        )
        .route("/api/accounts/:id/select", post(handlers::select_account))
        .route("/api/validate-link", post(handlers::check_link))
        .route(
            "/api/session",
            get(handlers::get_session).put(handlers::update_session),
        )
        .route("/api/report", get(handlers::get_report))
        .route("/api/quote", get(handlers::get_quote))
        .with_state(state)
}
