use crate::errors::AppError;
use crate::models::{
    AccountProfile, AccountRequest, AccountsResponse, Quote, SessionUpdate, SessionView,
    ValidateLinkRequest,
};
use crate::quotes::quote_for;
use crate::state::AppState;
use crate::ui::render_index;
use crate::validation::{validate_link, LinkValidation};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    let quote = quote_for(Local::now().date_naive());
    Html(render_index(&session.report_date, &quote, state.include_comments))
}

pub async fn list_accounts(State(state): State<AppState>) -> Json<AccountsResponse> {
    let accounts = state.accounts.lock().await;
    Json(AccountsResponse {
        accounts: accounts.accounts().to_vec(),
        active_id: accounts.active_id().map(str::to_string),
    })
}

pub async fn add_account(
    State(state): State<AppState>,
    Json(payload): Json<AccountRequest>,
) -> Result<(StatusCode, Json<AccountProfile>), AppError> {
    let mut accounts = state.accounts.lock().await;
    let account = accounts.add(&payload.handler, &payload.link).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn edit_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AccountRequest>,
) -> Result<Json<AccountProfile>, AppError> {
    let mut accounts = state.accounts.lock().await;
    let account = accounts.edit(&id, &payload.handler, &payload.link).await?;
    Ok(Json(account))
}

pub async fn select_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AccountProfile>, AppError> {
    let mut accounts = state.accounts.lock().await;
    Ok(Json(accounts.select(&id)?))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut accounts = state.accounts.lock().await;
    accounts.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn check_link(Json(payload): Json<ValidateLinkRequest>) -> Json<LinkValidation> {
    Json(validate_link(&payload.link))
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(session.view(state.include_comments))
}

pub async fn update_session(
    State(state): State<AppState>,
    Json(payload): Json<SessionUpdate>,
) -> Json<SessionView> {
    let mut session = state.session.lock().await;
    session.update(payload);
    Json(session.view(state.include_comments))
}

pub async fn get_report(State(state): State<AppState>) -> String {
    let accounts = state.accounts.lock().await;
    let session = state.session.lock().await;
    session.report(accounts.active(), state.include_comments)
}

pub async fn get_quote() -> Json<Quote> {
    Json(quote_for(Local::now().date_naive()))
}
