use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("Por favor, completa todos los campos de la cuenta")]
    MissingField,

    #[error("Por favor, corrige el formato del enlace: {0}")]
    ValidationFailed(String),

    #[error("Debes mantener al menos una cuenta")]
    LastAccountProtected,

    #[error("No existe la cuenta {0}")]
    NotFound(String),

    /// The change is kept in memory but could not be written to storage.
    #[error("No se pudieron guardar las cuentas: {0}")]
    PersistenceUnavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        let status = match err {
            AccountError::MissingField => StatusCode::BAD_REQUEST,
            AccountError::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AccountError::LastAccountProtected => StatusCode::CONFLICT,
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::PersistenceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_errors_map_to_distinct_statuses() {
        let cases = [
            (AccountError::MissingField, StatusCode::BAD_REQUEST),
            (
                AccountError::ValidationFailed("x".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AccountError::LastAccountProtected, StatusCode::CONFLICT),
            (AccountError::NotFound("1".into()), StatusCode::NOT_FOUND),
            (
                AccountError::PersistenceUnavailable("disk".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status, status);
        }
    }

    #[test]
    fn validation_message_carries_validator_reason() {
        let err = AppError::from(AccountError::ValidationFailed("demasiado largo".into()));
        assert!(err.message.contains("demasiado largo"));
    }
}
