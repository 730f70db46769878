use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tither_core::errors::{DatabaseError, Error as CoreError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::InvalidAmount(_)
        | CoreError::InvalidConfiguration(_)
        | CoreError::Validation(_)
        | CoreError::Database(DatabaseError::ForeignKeyViolation(_)) => StatusCode::BAD_REQUEST,
        CoreError::NotFound(_)
        | CoreError::UnknownOrganization(_)
        | CoreError::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
        CoreError::ConstraintViolation(_)
        | CoreError::Database(DatabaseError::UniqueViolation(_)) => StatusCode::CONFLICT,
        CoreError::Database(_) | CoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(e) => core_status(e),
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use tither_core::errors::ValidationError;

    fn status_of(err: CoreError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn core_errors_map_to_http_statuses() {
        assert_eq!(
            status_of(CoreError::InvalidAmount("0".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::InvalidConfiguration("roundTo".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::Validation(ValidationError::MissingField(
                "name".into()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::Database(DatabaseError::ForeignKeyViolation(
                "donations.fund_id".into()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(CoreError::UnknownOrganization("org".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::NotFound("Fund".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::Database(DatabaseError::UniqueViolation(
                "slug".into()
            ))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(CoreError::ConstraintViolation("slug".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(CoreError::Database(DatabaseError::QueryFailed(
                "boom".into()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
