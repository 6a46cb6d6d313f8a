use axum::{Json, http::StatusCode, response::IntoResponse};
use catalog::CatalogError;
use serde::Serialize;

pub use server::{run, run_with_listener, spawn_with_listener};

mod activities;
mod server;
mod sub_activities;
mod transaction_types;

pub mod types {
    pub mod activity {
        pub use api_types::activity::{
            ActivityDetail, ActivityNew, ActivityUpdate, ActivityView,
        };
    }

    pub mod sub_activity {
        pub use api_types::sub_activity::{
            SubActivityDetail, SubActivityNew, SubActivitySummary, SubActivityUpdate,
            SubActivityView,
        };
    }

    pub mod transaction_type {
        pub use api_types::transaction_type::{
            TransactionTypeNew, TransactionTypeRef, TransactionTypeUpdate, TransactionTypeView,
        };
    }
}

pub struct ServerError(CatalogError);

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_catalog_error(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::InvalidId(_) | CatalogError::Validation(_) | CatalogError::Conflict(_) => {
            StatusCode::BAD_REQUEST
        }
        CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_catalog_error(err: CatalogError) -> String {
    match err {
        CatalogError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = status_for_catalog_error(&self.0);
        let error = message_for_catalog_error(self.0);

        (status, Json(Error { error })).into_response()
    }
}

impl From<CatalogError> for ServerError {
    fn from(value: CatalogError) -> Self {
        Self(value)
    }
}
