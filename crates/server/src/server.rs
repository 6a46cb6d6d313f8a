use axum::{
    Router,
    routing::{get, post},
};
use catalog::Catalog;

use std::sync::Arc;

use crate::{activities, sub_activities, transaction_types};

#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<Catalog>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/api/v1/activities",
            get(activities::list).post(activities::create),
        )
        .route(
            "/api/v1/activities/{id}",
            get(activities::get)
                .put(activities::update)
                .delete(activities::remove),
        )
        .route("/api/v1/sub-activities", post(sub_activities::create))
        .route(
            "/api/v1/sub-activities/{id}",
            get(sub_activities::get)
                .put(sub_activities::update)
                .delete(sub_activities::remove),
        )
        // Kept under the doubled prefix the portal frontend already calls.
        .route(
            "/api/v1/sub-activities/sub-activities/by-activity/{activity_id}",
            get(sub_activities::list_by_activity),
        )
        .route(
            "/api/v1/transaction-types",
            get(transaction_types::list).post(transaction_types::create),
        )
        .route(
            "/api/v1/transaction-types/{id}",
            get(transaction_types::get)
                .put(transaction_types::update)
                .delete(transaction_types::remove),
        )
        .with_state(state)
}

pub async fn run(catalog: Catalog) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:8080").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(catalog, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    catalog: Catalog,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        catalog: Arc::new(catalog),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    catalog: Catalog,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(catalog, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use http_body_util::BodyExt;
    use migration::MigratorTrait;
    use sea_orm::Database;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn test_router() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        router(ServerState {
            catalog: Arc::new(Catalog::new(db)),
        })
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let res = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn activity_payload(act_srl: &str, transaction_type_id: &str) -> Value {
        json!({
            "actSrl": act_srl,
            "activityTransactionType": transaction_type_id,
            "activityNameEn": "Freight",
            "activityNameAr": "شحن",
            "activityCode": "FR-01",
            "portalActivityNameEn": "Freight",
            "portalActivityNameAr": "شحن",
            "isWithItems": true,
            "financeEffect": false,
            "sign": true,
            "isOpsActive": true,
            "isPortalActive": false,
            "isInOrderScreen": true,
            "isActive": true
        })
    }

    async fn create_transaction_type(router: &Router, name: &str) -> String {
        let (status, body) = send(
            router,
            Method::POST,
            "/api/v1/transaction-types",
            Some(json!({ "name": name })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn transaction_type_crud_round_trip() {
        let router = test_router().await;

        let id = create_transaction_type(&router, "  Moving  ").await;

        let (status, body) = send(&router, Method::GET, "/api/v1/transaction-types", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Moving");

        let uri = format!("/api/v1/transaction-types/{id}");
        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], id.as_str());

        let (status, body) =
            send(&router, Method::PUT, &uri, Some(json!({ "name": "Storage" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Storage");

        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Transaction type not found");
    }

    #[tokio::test]
    async fn malformed_ids_return_400() {
        let router = test_router().await;

        for (uri, error) in [
            ("/api/v1/activities/not-an-id", "Invalid activity ID"),
            ("/api/v1/sub-activities/not-an-id", "Invalid sub-activity ID"),
            (
                "/api/v1/transaction-types/not-an-id",
                "Invalid transaction type ID",
            ),
            (
                "/api/v1/sub-activities/sub-activities/by-activity/not-an-id",
                "Invalid activity ID",
            ),
        ] {
            let (status, body) = send(&router, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body["error"], error, "{uri}");
        }
    }

    #[tokio::test]
    async fn activity_create_reports_missing_fields() {
        let router = test_router().await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/activities",
            Some(json!({ "actSrl": "ACT-1" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("activityNameEn"));
        assert!(message.contains("isWithItems"));
        assert!(!message.contains("actSrl"));
    }

    #[tokio::test]
    async fn duplicate_act_srl_is_a_conflict() {
        let router = test_router().await;
        let tt = create_transaction_type(&router, "Moving").await;

        let (status, _) = send(
            &router,
            Method::POST,
            "/api/v1/activities",
            Some(activity_payload("ACT-1", &tt)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/activities",
            Some(activity_payload("ACT-1", &tt)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Activity with this actSrl already exists");

        let (_, body) = send(&router, Method::GET, "/api/v1/activities", None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn activity_delete_cascades_to_sub_activities() {
        let router = test_router().await;
        let tt = create_transaction_type(&router, "Moving").await;

        let (_, activity) = send(
            &router,
            Method::POST,
            "/api/v1/activities",
            Some(activity_payload("ACT-1", &tt)),
        )
        .await;
        let activity_id = activity["id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &router,
            Method::POST,
            "/api/v1/sub-activities",
            Some(json!({
                "transactionType": tt,
                "activity": activity_id,
                "pricingMethod": "perItem",
                "portalItemNameEn": "Boxes",
                "portalItemNameAr": "صناديق",
                "isActive": true
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/api/v1/activities/{activity_id}");
        let (status, body) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subActivities"].as_array().unwrap().len(), 1);

        let (status, _) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let by_activity =
            format!("/api/v1/sub-activities/sub-activities/by-activity/{activity_id}");
        let (status, body) = send(&router, Method::GET, &by_activity, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn by_activity_with_unknown_id_is_empty_not_404() {
        let router = test_router().await;

        let (status, body) = send(
            &router,
            Method::GET,
            "/api/v1/sub-activities/sub-activities/by-activity/0b5cbb4e-13d8-4ab9-9013-96ad8a5a3f71",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn sub_activity_create_with_unknown_activity_fails() {
        let router = test_router().await;
        let tt = create_transaction_type(&router, "Moving").await;

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/v1/sub-activities",
            Some(json!({
                "transactionType": tt,
                "activity": "0b5cbb4e-13d8-4ab9-9013-96ad8a5a3f71",
                "pricingMethod": "manual",
                "portalItemNameEn": "Boxes",
                "portalItemNameAr": "صناديق",
                "isActive": true
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Activity not found");
    }
}
