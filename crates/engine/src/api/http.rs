//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use staffreg_domain::{StaffDraft, StaffId, StaffRecord};

use crate::app::App;
use crate::use_cases::StaffError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/staff", get(list_staff).post(create_staff))
        .route(
            "/staff/{id}",
            get(get_staff).put(update_staff).delete(delete_staff),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Staff
// =============================================================================

#[derive(Debug, Serialize)]
struct MessageBody {
    message: &'static str,
}

async fn list_staff(State(app): State<Arc<App>>) -> Result<Json<Vec<StaffRecord>>, ApiError> {
    let staff = app.use_cases.staff.list().await?;
    Ok(Json(staff))
}

async fn create_staff(
    State(app): State<Arc<App>>,
    payload: Result<Json<StaffDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<StaffRecord>), ApiError> {
    let Json(draft) = payload?;
    let created = app.use_cases.staff.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_staff(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<StaffRecord>, ApiError> {
    let id = StaffId::from(id);
    let staff = app.use_cases.staff.get(&id).await?;
    Ok(Json(staff))
}

async fn update_staff(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    payload: Result<Json<StaffDraft>, JsonRejection>,
) -> Result<Json<StaffRecord>, ApiError> {
    let id = StaffId::from(id);
    let draft = match payload {
        Ok(Json(draft)) => draft,
        Err(rejection) => {
            // An unknown id is reported as missing before the body is judged.
            app.use_cases.staff.get(&id).await?;
            return Err(rejection.into());
        }
    };
    let updated = app.use_cases.staff.update(id, draft).await?;
    Ok(Json(updated))
}

async fn delete_staff(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = StaffId::from(id);
    app.use_cases.staff.delete(&id).await?;
    Ok(Json(MessageBody {
        message: "Staff deleted successfully",
    }))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Staff not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(cause) => {
                tracing::error!(error = %cause, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<StaffError> for ApiError {
    fn from(e: StaffError) -> Self {
        match e {
            StaffError::NotFound(_) => ApiError::NotFound,
            StaffError::Repo(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::stores::InMemoryStaffRegistry;

    fn seeded_router() -> Router {
        let registry = Arc::new(InMemoryStaffRegistry::with_records(
            staffreg_domain::example_staff(),
        ));
        routes().with_state(Arc::new(App::new(registry)))
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, body)
    }

    fn not_found_body() -> Value {
        json!({"error": "Staff not found"})
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let router = seeded_router();
        let (status, body) = send(&router, empty_request(Method::GET, "/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::String("OK".to_string()));
    }

    #[tokio::test]
    async fn list_returns_seeded_roster_in_order() {
        let router = seeded_router();
        let (status, body) = send(&router, empty_request(Method::GET, "/staff")).await;
        assert_eq!(status, StatusCode::OK);

        let records = body.as_array().unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(
            records[0],
            json!({
                "id": "1",
                "name": "John Doe",
                "position": "Sales Associate",
                "department": "Sales",
                "email": "john.doe@bestbuy.com",
                "phone": "123-456-7890"
            })
        );
    }

    #[tokio::test]
    async fn full_lifecycle_of_a_created_record() {
        let router = seeded_router();

        let (status, created) = send(
            &router,
            json_request(Method::POST, "/staff", json!({"name": "Bob"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let new_id = created["id"].as_str().unwrap().to_string();
        assert!(!new_id.is_empty());
        assert!(!["1", "2", "3"].contains(&new_id.as_str()));
        assert_eq!(created["name"], "Bob");

        let uri = format!("/staff/{new_id}");
        let (status, fetched) = send(&router, empty_request(Method::GET, &uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = send(
            &router,
            json_request(Method::PUT, &uri, json!({"name": "Bobby"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, json!({"id": new_id, "name": "Bobby"}));

        let (status, deleted) = send(&router, empty_request(Method::DELETE, &uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(deleted, json!({"message": "Staff deleted successfully"}));

        let (status, body) = send(&router, empty_request(Method::GET, &uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, not_found_body());
    }

    #[tokio::test]
    async fn create_discards_client_supplied_id() {
        let router = seeded_router();
        let (status, created) = send(
            &router,
            json_request(Method::POST, "/staff", json!({"id": "1", "name": "Mallory"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_ne!(created["id"], "1");

        let (_, original) = send(&router, empty_request(Method::GET, "/staff/1")).await;
        assert_eq!(original["name"], "John Doe");

        let (_, all) = send(&router, empty_request(Method::GET, "/staff")).await;
        assert_eq!(all.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn update_forces_path_id_and_drops_omitted_fields() {
        let router = seeded_router();
        let (status, updated) = send(
            &router,
            json_request(
                Method::PUT,
                "/staff/2",
                json!({"id": "999", "name": "Jane Doe", "department": "Sales"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            updated,
            json!({"id": "2", "name": "Jane Doe", "department": "Sales"})
        );

        let (_, fetched) = send(&router, empty_request(Method::GET, "/staff/2")).await;
        assert_eq!(fetched, updated);

        let (status, _) = send(&router, empty_request(Method::GET, "/staff/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn id_addressed_operations_on_unknown_id_return_not_found() {
        let router = seeded_router();

        let (status, body) = send(&router, empty_request(Method::GET, "/staff/unknown")).await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found_body()));

        let (status, body) = send(
            &router,
            json_request(Method::PUT, "/staff/unknown", json!({"name": "X"})),
        )
        .await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found_body()));

        let (status, body) =
            send(&router, empty_request(Method::DELETE, "/staff/unknown")).await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found_body()));

        let (_, all) = send(&router, empty_request(Method::GET, "/staff")).await;
        assert_eq!(all.as_array().unwrap().len(), 3);
    }

    fn raw_json_request(method: Method, uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn malformed_payloads_are_bad_requests_with_json_error() {
        let router = seeded_router();

        let (status, body) =
            send(&router, raw_json_request(Method::POST, "/staff", "{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) =
            send(&router, raw_json_request(Method::PUT, "/staff/1", "{bad")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = send(
            &router,
            json_request(Method::PUT, "/staff/1", json!(["not", "an", "object"])),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (status, body) = send(&router, empty_request(Method::POST, "/staff")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let (_, john) = send(&router, empty_request(Method::GET, "/staff/1")).await;
        assert_eq!(john["name"], "John Doe");
    }

    #[tokio::test]
    async fn update_of_unknown_id_with_malformed_body_is_not_found() {
        let router = seeded_router();
        let (status, body) =
            send(&router, raw_json_request(Method::PUT, "/staff/nope", "{bad")).await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found_body()));

        let (status, body) = send(&router, empty_request(Method::PUT, "/staff/nope")).await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found_body()));
    }

    #[tokio::test]
    async fn blank_path_ids_are_simply_not_found() {
        let router = seeded_router();

        let (status, body) = send(&router, empty_request(Method::GET, "/staff/%20")).await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found_body()));

        let (status, body) = send(
            &router,
            json_request(Method::PUT, "/staff/%20", json!({"name": "Blank"})),
        )
        .await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found_body()));

        let (status, body) =
            send(&router, empty_request(Method::DELETE, "/staff/%20")).await;
        assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found_body()));
    }

    #[tokio::test]
    async fn payload_values_of_any_type_and_extra_keys_are_echoed() {
        let router = seeded_router();
        let payload = json!({"name": "Dana", "phone": 5551234, "badge": {"level": 2}});

        let (status, created) =
            send(&router, json_request(Method::POST, "/staff", payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["phone"], json!(5551234));
        assert_eq!(created["badge"], json!({"level": 2}));

        let uri = format!("/staff/{}", created["id"].as_str().unwrap());
        let (status, fetched) = send(&router, empty_request(Method::GET, &uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);
    }

    #[test]
    fn repo_failures_map_to_internal_error() {
        let err: ApiError = StaffError::Repo(
            crate::infrastructure::ports::RepoError::constraint("duplicate staff id"),
        )
        .into();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
