//! Endpoint tests against an in-memory store.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use regdesk_model::{FieldKind, RemoteSchema};
use regdesk_server::{AppState, build_router};
use regdesk_submit::encode::PropertyValue;
use regdesk_submit::{Result, SchemaStore, SubmitError};

struct FakeStore {
    schema: RemoteSchema,
    created: Mutex<usize>,
    fail_create: Option<(u16, &'static str)>,
}

impl FakeStore {
    fn new(fields: Vec<(&str, FieldKind)>) -> Self {
        Self {
            schema: RemoteSchema::from_fields(
                fields.into_iter().map(|(name, kind)| (name.to_string(), kind)),
            ),
            created: Mutex::new(0),
            fail_create: None,
        }
    }
}

#[async_trait]
impl SchemaStore for FakeStore {
    async fn fetch_schema(&self) -> Result<RemoteSchema> {
        Ok(self.schema.clone())
    }

    async fn create_record(
        &self,
        _properties: &BTreeMap<String, PropertyValue>,
    ) -> Result<String> {
        if let Some((status, message)) = self.fail_create {
            return Err(SubmitError::Remote {
                status,
                message: message.to_string(),
            });
        }
        let mut created = self.created.lock().expect("lock");
        *created += 1;
        Ok(format!("record-{created}"))
    }
}

fn app_with(store: FakeStore) -> (Router, Arc<FakeStore>) {
    let store = Arc::new(store);
    let state = AppState::new(store.clone() as Arc<dyn SchemaStore>);
    (build_router(state), store)
}

fn default_schema() -> Vec<(&'static str, FieldKind)> {
    vec![
        ("Name", FieldKind::Title),
        ("University Name", FieldKind::RichText),
        ("Team Leader's UID", FieldKind::Number),
        ("Team Leaders' Phone No.", FieldKind::PhoneNumber),
    ]
}

fn submission_body() -> Value {
    json!({
        "teamName": "Night Owls",
        "universityName": "IIT Delhi",
        "teamLeaderUID": "5111111111",
        "teamLeaderPhone": "9876543210"
    })
}

async fn post_submit(app: Router, body: &Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::post("/api/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body())
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).expect("json body");
    (status, json)
}

#[tokio::test]
async fn valid_submission_answers_with_the_record_id() {
    let (app, _) = app_with(FakeStore::new(default_schema()));
    let (status, body) = post_submit(app, &submission_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Registration submitted successfully!");
    assert_eq!(body["pageId"], "record-1");
}

#[tokio::test]
async fn missing_configuration_is_a_500_without_detail() {
    let app = build_router(AppState::unconfigured());
    let (status, body) = post_submit(app, &submission_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Server configuration error");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn store_rejection_surfaces_its_detail() {
    let store = FakeStore {
        fail_create: Some((400, "body failed validation")),
        ..FakeStore::new(default_schema())
    };
    let (app, _) = app_with(store);
    let (status, body) = post_submit(app, &submission_body()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to submit registration");
    assert_eq!(
        body["details"],
        "store rejected the request (400): body failed validation"
    );
}

#[tokio::test]
async fn unresolvable_fields_do_not_fail_the_request() {
    // Schema has only a title; everything else is dropped.
    let (app, _) = app_with(FakeStore::new(vec![("Name", FieldKind::Title)]));
    let (status, body) = post_submit(app, &submission_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn resubmission_creates_a_second_record() {
    let (app, store) = app_with(FakeStore::new(default_schema()));
    let (_, first) = post_submit(app.clone(), &submission_body()).await;
    let (_, second) = post_submit(app, &submission_body()).await;

    assert_eq!(first["pageId"], "record-1");
    assert_eq!(second["pageId"], "record-2");
    assert_eq!(*store.created.lock().expect("lock"), 2);
}

#[tokio::test]
async fn health_answers_ok() {
    let (app, _) = app_with(FakeStore::new(default_schema()));
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
