use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Method, Request, StatusCode, header};
use parking_lot::Mutex;
use serde_json::{Value, json};
use shared::models::{EmployeeRequest, EmployeeResponse, EmployeeUpdate};
use tower::ServiceExt;

use crate::api::build_app;
use crate::core::{Config, ServerState};
use crate::services::EmployeeService;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    GetAll,
    GetById(i64),
    Create(EmployeeRequest),
    Update(i64, EmployeeUpdate),
    Delete(i64),
}

/// Scripted service that records every call it receives
#[derive(Default)]
struct MockEmployeeService {
    employees: Vec<EmployeeResponse>,
    created: Option<EmployeeResponse>,
    updated: Option<EmployeeResponse>,
    calls: Mutex<Vec<Call>>,
}

impl MockEmployeeService {
    fn with_employees(employees: Vec<EmployeeResponse>) -> Self {
        Self {
            employees,
            ..Default::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl EmployeeService for MockEmployeeService {
    async fn get_all_employees(&self) -> AppResult<Vec<EmployeeResponse>> {
        self.record(Call::GetAll);
        Ok(self.employees.clone())
    }

    async fn get_employee_by_id(&self, id: i64) -> AppResult<EmployeeResponse> {
        self.record(Call::GetById(id));
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::employee_not_found(id))
    }

    async fn create_employee(&self, request: EmployeeRequest) -> AppResult<EmployeeResponse> {
        self.record(Call::Create(request));
        self.created
            .clone()
            .ok_or_else(|| AppError::internal("create not scripted"))
    }

    async fn update_employee(
        &self,
        id: i64,
        update: EmployeeUpdate,
    ) -> AppResult<EmployeeResponse> {
        self.record(Call::Update(id, update));
        match &self.updated {
            Some(employee) if employee.id == id => Ok(employee.clone()),
            _ => Err(AppError::employee_not_found(id)),
        }
    }

    async fn delete_employee(&self, id: i64) -> AppResult<()> {
        self.record(Call::Delete(id));
        Ok(())
    }
}

fn app(service: Arc<MockEmployeeService>) -> Router {
    build_app(ServerState::new(Config::default(), service))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

fn sanjar_pair() -> Vec<EmployeeResponse> {
    vec![
        EmployeeResponse::new(1, "Sanjar", "QA", 1000),
        EmployeeResponse::new(2, "Sanjar", "Dev", 2000),
    ]
}

// ========== GET /api/employees ==========

#[tokio::test]
async fn test_list_returns_all_employees_in_order() {
    let service = Arc::new(MockEmployeeService::with_employees(sanjar_pair()));

    let (status, body) = send(app(service.clone()), Method::GET, "/api/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    let json = parse(&body);
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["name"], "Sanjar");
    assert_eq!(json[1]["position"], "Dev");
    assert_eq!(json[0]["created_at"], Value::Null);
    assert_eq!(json[1]["updated_at"], Value::Null);
}

#[tokio::test]
async fn test_list_calls_service_once() {
    let service = Arc::new(MockEmployeeService::default());

    let (status, body) = send(app(service.clone()), Method::GET, "/api/employees", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body), json!([]));
    assert_eq!(service.calls(), vec![Call::GetAll]);
}

#[tokio::test]
async fn test_list_body_contains_employee_values() {
    let service = Arc::new(MockEmployeeService::with_employees(vec![
        EmployeeResponse::new(1, "Sanjar", "QA", 1000),
    ]));

    let (_, body) = send(app(service), Method::GET, "/api/employees", None).await;

    assert!(body.contains("Sanjar"));
    assert!(body.contains("QA"));
}

// ========== GET /api/employees/{id} ==========

#[tokio::test]
async fn test_get_by_id_returns_employee() {
    let service = Arc::new(MockEmployeeService::with_employees(sanjar_pair()));

    let (status, body) = send(app(service.clone()), Method::GET, "/api/employees/1", None).await;

    assert_eq!(status, StatusCode::OK);
    let json = parse(&body);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Sanjar");
    assert_eq!(json["position"], "QA");
    assert_eq!(json["salary"], 1000);
    assert_eq!(service.calls(), vec![Call::GetById(1)]);
}

#[tokio::test]
async fn test_get_by_id_missing_returns_404() {
    let service = Arc::new(MockEmployeeService::default());

    let (status, body) = send(app(service.clone()), Method::GET, "/api/employees/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json = parse(&body);
    assert_eq!(json["code"], 8001);
    assert_eq!(json["message"], "Employee 99 not found");
    assert_eq!(json["details"]["id"], 99);
    assert_eq!(service.calls(), vec![Call::GetById(99)]);
}

#[tokio::test]
async fn test_get_by_id_is_repeatable() {
    let service = Arc::new(MockEmployeeService::with_employees(sanjar_pair()));

    let first = send(app(service.clone()), Method::GET, "/api/employees/2", None).await;
    let second = send(app(service.clone()), Method::GET, "/api/employees/2", None).await;

    assert_eq!(first, second);
    assert_eq!(service.calls().len(), 2);
}

#[tokio::test]
async fn test_non_integer_id_is_rejected_before_service() {
    let service = Arc::new(MockEmployeeService::default());

    let (status, body) = send(app(service.clone()), Method::GET, "/api/employees/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = parse(&body);
    assert_eq!(json["code"], 5);
    assert_eq!(json["message"], "Invalid ID: abc");

    let (status, _) = send(app(service.clone()), Method::DELETE, "/api/employees/1.5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_signed_or_padded_id_is_rejected() {
    let service = Arc::new(MockEmployeeService::with_employees(sanjar_pair()));

    for uri in ["/api/employees/+1", "/api/employees/%201", "/api/employees/1e0"] {
        let (status, body) = send(app(service.clone()), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(parse(&body)["code"], 5);
    }
    assert!(service.calls().is_empty());
}

// ========== POST /api/employees ==========

#[tokio::test]
async fn test_create_returns_created_employee() {
    let service = Arc::new(MockEmployeeService {
        created: Some(EmployeeResponse::new(1, "John", "QA", 1500)),
        ..Default::default()
    });

    let (status, body) = send(
        app(service.clone()),
        Method::POST,
        "/api/employees",
        Some(r#"{"name": "John", "position": "QA", "salary": 1500}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = parse(&body);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "John");
    assert_eq!(
        service.calls(),
        vec![Call::Create(EmployeeRequest {
            name: "John".to_string(),
            position: "QA".to_string(),
            salary: Some(1500),
        })]
    );
}

#[tokio::test]
async fn test_create_with_empty_fields_returns_400() {
    let service = Arc::new(MockEmployeeService::default());

    let (status, body) = send(
        app(service.clone()),
        Method::POST,
        "/api/employees",
        Some(r#"{"name": "", "position": ""}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["code"], 2);
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_create_with_missing_or_blank_position_returns_400() {
    let service = Arc::new(MockEmployeeService::default());

    for body in [
        r#"{"name": "John"}"#,
        r#"{"name": "John", "position": "   "}"#,
        r#"{"name": "John", "position": "QA", "salary": -5}"#,
    ] {
        let (status, _) = send(app(service.clone()), Method::POST, "/api/employees", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
    }
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_400() {
    let service = Arc::new(MockEmployeeService::default());

    let (status, body) = send(
        app(service.clone()),
        Method::POST,
        "/api/employees",
        Some(r#"{"name": "John", "position": "QA", "salary": 1000L}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse(&body)["code"], 2);
    assert!(service.calls().is_empty());
}

// ========== PUT /api/employees/{id} ==========

#[tokio::test]
async fn test_update_returns_service_result() {
    let service = Arc::new(MockEmployeeService {
        updated: Some(EmployeeResponse::new(1, "Sanjar v2", "Dev v2", 1000)),
        ..Default::default()
    });

    let (status, body) = send(
        app(service.clone()),
        Method::PUT,
        "/api/employees/1",
        Some(r#"{"name": "Sanjar v2", "position": "Dev v2", "salary": 1000}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json = parse(&body);
    assert_eq!(json["name"], "Sanjar v2");
    assert_eq!(json["position"], "Dev v2");
    assert_eq!(
        service.calls(),
        vec![Call::Update(
            1,
            EmployeeUpdate {
                name: Some("Sanjar v2".to_string()),
                position: Some("Dev v2".to_string()),
                salary: Some(1000),
            }
        )]
    );
}

#[tokio::test]
async fn test_update_missing_returns_404() {
    let service = Arc::new(MockEmployeeService::default());

    let (status, body) = send(
        app(service.clone()),
        Method::PUT,
        "/api/employees/99",
        Some(r#"{"name": "Test"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["code"], 8001);
    assert_eq!(
        service.calls(),
        vec![Call::Update(
            99,
            EmployeeUpdate {
                name: Some("Test".to_string()),
                ..Default::default()
            }
        )]
    );
}

#[tokio::test]
async fn test_update_with_blank_field_returns_400() {
    let service = Arc::new(MockEmployeeService::default());

    let (status, body) = send(
        app(service.clone()),
        Method::PUT,
        "/api/employees/1",
        Some(r#"{"name": "  "}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json = parse(&body);
    assert_eq!(json["code"], 2);
    assert_eq!(json["details"]["field"], "name");
    assert!(service.calls().is_empty());
}

// ========== DELETE /api/employees/{id} ==========

#[tokio::test]
async fn test_delete_returns_200_and_calls_service_once() {
    let service = Arc::new(MockEmployeeService::default());

    let (status, body) = send(app(service.clone()), Method::DELETE, "/api/employees/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(service.calls(), vec![Call::Delete(1)]);
}

#[tokio::test]
async fn test_delete_unknown_id_still_returns_200() {
    let service = Arc::new(MockEmployeeService::with_employees(sanjar_pair()));

    let (status, _) = send(app(service.clone()), Method::DELETE, "/api/employees/404", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(service.calls(), vec![Call::Delete(404)]);
}
