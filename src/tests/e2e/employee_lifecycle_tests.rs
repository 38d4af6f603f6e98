use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::test_state;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    };
    app.clone().oneshot(request.unwrap()).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn creates_lists_updates_and_deletes_an_employee() {
    let app = router(test_state());

    let response = send(
        &app,
        "POST",
        "/employee",
        Some(json!({"name": "Ada", "salary": 1000, "age": 30})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response).await;
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["salary"], 1000.0);
    assert_eq!(created["age"], 30.0);
    let id = created["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let response = send(&app, "GET", "/employee", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([created]));

    let response = send(
        &app,
        "PUT",
        &format!("/employee/{id}"),
        Some(json!({"name": "Ada", "salary": 1200, "age": 31})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["salary"], 1200.0);
    assert_eq!(updated["id"], id.as_str());

    let response = send(&app, "GET", "/employee", None).await;
    assert_eq!(
        json_body(response).await,
        json!([{"id": id, "name": "Ada", "salary": 1200.0, "age": 31.0}])
    );

    let response = send(&app, "DELETE", &format!("/employee/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!("record deleted"));

    let response = send(&app, "DELETE", &format!("/employee/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&app, "GET", "/employee", None).await;
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test]
async fn keeps_every_created_employee_under_its_own_id() {
    let app = router(test_state());
    let mut ids = Vec::new();
    for (name, age) in [("Ada", 30), ("Grace", 52), ("Barbara", 41)] {
        let response = send(
            &app,
            "POST",
            "/employee",
            Some(json!({"name": name, "salary": 10, "age": age})),
        )
        .await;
        ids.push(json_body(response).await["id"].as_str().unwrap().to_string());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    let listed = json_body(send(&app, "GET", "/employee", None).await).await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Barbara"]);
}
