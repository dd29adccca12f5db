#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use transcript_score::Config;

/// 记录收到的请求体
#[derive(Clone, Default)]
pub struct Recorded(pub Arc<Mutex<Vec<Value>>>);

impl Recorded {
    pub fn bodies(&self) -> Vec<Value> {
        self.0.lock().unwrap().clone()
    }
}

/// 在随机端口启动假的评分服务，返回 base url
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// 返回固定结果的评分服务
pub fn scoring_backend(response: Value, recorded: Recorded) -> Router {
    Router::new()
        .route(
            "/score",
            post(
                move |State(rec): State<Recorded>, Json(body): Json<Value>| {
                    let response = response.clone();
                    async move {
                        rec.0.lock().unwrap().push(body);
                        Json(response)
                    }
                },
            ),
        )
        .route(
            "/",
            get(|| async { Json(json!({"message": "Backend is running!"})) }),
        )
        .with_state(recorded)
}

/// 按状态码和原始文本返回的评分服务
pub fn failing_backend(status: StatusCode, body: &'static str) -> Router {
    Router::new().route("/score", post(move || async move { (status, body).into_response() }))
}

/// 响应前先等待的评分服务
pub fn slow_backend(delay: Duration) -> Router {
    Router::new().route(
        "/score",
        post(move || async move {
            tokio::time::sleep(delay).await;
            Json(hello_world_response())
        }),
    )
}

pub fn hello_world_response() -> Value {
    json!({
        "final_score": 8.5,
        "details": [
            {"metric": "Clarity", "score": 9.0, "weight": 0.5, "feedback": "Clear."}
        ]
    })
}

pub fn config_for(base_url: &str, output_dir: &Path) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        output_dir: output_dir.to_path_buf(),
        ..Config::default()
    }
}
