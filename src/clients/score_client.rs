/// 评分服务客户端
///
/// 封装所有与评分服务相关的 HTTP 调用，响应在这里完成类型化解码
use crate::config::Config;
use crate::error::ScoreError;
use crate::models::{ErrorBody, HealthStatus, ScoreRequest, ScoreResult, Transcript};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// 评分服务客户端
#[derive(Debug, Clone)]
pub struct ScoreClient {
    http: Client,
    score_endpoint: String,
    health_endpoint: String,
}

impl ScoreClient {
    /// 创建新的评分客户端
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            score_endpoint: config.score_endpoint(),
            health_endpoint: config.health_endpoint(),
        })
    }

    pub fn score_endpoint(&self) -> &str {
        &self.score_endpoint
    }

    /// 提交文本并获取评分结果
    ///
    /// 空文本同样会被提交，由服务端决定如何处理
    pub async fn score(&self, transcript: &Transcript) -> Result<ScoreResult, ScoreError> {
        debug!(
            "提交评分请求: {} ({} 字符)",
            self.score_endpoint,
            transcript.char_count()
        );

        let response = self
            .http
            .post(&self.score_endpoint)
            .json(&ScoreRequest {
                transcript: transcript.as_str(),
            })
            .send()
            .await
            .map_err(|e| ScoreError::from_transport(&self.score_endpoint, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ScoreError::from_transport(&self.score_endpoint, e))?;

        debug!("评分服务响应: status={}, {} 字节", status, body.len());

        if !status.is_success() {
            return Err(ScoreError::BadStatus {
                endpoint: self.score_endpoint.clone(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        decode(&self.score_endpoint, &body)
    }

    /// 健康检查：GET 服务根路径
    pub async fn health(&self) -> Result<HealthStatus, ScoreError> {
        let response = self
            .http
            .get(&self.health_endpoint)
            .send()
            .await
            .map_err(|e| ScoreError::from_transport(&self.health_endpoint, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ScoreError::from_transport(&self.health_endpoint, e))?;

        if !status.is_success() {
            return Err(ScoreError::BadStatus {
                endpoint: self.health_endpoint.clone(),
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        decode(&self.health_endpoint, &body)
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T, ScoreError> {
    serde_json::from_slice(body).map_err(|source| ScoreError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// 提取错误响应里的 `error` 字段；不是 JSON 时退回原始文本
fn error_message(body: &[u8]) -> Option<String> {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return Some(parsed.error);
    }
    let text = String::from_utf8_lossy(body).trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
