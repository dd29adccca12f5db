//! 评分服务的请求 / 响应结构

use serde::{Deserialize, Serialize};

/// 提交给评分服务的请求体
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRequest<'a> {
    pub transcript: &'a str,
}

/// 评分服务返回的整体结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub final_score: f64,
    /// 按服务端返回顺序保存，即显示顺序
    pub details: Vec<ScoreDetail>,
}

/// 单个评分项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub metric: String,
    pub score: f64,
    pub weight: f64,
    pub feedback: String,
    /// 评分标准分类（如 "Content & Structure"），旧版服务不返回
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criterion: Option<String>,
}

/// 服务端非 2xx 时的错误体，如 `{"error": "Transcript is empty"}`
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 健康检查响应
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

impl ScoreResult {
    /// 各项 score × weight 之和，与服务端的总分算法一致
    pub fn weighted_sum(&self) -> f64 {
        self.details.iter().map(|d| d.score * d.weight).sum()
    }
}
