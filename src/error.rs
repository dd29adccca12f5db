use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 评分服务调用错误
    #[error("评分服务错误: {0}")]
    Score(#[from] ScoreError),
    /// 还没有成功的评分结果，无法导出报告
    #[error("尚无评分结果，请先提交文本")]
    NoScoreResult,
    /// 报告生成错误
    #[error("报告错误: {0}")]
    Report(#[from] ReportError),
    /// 文件操作错误
    #[error("文件错误 ({}): {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 评分服务错误
///
/// 每种失败原因单独一个变体，界面上仍然只显示一条通用提示
#[derive(Debug, Error)]
pub enum ScoreError {
    /// 无法连接（网络不可达、连接被拒绝等）
    #[error("无法连接评分服务 ({endpoint}): {source}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 请求超时
    #[error("评分服务请求超时 ({endpoint})")]
    Timeout { endpoint: String },
    /// 服务返回非 2xx 状态
    #[error("评分服务返回错误状态 ({endpoint}): status={status}, message={message:?}")]
    BadStatus {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// 响应体不是合法的评分结果
    #[error("评分响应解析失败 ({endpoint}): {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ScoreError {
    /// 请求的端点
    pub fn endpoint(&self) -> &str {
        match self {
            ScoreError::Unreachable { endpoint, .. }
            | ScoreError::Timeout { endpoint }
            | ScoreError::BadStatus { endpoint, .. }
            | ScoreError::Decode { endpoint, .. } => endpoint,
        }
    }

    /// 从 reqwest 错误分类：超时单独归类，其余视为连接失败
    pub(crate) fn from_transport(endpoint: impl Into<String>, err: reqwest::Error) -> Self {
        let endpoint = endpoint.into();
        if err.is_timeout() {
            ScoreError::Timeout { endpoint }
        } else {
            ScoreError::Unreachable {
                endpoint,
                source: err,
            }
        }
    }
}

/// 报告生成错误
#[derive(Debug, Error)]
pub enum ReportError {
    /// PDF 编码失败
    #[error("PDF 生成失败: {0}")]
    Pdf(#[from] lopdf::Error),
    /// PDF 写入缓冲区失败
    #[error("PDF 写入失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件错误
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
