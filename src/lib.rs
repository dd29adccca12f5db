//! # Transcript Score
//!
//! 提交自我介绍文本到评分服务，显示评分明细，并导出 PDF 报告
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 字体度量、PDF 编码，只暴露能力
//!
//! ### ② 业务能力层（Clients / Services）
//! - `ScoreClient` - 调用评分服务，类型化解码响应
//! - `render_service` - 评分结果 → 文本 / HTML
//! - `ReportService` - 评分结果 → PDF 文件
//!
//! ### ③ 流程层（Workflow）
//! - `SubmitFlow` - 提交 → 渲染 → 写入会话
//! - `ExportFlow` - 会话 → 报告
//! - `ScoreSession` - 最近一次成功评分
//! - `OutputView` - 界面状态（提交按钮、加载提示、输出、导出按钮）
//!
//! ### ④ 编排层（App）
//! - `app` - 命令行操作到流程的映射

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod report;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, TranscriptSource};
pub use clients::ScoreClient;
pub use config::Config;
pub use error::{AppError, AppResult, ScoreError};
pub use models::{ScoreDetail, ScoreResult, Transcript};
pub use workflow::{ExportFlow, ScoreSession, SubmitFlow};
