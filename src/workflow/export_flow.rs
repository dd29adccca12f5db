//! 导出流程 - 流程层
//!
//! 从会话中取最近一次成功的评分，交给报告服务生成 PDF

use chrono::Local;
use std::path::PathBuf;
use tracing::warn;

use crate::error::{AppError, AppResult};
use crate::services::ReportService;
use crate::workflow::session::ScoreSession;

pub struct ExportFlow {
    report_service: ReportService,
}

impl ExportFlow {
    pub fn new(report_service: ReportService) -> Self {
        Self { report_service }
    }

    /// 导出报告
    ///
    /// 会话中没有成功的评分时返回 `AppError::NoScoreResult`，不生成文件
    pub async fn run(&self, session: &ScoreSession) -> AppResult<PathBuf> {
        let Some(scored) = session.last() else {
            warn!("⚠️ 尚无评分结果，跳过导出");
            return Err(AppError::NoScoreResult);
        };

        self.report_service
            .export(&scored.transcript, &scored.result, Local::now())
            .await
    }
}
