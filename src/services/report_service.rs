//! 报告服务 - 业务能力层
//!
//! 只负责"生成并保存 PDF 报告"能力，结果从哪里来由流程层决定

use crate::error::{AppError, AppResult};
use crate::infrastructure::PdfWriter;
use crate::models::{ScoreResult, Transcript};
use crate::report::layout_report;
use chrono::{DateTime, Local};
use std::path::PathBuf;
use tracing::{debug, info};

/// 与浏览器 en-US `toLocaleString()` 相同的格式，如 "10/16/2026, 9:30:00 AM"
const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// 报告服务
pub struct ReportService {
    output_path: PathBuf,
    writer: PdfWriter,
}

impl ReportService {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            writer: PdfWriter::new(),
        }
    }

    /// 生成 PDF 字节
    pub fn build(
        &self,
        transcript: &Transcript,
        result: &ScoreResult,
        generated_at: DateTime<Local>,
    ) -> AppResult<Vec<u8>> {
        let timestamp = generated_at.format(TIMESTAMP_FORMAT).to_string();
        let layout = layout_report(transcript, result, &timestamp);
        debug!("报告排版完成: {} 页", layout.page_count());

        Ok(self.writer.render(&layout)?)
    }

    /// 生成并写入文件，返回文件路径
    pub async fn export(
        &self,
        transcript: &Transcript,
        result: &ScoreResult,
        generated_at: DateTime<Local>,
    ) -> AppResult<PathBuf> {
        let bytes = self.build(transcript, result, generated_at)?;

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::file(parent, e))?;
            }
        }
        tokio::fs::write(&self.output_path, &bytes)
            .await
            .map_err(|e| AppError::file(&self.output_path, e))?;

        info!(
            "📄 报告已保存: {} ({} 字节)",
            self.output_path.display(),
            bytes.len()
        );
        Ok(self.output_path.clone())
    }
}
