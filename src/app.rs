//! 应用编排
//!
//! 持有配置、会话和两个流程，把命令行操作映射到"提交"和"导出"

use crate::clients::ScoreClient;
use crate::config::Config;
use crate::models::{load_transcript_file, read_transcript, Transcript};
use crate::services::ReportService;
use crate::utils::logging::log_startup;
use crate::workflow::{ExportFlow, OutputView, ScoreSession, SubmitFlow};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

/// 文本来源
#[derive(Debug, Clone)]
pub enum TranscriptSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

/// 应用主结构
pub struct App {
    config: Config,
    client: ScoreClient,
    submit_flow: SubmitFlow,
    export_flow: ExportFlow,
    session: ScoreSession,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let client = ScoreClient::new(&config).context("无法创建 HTTP 客户端")?;
        let submit_flow = SubmitFlow::new(client.clone());
        let export_flow = ExportFlow::new(ReportService::new(config.report_path()));

        Ok(Self {
            config,
            client,
            submit_flow,
            export_flow,
            session: ScoreSession::new(),
        })
    }

    pub fn session(&self) -> &ScoreSession {
        &self.session
    }

    /// 提交一次，可选导出报告
    pub async fn score_once<V: OutputView>(
        &mut self,
        source: TranscriptSource,
        export_pdf: bool,
        view: &mut V,
    ) -> Result<Option<PathBuf>> {
        let transcript = load_source(source).await?;

        self.submit_flow
            .run(transcript.as_str(), &mut self.session, view)
            .await
            .context("评分失败")?;

        if !export_pdf {
            return Ok(None);
        }
        let path = self.export().await?;
        Ok(Some(path))
    }

    /// 导出最近一次评分结果
    pub async fn export(&self) -> Result<PathBuf> {
        let path = self
            .export_flow
            .run(&self.session)
            .await
            .context("导出报告失败")?;
        Ok(path)
    }

    /// 交互模式
    ///
    /// - 输入多行文本，以空行结束并提交
    /// - `:submit` 立即提交当前内容，内容为空也照常提交
    /// - `:pdf` 导出最近一次评分
    /// - `:quit` 退出
    ///
    /// 单次提交或导出失败不会结束循环
    pub async fn interactive<R, V>(&mut self, input: R, view: &mut V) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        V: OutputView,
    {
        info!("交互模式：输入文本后以空行或 :submit 提交，:pdf 导出报告，:quit 退出");

        let mut lines = input.lines();
        let mut buffer: Vec<String> = Vec::new();

        loop {
            let line = lines.next_line().await.context("读取输入失败")?;
            let Some(line) = line else {
                // 输入结束时提交剩余内容
                if !buffer.is_empty() {
                    self.submit_buffer(&mut buffer, view).await;
                }
                break;
            };

            let command = line.trim().to_owned();
            match command.as_str() {
                ":quit" => break,
                ":submit" => self.submit_buffer(&mut buffer, view).await,
                ":pdf" => match self.export().await {
                    Ok(path) => info!("✓ 报告已导出: {}", path.display()),
                    Err(e) => warn!("⚠️ {:#}", e),
                },
                "" if !buffer.is_empty() => self.submit_buffer(&mut buffer, view).await,
                "" => {}
                _ => buffer.push(line),
            }
        }

        Ok(())
    }

    async fn submit_buffer<V: OutputView>(&mut self, buffer: &mut Vec<String>, view: &mut V) {
        let text = buffer.join("\n");
        buffer.clear();
        // 失败已经在视图上显示过
        let _ = self.submit_flow.run(&text, &mut self.session, view).await;
    }

    /// 健康检查
    pub async fn check(&self) -> Result<String> {
        let status = self
            .client
            .health()
            .await
            .with_context(|| format!("评分服务不可用: {}", self.config.api_base_url))?;
        info!("✓ 评分服务正常: {}", status.message);
        Ok(status.message)
    }
}

async fn load_source(source: TranscriptSource) -> Result<Transcript> {
    let transcript = match source {
        TranscriptSource::Text(text) => Transcript::new(text),
        TranscriptSource::File(path) => load_file(&path).await?,
        TranscriptSource::Stdin => read_transcript(tokio::io::stdin())
            .await
            .context("无法读取标准输入")?,
    };
    Ok(transcript)
}

async fn load_file(path: &Path) -> Result<Transcript> {
    load_transcript_file(path)
        .await
        .with_context(|| format!("无法读取文本文件: {}", path.display()))
}
