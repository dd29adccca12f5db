//! 提交流程 - 流程层
//!
//! 核心职责：定义"提交一次文本"的完整处理流程
//!
//! 流程顺序：
//! 1. 禁用提交、显示加载、清空输出、隐藏导出、清空会话
//! 2. 调用评分服务
//! 3. 成功：渲染结果 → 写入会话 → 显示导出；失败：显示通用错误
//! 4. 无论成败：隐藏加载、启用提交

use tracing::{info, warn};

use crate::clients::ScoreClient;
use crate::error::AppResult;
use crate::models::Transcript;
use crate::services::{ScoreView, ERROR_MESSAGE};
use crate::utils::logging::{log_score_result, truncate_text};
use crate::workflow::session::ScoreSession;
use crate::workflow::view::OutputView;

/// 提交流程
///
/// - 不持有会话和视图，由调用方传入
/// - 所有失败对用户只显示一条提示，具体错误类型返回给调用方
pub struct SubmitFlow {
    client: ScoreClient,
}

impl SubmitFlow {
    pub fn new(client: ScoreClient) -> Self {
        Self { client }
    }

    pub async fn run<V: OutputView>(
        &self,
        text: &str,
        session: &mut ScoreSession,
        view: &mut V,
    ) -> AppResult<()> {
        let transcript = Transcript::new(text);

        view.set_submit_enabled(false);
        view.set_busy(true);
        view.clear_output();
        view.set_export_visible(false);
        session.clear();

        if transcript.is_empty() {
            warn!("⚠️ 提交的文本为空");
        }
        info!(
            "📤 提交文本 ({} 字符): {}",
            transcript.char_count(),
            truncate_text(transcript.as_str(), 80)
        );

        let outcome = match self.client.score(&transcript).await {
            Ok(result) => {
                view.show_result(&ScoreView::from_result(&result));
                log_score_result(&result);
                session.store(transcript, result);
                view.set_export_visible(true);
                Ok(())
            }
            Err(e) => {
                warn!("⚠️ 评分失败: {}", e);
                view.show_error(ERROR_MESSAGE);
                Err(e.into())
            }
        };

        view.set_busy(false);
        view.set_submit_enabled(true);

        outcome
    }
}
