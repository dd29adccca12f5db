/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use crate::config::Config;
use crate::models::ScoreResult;
use tracing::{debug, info};

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 文本评分客户端");
    info!("🌐 评分服务: {}", config.api_base_url);
    info!("📄 报告路径: {}", config.report_path().display());
    info!("{}", "=".repeat(60));
}

/// 记录一次评分结果
pub fn log_score_result(result: &ScoreResult) {
    info!("{}", "─".repeat(60));
    info!("✓ 评分完成: 总分 {:.2}", result.final_score);
    info!("📋 评分项数量: {}", result.details.len());
    debug!("加权和: {:.4}", result.weighted_sum());
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 5), "hello...");
        assert_eq!(truncate_text("你好世界", 2), "你好...");
    }
}
