//! 输出视图
//!
//! 对应网页上的输入框、提交按钮、加载提示、输出区域和导出按钮。
//! 流程层只通过这个 trait 改变界面状态。

use crate::services::render_service::error_html;
use crate::services::ScoreView;
use std::io::Write;

pub trait OutputView {
    /// 启用 / 禁用提交按钮
    fn set_submit_enabled(&mut self, enabled: bool);
    /// 显示 / 隐藏加载提示
    fn set_busy(&mut self, busy: bool);
    /// 清空输出区域
    fn clear_output(&mut self);
    /// 显示评分结果
    fn show_result(&mut self, view: &ScoreView);
    /// 显示错误提示
    fn show_error(&mut self, message: &str);
    /// 显示 / 隐藏导出按钮
    fn set_export_visible(&mut self, visible: bool);
}

/// 输出区域的格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// 终端纯文本
    #[default]
    Text,
    /// 与网页输出区域相同结构的 HTML 片段
    Html,
}

/// 终端视图：结果写到 stdout，状态变化只记日志
pub struct TerminalView<W: Write> {
    out: W,
    format: OutputFormat,
    export_visible: bool,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::with_format(std::io::stdout(), format)
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self::with_format(out, OutputFormat::Text)
    }

    pub fn with_format(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            export_visible: false,
        }
    }

    pub fn export_visible(&self) -> bool {
        self.export_visible
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputView for TerminalView<W> {
    fn set_submit_enabled(&mut self, enabled: bool) {
        tracing::debug!("提交按钮: {}", if enabled { "启用" } else { "禁用" });
    }

    fn set_busy(&mut self, busy: bool) {
        if busy {
            tracing::info!("⏳ 正在评分...");
        }
    }

    fn clear_output(&mut self) {}

    fn show_result(&mut self, view: &ScoreView) {
        let rendered = match self.format {
            OutputFormat::Text => view.to_text(),
            OutputFormat::Html => format!("{}\n", view.to_html()),
        };
        if let Err(e) = write!(self.out, "{}", rendered).and_then(|_| self.out.flush()) {
            tracing::warn!("输出结果失败: {}", e);
        }
    }

    fn show_error(&mut self, message: &str) {
        let rendered = match self.format {
            OutputFormat::Text => message.to_string(),
            OutputFormat::Html => error_html(message),
        };
        if let Err(e) = writeln!(self.out, "{}", rendered).and_then(|_| self.out.flush()) {
            tracing::warn!("输出错误提示失败: {}", e);
        }
    }

    fn set_export_visible(&mut self, visible: bool) {
        self.export_visible = visible;
        if visible {
            tracing::info!("💡 可以导出 PDF 报告");
        }
    }
}

/// 视图事件（按发生顺序记录）
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    SubmitEnabled(bool),
    Busy(bool),
    Cleared,
    Result(ScoreView),
    Error(String),
    ExportVisible(bool),
}

/// 只记录状态的视图，用于测试和嵌入
#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
    pub submit_enabled: bool,
    pub busy: bool,
    pub export_visible: bool,
    pub output: Option<Result<ScoreView, String>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            submit_enabled: true,
            ..Self::default()
        }
    }
}

impl OutputView for RecordingView {
    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
        self.events.push(ViewEvent::SubmitEnabled(enabled));
    }

    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
        self.events.push(ViewEvent::Busy(busy));
    }

    fn clear_output(&mut self) {
        self.output = None;
        self.events.push(ViewEvent::Cleared);
    }

    fn show_result(&mut self, view: &ScoreView) {
        self.output = Some(Ok(view.clone()));
        self.events.push(ViewEvent::Result(view.clone()));
    }

    fn show_error(&mut self, message: &str) {
        self.output = Some(Err(message.to_string()));
        self.events.push(ViewEvent::Error(message.to_string()));
    }

    fn set_export_visible(&mut self, visible: bool) {
        self.export_visible = visible;
        self.events.push(ViewEvent::ExportVisible(visible));
    }
}
