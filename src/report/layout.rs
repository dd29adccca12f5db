use crate::models::{ScoreResult, Transcript};
use crate::report::text_wrap::split_text_to_size;
use crate::services::render_service::{format_score, format_weight};

pub const REPORT_TITLE: &str = "Nirmaan AI Scoring Report";

/// 页边距（毫米）
pub const LEFT_MARGIN: f64 = 10.0;
pub const TOP_MARGIN: f64 = 15.0;
/// 折行宽度（毫米）
pub const WRAP_WIDTH: f64 = 180.0;
pub const LINE_HEIGHT: f64 = 6.0;

/// 各部分的换页阈值不同：原文 275，总分与评分项标题 265，反馈正文 270
pub const TRANSCRIPT_PAGE_LIMIT: f64 = 275.0;
pub const SECTION_PAGE_LIMIT: f64 = 265.0;
pub const FEEDBACK_PAGE_LIMIT: f64 = 270.0;

const TITLE_SIZE: f64 = 20.0;
const TIMESTAMP_SIZE: f64 = 10.0;
const HEADING_SIZE: f64 = 14.0;
const BREAKDOWN_HEADING_SIZE: f64 = 13.0;
const BODY_SIZE: f64 = 11.0;

/// 一行文本（y 为基线位置）
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub items: Vec<TextItem>,
}

/// 排版结果
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<PageLayout>,
}

impl ReportLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 按顺序返回所有行，便于检查内容
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|p| p.items.iter().map(|i| i.text.as_str()))
    }
}

/// 排版游标
struct Cursor {
    pages: Vec<PageLayout>,
    y: f64,
    font_size: f64,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![PageLayout::default()],
            y: TOP_MARGIN,
            font_size: BODY_SIZE,
        }
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    /// 在当前位置写一行，不移动游标
    fn text(&mut self, text: impl Into<String>) {
        let item = TextItem {
            x: LEFT_MARGIN,
            y: self.y,
            font_size: self.font_size,
            text: text.into(),
        };
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    /// 游标超过阈值时换页，y 回到上边距
    fn break_page_after(&mut self, limit: f64) {
        if self.y > limit {
            self.pages.push(PageLayout::default());
            self.y = TOP_MARGIN;
        }
    }

    fn finish(self) -> ReportLayout {
        ReportLayout { pages: self.pages }
    }
}

/// 排版评分报告
///
/// `generated_at` 是已经格式化好的本地时间
pub fn layout_report(
    transcript: &Transcript,
    result: &ScoreResult,
    generated_at: &str,
) -> ReportLayout {
    let mut cursor = Cursor::new();

    cursor.set_font_size(TITLE_SIZE);
    cursor.text(REPORT_TITLE);
    cursor.advance(10.0);

    cursor.set_font_size(TIMESTAMP_SIZE);
    cursor.text(format!("Generated on: {}", generated_at));
    cursor.advance(10.0);

    // 原文
    cursor.set_font_size(HEADING_SIZE);
    cursor.text("Original Transcript:");
    cursor.advance(8.0);

    cursor.set_font_size(BODY_SIZE);
    for line in split_text_to_size(transcript.as_str(), WRAP_WIDTH, BODY_SIZE) {
        cursor.break_page_after(TRANSCRIPT_PAGE_LIMIT);
        cursor.text(line);
        cursor.advance(LINE_HEIGHT);
    }

    cursor.advance(8.0);

    // 总分
    cursor.break_page_after(SECTION_PAGE_LIMIT);
    cursor.set_font_size(HEADING_SIZE);
    cursor.text(format!("Final Score: {}", format_score(result.final_score)));
    cursor.advance(10.0);

    // 评分明细
    cursor.set_font_size(BREAKDOWN_HEADING_SIZE);
    cursor.text("Score Breakdown:");
    cursor.advance(8.0);

    cursor.set_font_size(BODY_SIZE);
    for detail in &result.details {
        cursor.break_page_after(SECTION_PAGE_LIMIT);

        cursor.text(format!("Metric: {}", detail.metric));
        cursor.advance(LINE_HEIGHT);
        cursor.text(format!(
            "Score: {} | Weight: {}",
            format_score(detail.score),
            format_weight(detail.weight)
        ));
        cursor.advance(LINE_HEIGHT);

        let feedback = format!("Feedback: {}", detail.feedback);
        for line in split_text_to_size(&feedback, WRAP_WIDTH, BODY_SIZE) {
            cursor.break_page_after(FEEDBACK_PAGE_LIMIT);
            cursor.text(line);
            cursor.advance(LINE_HEIGHT);
        }

        cursor.advance(LINE_HEIGHT);
    }

    cursor.finish()
}
