//! 结果渲染服务 - 业务能力层
//!
//! 只负责把 ScoreResult 变成可显示的内容（纯文本 / HTML 片段），不关心流程

use crate::models::ScoreResult;
use std::fmt::Write;

/// 任何提交失败时显示的唯一提示
pub const ERROR_MESSAGE: &str = "Error connecting to backend.";

/// 分数固定两位小数，恰好落在中点时远离零取整（0.125 → 0.13）
pub fn format_score(score: f64) -> String {
    // f64 中只有 m/8（m 为奇数）会精确落在两位小数的中点上，
    // `{:.2}` 对这些值按银行家舍入，需要单独处理
    let eighths = score * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return format!("{:.2}", (score * 100.0).round() / 100.0);
    }
    format!("{:.2}", score)
}

/// 权重按收到的数值原样显示
///
/// 最短表示（1.0 显示为 1），绝对值小于 1e-6 或不小于 1e21 时使用指数形式（1e-7、1e+21）
pub fn format_weight(weight: f64) -> String {
    if weight.is_infinite() {
        let text = if weight > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    let abs = weight.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        let formatted = format!("{:e}", weight);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }
    weight.to_string()
}

/// 单个评分项的显示框
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownBox {
    pub metric: String,
    pub criterion: Option<String>,
    pub score_line: String,
    pub weight_line: String,
    pub feedback_line: String,
}

/// 一次评分结果的显示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreView {
    pub headline: String,
    pub boxes: Vec<BreakdownBox>,
}

impl ScoreView {
    pub fn from_result(result: &ScoreResult) -> Self {
        let boxes = result
            .details
            .iter()
            .map(|d| BreakdownBox {
                metric: d.metric.clone(),
                criterion: d.criterion.clone().filter(|c| !c.is_empty()),
                score_line: format!("Score: {}", format_score(d.score)),
                weight_line: format!("Weight: {}", format_weight(d.weight)),
                feedback_line: format!("Feedback: {}", d.feedback),
            })
            .collect();

        Self {
            headline: format!("Final Score: {}", format_score(result.final_score)),
            boxes,
        }
    }

    /// 终端显示用的纯文本
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.headline);
        let _ = writeln!(out);
        let _ = writeln!(out, "Score Breakdown:");
        for b in &self.boxes {
            let _ = writeln!(out, "{}", "─".repeat(40));
            match &b.criterion {
                Some(criterion) => {
                    let _ = writeln!(out, "{} ({})", b.metric, criterion);
                }
                None => {
                    let _ = writeln!(out, "{}", b.metric);
                }
            }
            let _ = writeln!(out, "  {}", b.score_line);
            let _ = writeln!(out, "  {}", b.weight_line);
            let _ = writeln!(out, "  {}", b.feedback_line);
        }
        out
    }

    /// 与网页版输出区域结构一致的 HTML 片段，服务端文本会被转义
    pub fn to_html(&self) -> String {
        let mut html = format!("<h2>{}</h2>", escape_html(&self.headline));
        html.push_str("<h3>Score Breakdown:</h3>");
        for b in &self.boxes {
            let _ = write!(
                html,
                "<div class=\"box\"><strong>{}</strong><br>{}<br>{}<br>{}</div>",
                escape_html(&b.metric),
                escape_html(&b.score_line),
                escape_html(&b.weight_line),
                escape_html(&b.feedback_line),
            );
        }
        html
    }
}

/// 错误提示的 HTML 形式
pub fn error_html(message: &str) -> String {
    format!("<p style='color:red;'>{}</p>", escape_html(message))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreDetail;

    fn clarity_result() -> ScoreResult {
        ScoreResult {
            final_score: 8.5,
            details: vec![ScoreDetail {
                metric: "Clarity".to_string(),
                score: 9.0,
                weight: 0.5,
                feedback: "Clear.".to_string(),
                criterion: None,
            }],
        }
    }

    #[test]
    fn test_hello_world_scenario() {
        let view = ScoreView::from_result(&clarity_result());
        assert_eq!(view.headline, "Final Score: 8.50");
        assert_eq!(view.boxes.len(), 1);
        let b = &view.boxes[0];
        assert_eq!(b.metric, "Clarity");
        assert_eq!(b.score_line, "Score: 9.00");
        assert_eq!(b.weight_line, "Weight: 0.5");
        assert_eq!(b.feedback_line, "Feedback: Clear.");
    }

    #[test]
    fn test_score_formatting_is_two_decimals() {
        assert_eq!(format_score(0.0), "0.00");
        assert_eq!(format_score(1.0), "1.00");
        assert_eq!(format_score(0.666_666), "0.67");
        assert_eq!(format_score(12.3), "12.30");
    }

    #[test]
    fn test_score_midpoints_round_away_from_zero() {
        // 关键词得分是 found / 8，中点值会真实出现
        assert_eq!(format_score(0.125), "0.13");
        assert_eq!(format_score(0.625), "0.63");
        assert_eq!(format_score(0.375), "0.38");
        assert_eq!(format_score(0.875), "0.88");
        assert_eq!(format_score(1.125), "1.13");
        assert_eq!(format_score(-0.125), "-0.13");
        // 1.005 实际略小于 1.005，不是中点
        assert_eq!(format_score(1.005), "1.00");
    }

    #[test]
    fn test_keyword_score_renders_like_the_page() {
        let mut result = clarity_result();
        result.details[0].score = 5.0 / 8.0;
        let view = ScoreView::from_result(&result);
        assert_eq!(view.boxes[0].score_line, "Score: 0.63");
    }

    #[test]
    fn test_weight_is_not_reformatted() {
        assert_eq!(format_weight(0.5), "0.5");
        assert_eq!(format_weight(1.0), "1");
        assert_eq!(format_weight(0.15), "0.15");
        assert_eq!(format_weight(10.0), "10");
        assert_eq!(format_weight(0.0), "0");
        assert_eq!(format_weight(0.000001), "0.000001");
    }

    #[test]
    fn test_weight_extremes_use_exponent_form() {
        assert_eq!(format_weight(1e-7), "1e-7");
        assert_eq!(format_weight(1.5e-7), "1.5e-7");
        assert_eq!(format_weight(-2e-9), "-2e-9");
        assert_eq!(format_weight(1e21), "1e+21");
        assert_eq!(format_weight(1e20), "100000000000000000000");
        assert_eq!(format_weight(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_boxes_keep_detail_order() {
        let mut result = clarity_result();
        for metric in ["Flow", "Grammar", "Vocabulary"] {
            result.details.push(ScoreDetail {
                metric: metric.to_string(),
                score: 0.4,
                weight: 0.1,
                feedback: String::new(),
                criterion: Some("Language & Grammar".to_string()),
            });
        }
        let view = ScoreView::from_result(&result);
        let metrics: Vec<&str> = view.boxes.iter().map(|b| b.metric.as_str()).collect();
        assert_eq!(metrics, vec!["Clarity", "Flow", "Grammar", "Vocabulary"]);
        assert_eq!(view.to_html().matches("<div class=\"box\">").count(), 4);
    }

    #[test]
    fn test_text_rendering() {
        let text = ScoreView::from_result(&clarity_result()).to_text();
        assert!(text.starts_with("Final Score: 8.50\n"));
        assert!(text.contains("Clarity\n"));
        assert!(text.contains("  Weight: 0.5\n"));
    }

    #[test]
    fn test_html_escapes_server_text() {
        let mut result = clarity_result();
        result.details[0].feedback = "Found keywords: ['name', '<age>']".to_string();
        let html = ScoreView::from_result(&result).to_html();
        assert!(html.starts_with("<h2>Final Score: 8.50</h2><h3>Score Breakdown:</h3>"));
        assert!(html.contains("&#39;name&#39;"));
        assert!(html.contains("&lt;age&gt;"));
        assert_eq!(
            error_html(ERROR_MESSAGE),
            "<p style='color:red;'>Error connecting to backend.</p>"
        );
    }
}
