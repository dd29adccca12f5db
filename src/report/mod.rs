//! 报告排版
//!
//! 把评分结果和原文排成分页的文本块，坐标单位为毫米、左上角为原点。
//! 编码成 PDF 由 `infrastructure::pdf_writer` 负责。

pub mod layout;
pub mod text_wrap;

pub use layout::{layout_report, PageLayout, ReportLayout, TextItem};
pub use text_wrap::split_text_to_size;
