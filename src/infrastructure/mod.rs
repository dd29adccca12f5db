//! 基础设施层
//!
//! 只暴露能力（字体度量、PDF 编码），不认识评分结果

pub mod font_metrics;
pub mod pdf_writer;

pub use pdf_writer::PdfWriter;
