pub mod render_service;
pub mod report_service;

pub use render_service::{BreakdownBox, ScoreView, ERROR_MESSAGE};
pub use report_service::ReportService;
