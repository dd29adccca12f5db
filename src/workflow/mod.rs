pub mod export_flow;
pub mod session;
pub mod submit_flow;
pub mod view;

pub use export_flow::ExportFlow;
pub use session::{ScoreSession, ScoredTranscript};
pub use submit_flow::SubmitFlow;
pub use view::{OutputFormat, OutputView, RecordingView, TerminalView, ViewEvent};
