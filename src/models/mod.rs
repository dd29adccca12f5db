pub mod loaders;
pub mod score;
pub mod transcript;

pub use loaders::{load_transcript_file, read_transcript};
pub use score::{ErrorBody, HealthStatus, ScoreDetail, ScoreRequest, ScoreResult};
pub use transcript::Transcript;
