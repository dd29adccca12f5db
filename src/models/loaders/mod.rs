pub mod transcript_loader;

pub use transcript_loader::{load_transcript_file, read_transcript};
