pub mod score_client;

pub use score_client::ScoreClient;
