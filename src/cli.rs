use crate::app::TranscriptSource;
use crate::config::Config;
use crate::workflow::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "transcript-score",
    version,
    about = "Submit a transcript for scoring and export a PDF report"
)]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Scoring service base URL (overrides config and env)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory the PDF report is written to
    #[arg(long, global = true)]
    pub out_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as the HTML fragment the web page shows
    #[arg(long, global = true)]
    pub html: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one transcript (from --text, --file or stdin)
    Score(ScoreArgs),
    /// Read transcripts line by line; blank line or :submit submits, :pdf exports, :quit exits
    Interactive,
    /// Check that the scoring service is reachable
    Check,
}

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Transcript text
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the transcript from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Export the PDF report after a successful submission
    #[arg(long)]
    pub pdf: bool,
}

impl ScoreArgs {
    pub fn source(&self) -> TranscriptSource {
        match (&self.text, &self.file) {
            (Some(text), _) => TranscriptSource::Text(text.clone()),
            (None, Some(path)) => TranscriptSource::File(path.clone()),
            (None, None) => TranscriptSource::Stdin,
        }
    }
}

impl Cli {
    /// 命令行参数优先级最高
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = &self.base_url {
            config.api_base_url = url.clone();
        }
        if let Some(dir) = &self.out_dir {
            config.output_dir = dir.clone();
        }
        if self.verbose {
            config.verbose_logging = true;
        }
        config
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.html {
            OutputFormat::Html
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_with_text() {
        let cli = Cli::parse_from([
            "transcript-score",
            "score",
            "--text",
            "Hello world",
            "--pdf",
            "--base-url",
            "http://10.0.0.2:5000",
        ]);
        let config = cli.apply_overrides(Config::default());
        assert_eq!(config.api_base_url, "http://10.0.0.2:5000");

        match cli.command {
            Commands::Score(args) => {
                assert!(args.pdf);
                assert!(matches!(args.source(), TranscriptSource::Text(t) if t == "Hello world"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_html_flag_selects_html_output() {
        let cli = Cli::parse_from(["transcript-score", "interactive", "--html"]);
        assert_eq!(cli.output_format(), OutputFormat::Html);

        let cli = Cli::parse_from(["transcript-score", "check"]);
        assert_eq!(cli.output_format(), OutputFormat::Text);
    }

    #[test]
    fn test_score_defaults_to_stdin() {
        let cli = Cli::parse_from(["transcript-score", "score"]);
        match cli.command {
            Commands::Score(args) => assert!(matches!(args.source(), TranscriptSource::Stdin)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let parsed = Cli::try_parse_from([
            "transcript-score",
            "score",
            "--text",
            "a",
            "--file",
            "b.txt",
        ]);
        assert!(parsed.is_err());
    }
}
