use anyhow::Result;
use clap::Parser;
use transcript_score::cli::{Cli, Commands};
use transcript_score::workflow::TerminalView;
use transcript_score::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置：文件 → 环境变量 → 命令行
    let config = cli.apply_overrides(Config::load(cli.config.as_deref())?);

    // 初始化日志
    logger::init(config.verbose_logging);

    let mut app = App::initialize(config)?;
    let mut view = TerminalView::stdout(cli.output_format());

    match cli.command {
        Commands::Score(args) => {
            if let Some(path) = app.score_once(args.source(), args.pdf, &mut view).await? {
                println!("Report saved to {}", path.display());
            }
        }
        Commands::Interactive => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            app.interactive(stdin, &mut view).await?;
        }
        Commands::Check => {
            let message = app.check().await?;
            println!("{}", message);
        }
    }

    Ok(())
}
