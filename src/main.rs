use std::process::ExitCode;
use termdict::builder::{DictionaryBuilder, RunOutcome, run};
use termdict::config::{RunConfig, command, program_dir};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let matches = command().get_matches();
    let config = RunConfig::from_matches(&matches, &program_dir());

    // Without a translation client there is nothing useful to do
    let translator = match config.translator() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to initialize translation client: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let articles = match config.article_source() {
        Ok(a) => a,
        Err(e) => {
            error!("Failed to initialize article source: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let dictionary_builder = DictionaryBuilder::new(
        translator.as_ref(),
        articles.as_ref(),
        config.source_locale.as_str(),
        config.target_locale.as_str(),
    );

    match run(&dictionary_builder, &config.paths).await {
        RunOutcome::NothingToDo => {}
        RunOutcome::Completed { saved: true, .. } => {
            info!("Dictionary saved to '{}'", config.paths.output.display());
        }
        RunOutcome::Completed { saved: false, .. } => {
            info!("Run finished without saving a dictionary");
        }
    }

    ExitCode::SUCCESS
}
