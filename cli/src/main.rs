//! CLI entrypoint for quizforge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use quizforge_application::{
    GenerateMcqAction, McqInput, McqResponse, NoSupplyProgress, QuestionStore,
    SupplyProgressNotifier, SupplyQuestionsUseCase,
};
use quizforge_domain::{BulkDifficulty, Difficulty, OutputFormat};
use quizforge_infrastructure::{
    ConfigLoader, FileConfig, HttpQuestionGenerator, InMemoryQuestionStore, JsonlQuestionStore,
    StoreBackend,
};
use quizforge_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type Action = GenerateMcqAction<dyn QuestionStore, HttpQuestionGenerator>;

/// Initialize logging; `RUST_LOG` overrides the `-v` level.
///
/// The returned guard must stay alive for file logs to be flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
            let dir = dir.unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("cannot create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .init();

    Ok(guard)
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("invalid configuration ({} issues)", issues.len());
    }
    Ok(config)
}

async fn build_store(config: &FileConfig) -> Result<Arc<dyn QuestionStore>> {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory question store");
            Ok(Arc::new(InMemoryQuestionStore::new()))
        }
        StoreBackend::Jsonl => {
            let path = config
                .store
                .resolve_path()
                .context("no data directory; set store.path")?;
            let store = JsonlQuestionStore::open(&path)
                .await
                .with_context(|| format!("failed to open question store {}", path.display()))?;
            Ok(Arc::new(store))
        }
    }
}

async fn run(
    action: &Action,
    cli: &Cli,
    topic: String,
    progress: &dyn SupplyProgressNotifier,
) -> Result<McqResponse> {
    let response = if cli.bulk {
        let difficulty = match &cli.difficulty {
            Some(d) => d.parse::<BulkDifficulty>()?,
            None => BulkDifficulty::default(),
        };
        action
            .generate_bulk_with_progress(McqInput::new(topic, difficulty, cli.count), progress)
            .await
    } else {
        let difficulty = match &cli.difficulty {
            Some(d) => d.parse::<Difficulty>()?,
            None => Difficulty::default(),
        };
        action
            .generate_mcq_with_progress(McqInput::new(topic, difficulty, cli.count), progress)
            .await
    };
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let Some(topic) = cli.topic.clone() else {
        bail!("Topic is required. Run with --help for usage.");
    };

    info!("Starting quizforge");
    let config = load_config(&cli)?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let store = build_store(&config).await?;
    let generator = Arc::new(
        HttpQuestionGenerator::from_config(&config.generator)
            .context("question generator is not available")?,
    );

    let mut use_case = SupplyQuestionsUseCase::new(store, generator, config.to_supply_config()?);
    if let Some(seed) = cli.seed {
        use_case = use_case.with_rng_seed(seed);
    }
    let action: Action = GenerateMcqAction::new(use_case);

    // Execute with or without progress reporting
    let response = if cli.quiet || format == OutputFormat::Json {
        run(&action, &cli, topic, &NoSupplyProgress).await?
    } else if !std::io::stderr().is_terminal() {
        run(&action, &cli, topic, &SimpleProgress).await?
    } else {
        let progress = ProgressReporter::new();
        let response = run(&action, &cli, topic, &progress).await;
        progress.finish();
        response?
    };

    if let Some(warning) = response.warning() {
        info!("Partial result: {}", warning);
    }

    println!("{}", ConsoleFormatter::render(format, &response));

    Ok(if response.is_error() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
