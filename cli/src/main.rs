//! CLI entrypoint for dialectic-rag
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use dialectic_application::{
    ConversationLogger, ExperimentSummary, NoProgress, PersonaRegistry, ProgressNotifier,
    RunDebateUseCase, RunExperimentUseCase,
};
use dialectic_domain::{ConfigIssue, DatasetName};
use dialectic_infrastructure::{
    ConfigLoader, DatasetError, ExperimentPaths, FileConfig, JsonlConversationLogger,
    JsonlDatasetLoader, JsonlResultWriter, OpenRouterConfig, OpenRouterGateway,
};
use dialectic_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(dataset) = cli.dataset.map(DatasetName::from) else {
        bail!("--dataset is required");
    };

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_overrides(&mut config, &cli);

    let started_at = Local::now();
    let paths = ExperimentPaths::new(
        &config.paths.data_dir,
        &config.paths.results_dir,
        dataset,
        started_at,
    );
    fs::create_dir_all(&config.paths.results_dir).with_context(|| {
        format!(
            "Failed to create results directory {}",
            config.paths.results_dir.display()
        )
    })?;

    let _guard = init_tracing(cli.verbose, &paths)?;

    info!("Starting dialectic-rag on {}", dataset);
    info!("Log file: {}", paths.log.display());

    if !check_config(&config.validate()) {
        bail!("Configuration has errors; see log for details");
    }

    let cancellation = CancellationToken::new();
    spawn_ctrl_c_handler(cancellation.clone());

    let progress: Arc<dyn ProgressNotifier> = if cli.quiet {
        Arc::new(NoProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    if let RunOutcome::Finished { summary, output } =
        run(&config, &paths, progress, cancellation).await?
        && !cli.quiet
    {
        println!(
            "{}",
            ConsoleFormatter::format_summary(&summary, dataset, &output)
        );
    }

    Ok(())
}

/// How a run ended without an error
#[derive(Debug)]
enum RunOutcome {
    /// The input file does not exist; nothing was written.
    MissingInput,
    /// The provider could not be configured; nothing was written.
    ProviderUnavailable,
    Finished {
        summary: ExperimentSummary,
        output: PathBuf,
    },
}

/// Load the dataset, wire the layers together and run the batch.
///
/// The results file is only created once the input has been read and the
/// provider configured.
async fn run(
    config: &FileConfig,
    paths: &ExperimentPaths,
    progress: Arc<dyn ProgressNotifier>,
    cancellation: CancellationToken,
) -> Result<RunOutcome> {
    let dataset_file = match JsonlDatasetLoader::load(&paths.input) {
        Ok(loaded) => loaded,
        Err(DatasetError::NotFound(path)) => {
            error!("Input file not found: {}", path.display());
            return Ok(RunOutcome::MissingInput);
        }
        Err(e) => return Err(e.into()),
    };
    if !dataset_file.skipped.is_empty() {
        warn!(
            "Skipped {} malformed line(s) in {}",
            dataset_file.skipped.len(),
            paths.input.display()
        );
    }

    // === Dependency Injection ===
    let gateway_config = match OpenRouterConfig::from_file(&config.provider) {
        Ok(gateway_config) => gateway_config,
        Err(e) => {
            error!("Cannot configure the model provider: {}", e);
            return Ok(RunOutcome::ProviderUnavailable);
        }
    };
    let gateway = Arc::new(OpenRouterGateway::new(gateway_config)?);

    let (models, _) = config.models.to_persona_models();
    info!(
        "Personas: proponent={}, challenger={}, judge={}",
        models.proponent, models.challenger, models.judge
    );

    let conversation_logger: Arc<dyn ConversationLogger> = Arc::new(
        JsonlConversationLogger::create(&paths.conversation_log).with_context(|| {
            format!(
                "Failed to create conversation log {}",
                paths.conversation_log.display()
            )
        })?,
    );

    let params = config.debate.to_params();
    let personas = PersonaRegistry::new(gateway, models)
        .with_call_timeout(params.call_timeout)
        .with_conversation_logger(conversation_logger);

    let debate = RunDebateUseCase::new(Arc::new(personas)).with_params(params);
    let experiment = RunExperimentUseCase::new(debate).with_cancellation(cancellation);

    let mut writer = JsonlResultWriter::create(&paths.output)
        .with_context(|| format!("Failed to create {}", paths.output.display()))?;

    let summary = experiment
        .execute_with_progress(dataset_file.entries, &mut writer, progress)
        .await?;

    info!(
        "Experiment finished: {} of {} records written to {}",
        writer.written(),
        summary.total,
        writer.path().display()
    );

    Ok(RunOutcome::Finished {
        summary,
        output: writer.path().to_path_buf(),
    })
}

/// CLI flags override every configuration source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(dir) = &cli.data_dir {
        config.paths.data_dir = dir.clone();
    }
    if let Some(dir) = &cli.results_dir {
        config.paths.results_dir = dir.clone();
    }
    if let Some(n) = cli.seat_concurrency {
        config.debate.seat_concurrency = n;
    }
    if let Some(n) = cli.debate_concurrency {
        config.debate.debate_concurrency = n;
    }
}

/// Log every issue; returns false if any of them is an error
fn check_config(issues: &[ConfigIssue]) -> bool {
    let mut ok = true;
    for issue in issues {
        if issue.is_error() {
            error!("Config: {}", issue);
            ok = false;
        } else {
            warn!("Config: {}", issue);
        }
    }
    ok
}

/// Console logging filtered by verbosity, plus a full log file for the run
fn init_tracing(verbose: u8, paths: &ExperimentPaths) -> Result<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let log_file = fs::File::create(&paths.log)
        .with_context(|| format!("Failed to create log file {}", paths.log.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(log_file);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new("info")),
        )
        .init();

    Ok(guard)
}

fn spawn_ctrl_c_handler(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; finishing the current record and stopping");
            token.cancel();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::Path;

    fn setup(dir: &Path) -> (FileConfig, ExperimentPaths) {
        let mut config = FileConfig::default();
        config.paths.data_dir = dir.join("prepared_data");
        config.paths.results_dir = dir.join("results");
        config.provider.api_key = Some("sk-test".to_string());
        fs::create_dir_all(&config.paths.data_dir).unwrap();
        fs::create_dir_all(&config.paths.results_dir).unwrap();

        let started_at = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let paths = ExperimentPaths::new(
            &config.paths.data_dir,
            &config.paths.results_dir,
            DatasetName::AmbigDocs,
            started_at,
        );
        (config, paths)
    }

    fn result_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.contains("_results_"))
            .collect()
    }

    #[tokio::test]
    async fn test_missing_input_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let (config, paths) = setup(dir.path());

        let outcome = run(&config, &paths, Arc::new(NoProgress), CancellationToken::new())
            .await
            .unwrap();

        assert!(matches!(outcome, RunOutcome::MissingInput));
        assert!(!paths.output.exists());
        assert!(!paths.conversation_log.exists());
        assert!(result_files(&config.paths.results_dir).is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_creates_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let (mut config, paths) = setup(dir.path());
        config.provider.api_key = None;
        config.provider.api_key_env = "DIALECTIC_TEST_KEY_THAT_IS_NEVER_SET".to_string();
        fs::write(&paths.input, r#"{"query_id": "q1", "question": "Who?"}"#).unwrap();

        let outcome = run(&config, &paths, Arc::new(NoProgress), CancellationToken::new())
            .await
            .unwrap();

        assert!(matches!(outcome, RunOutcome::ProviderUnavailable));
        assert!(result_files(&config.paths.results_dir).is_empty());
    }

    #[tokio::test]
    async fn test_rejected_entries_are_written_without_calling_the_provider() {
        let dir = tempfile::tempdir().unwrap();
        let (config, paths) = setup(dir.path());
        fs::write(
            &paths.input,
            concat!(
                r#"{"query_id": "q1", "documents": [{"doc_id": "d", "text": "a"}, {"doc_id": "d", "text": "b"}]}"#,
                "\n",
                "not json\n",
            ),
        )
        .unwrap();

        let outcome = run(&config, &paths, Arc::new(NoProgress), CancellationToken::new())
            .await
            .unwrap();

        let (summary, output) = match outcome {
            RunOutcome::Finished { summary, output } => (summary, output),
            other => panic!("expected a finished run, got {other:?}"),
        };
        assert_eq!(output, paths.output);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.failed, 1);

        let written = fs::read_to_string(&paths.output).unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["query_id"], "q1");
        assert!(lines[0]["error"].as_str().unwrap().contains("Duplicate document id 'd'"));
    }
}
