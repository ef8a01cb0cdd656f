mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Args;
use eol_check::adapters::outbound::console::StderrProgressReporter;
use eol_check::adapters::outbound::filesystem::{FileSystemReader, FileTtlCache};
use eol_check::adapters::outbound::network::{
    CatalogClient, EndOfLifeApi, FetchPolicy, DEFAULT_CACHE_TTL,
};
use eol_check::adapters::outbound::time::SystemClock;
use eol_check::application::dto::{CheckRequest, ReportFormat, DEFAULT_THRESHOLD_DAYS};
use eol_check::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use eol_check::application::use_cases::CheckEolUseCase;
use eol_check::config::{self, ConfigFile};
use eol_check::ports::outbound::{CacheStore, DependencyReader, IgnoreListReader};
use eol_check::shared::error::{EolError, ExitCode};
use eol_check::shared::{CancellationToken, Result};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Logs go to stderr so they never mix with the report on stdout
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "warn,eol_check=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Effective settings after layering CLI flags over the config file
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    format: ReportFormat,
    threshold_days: i64,
    offline: bool,
    force_update: bool,
    cache_ttl: Duration,
    cache_dir: PathBuf,
    max_workers: Option<usize>,
    ignore: Vec<String>,
    timeout: Option<Duration>,
}

impl Settings {
    fn resolve(args: &Args, config: &ConfigFile) -> Result<Self> {
        let mut ignore = config.ignore.clone().unwrap_or_default();
        ignore.extend(args.ignore.iter().cloned());

        Ok(Self {
            format: match args.format {
                Some(format) => format,
                None => config.report_format()?.unwrap_or_default(),
            },
            threshold_days: args
                .threshold
                .or(config.threshold_days)
                .unwrap_or(DEFAULT_THRESHOLD_DAYS),
            // --update wins over a config-level offline flag; clap rejects both flags together
            offline: args.offline || (config.offline.unwrap_or(false) && !args.update),
            force_update: args.update,
            cache_ttl: match args.cache_ttl {
                Some(ttl) => ttl,
                None => config.cache_ttl()?.unwrap_or(DEFAULT_CACHE_TTL),
            },
            cache_dir: args
                .cache_dir
                .clone()
                .or_else(|| config.cache_dir.clone())
                .unwrap_or_else(FileTtlCache::default_root),
            max_workers: args.max_workers.or(config.max_workers),
            ignore,
            timeout: match args.timeout {
                Some(timeout) => Some(timeout),
                None => config.timeout()?,
            },
        })
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let project_path = args
        .project_path
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;
    let project_path =
        project_path
            .canonicalize()
            .map_err(|e| EolError::InvalidProjectPath {
                path: project_path.clone(),
                reason: format!("Failed to canonicalize path: {}", e),
            })?;

    let config = load_config(&args, &project_path)?;
    let mut settings = Settings::resolve(&args, &config)?;
    debug!(?settings, "settings resolved");

    let cache = FileTtlCache::new(settings.cache_dir.clone());
    if args.clear_cache {
        let removed = cache.clear();
        eprintln!(
            "🧹 Removed {} cached catalog entries from {}",
            removed,
            cache.root().display()
        );
        return Ok(ExitCode::Success);
    }

    let reader = FileSystemReader::new();
    let Some(dependencies_path) = args.dependencies.as_deref() else {
        anyhow::bail!("No dependency file given.\n\n💡 Hint: Pass the path to a dependency JSON file");
    };
    let dependencies = reader.read_dependencies(dependencies_path)?;
    if let Some(ignore_file) = args.ignore_file.as_deref() {
        settings.ignore.extend(reader.read_ignore_list(ignore_file)?);
    }

    let cancel = match settings.timeout {
        Some(timeout) => CancellationToken::with_timeout(timeout),
        None => CancellationToken::new(),
    };

    // Create adapters (Dependency Injection)
    let catalog = CatalogClient::new(
        EndOfLifeApi::new()?,
        cache,
        FetchPolicy {
            offline: settings.offline,
            force_update: settings.force_update,
            ttl: settings.cache_ttl,
        },
    );
    let use_case = CheckEolUseCase::new(catalog, StderrProgressReporter::new(), SystemClock::new())
        .with_cancellation(cancel);

    let mut request = CheckRequest::new(project_path, dependencies)
        .with_threshold_days(settings.threshold_days)
        .with_max_workers(settings.max_workers)
        .with_ignored(settings.ignore.clone());
    if let Some(name) = args.project_name.as_deref() {
        request = request.with_project_name(name);
    }

    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let colored = args.output.is_none()
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let formatter = FormatterFactory::create(settings.format, colored);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()));
    presenter.present(&formatted_output)?;

    Ok(if response.has_critical() {
        ExitCode::CriticalDependencies
    } else {
        ExitCode::Success
    })
}

/// Explicit --config must exist; otherwise look for a config in the project directory
fn load_config(args: &Args, project_path: &Path) -> Result<ConfigFile> {
    if let Some(path) = args.config.as_deref() {
        let loaded = config::load_config_from_path(path)?;
        eprintln!("📄 Loaded config from: {}", path.display());
        return Ok(loaded);
    }

    match config::discover_config(project_path)? {
        Some(loaded) => {
            eprintln!(
                "📄 Auto-discovered config file: {}",
                project_path.join(config::CONFIG_FILENAME).display()
            );
            Ok(loaded)
        }
        None => Ok(ConfigFile::default()),
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(EolError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| EolError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(EolError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(EolError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
