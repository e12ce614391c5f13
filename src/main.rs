//! testomat-export CLI - Export Java test cases to a test management server.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use testomat_export::aggregate::{ErrorPolicy, process_files};
use testomat_export::config::{self, Config, DiscoveryConfig};
use testomat_export::discovery::discover_test_files;
use testomat_export::export::BatchExporter;
use testomat_export::export::transport::HttpTransport;
use testomat_export::extract::SourceExtractor;
use testomat_export::progress::{ConsoleSpinner, FileProgressBar, NoProgress};
use testomat_export::service::ExportService;

#[derive(Parser)]
#[command(name = "testomat-export")]
#[command(about = "Export Java test cases to a test management server", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "testomat.toml")]
    config: PathBuf,

    /// Verbose output; per-file failures abort the run
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract test cases and export them
    Export {
        /// Directories or files to scan (overrides discovery.paths)
        #[arg(short, long = "dir")]
        dirs: Vec<PathBuf>,

        /// Project API key (overrides TESTOMATIO)
        #[arg(long)]
        apikey: Option<String>,

        /// Server URL (overrides TESTOMATIO_URL)
        #[arg(long)]
        url: Option<String>,

        /// Only print the test cases, don't send them
        #[arg(long)]
        dry_run: bool,
    },

    /// Extract test cases and print them without exporting
    List {
        /// Directories or files to scan (overrides discovery.paths)
        #[arg(short, long = "dir")]
        dirs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Validate configuration file
    Validate,

    /// Initialize a new configuration file
    Init {
        /// Server URL to write into the file
        #[arg(long, default_value = "https://app.testomat.io")]
        url: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Export {
            dirs,
            apikey,
            url,
            dry_run,
        } => {
            let overrides = ExportOverrides { apikey, url };
            export_tests(&cli.config, &dirs, overrides, dry_run, cli.verbose).await
        }
        Commands::List { dirs, format } => list_tests(&cli.config, &dirs, format, cli.verbose),
        Commands::Validate => validate_config(&cli.config),
        Commands::Init { url } => init_config(&cli.config, &url),
    }
}

struct ExportOverrides {
    apikey: Option<String>,
    url: Option<String>,
}

fn load_effective_config(config_path: &Path) -> Result<Config> {
    let config = config::load_config_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    Ok(config.apply_env())
}

fn discover(dirs: &[PathBuf], discovery: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let roots = if dirs.is_empty() {
        discovery.paths.as_slice()
    } else {
        dirs
    };
    let files = discover_test_files(roots, discovery)?;
    info!("Found {} source files to scan", files.len());
    Ok(files)
}

async fn export_tests(
    config_path: &Path,
    dirs: &[PathBuf],
    overrides: ExportOverrides,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let mut config = load_effective_config(config_path)?;

    // Apply overrides
    if let Some(apikey) = overrides.apikey {
        config.export.api_key = Some(apikey);
    }
    if let Some(url) = overrides.url {
        config.export.server_url = Some(url);
    }

    let files = discover(dirs, &config.discovery)?;

    let exporter = BatchExporter::new(HttpTransport::new()?).with_spinner(ConsoleSpinner::default());
    let service = ExportService::new(SourceExtractor::java(), exporter);
    let progress = FileProgressBar::new(files.len());

    let count = service
        .process_test_files_with_progress(
            &files,
            config.export.api_key_or_empty(),
            config.export.server_url.as_deref(),
            dry_run,
            verbose,
            &progress,
        )
        .await?;

    if dry_run {
        println!("Found {} test methods (dry run, nothing sent)", count);
    } else {
        println!("Exported {} test methods", count);
    }
    Ok(())
}

fn list_tests(config_path: &Path, dirs: &[PathBuf], format: OutputFormat, verbose: bool) -> Result<()> {
    let config = load_effective_config(config_path)?;
    let files = discover(dirs, &config.discovery)?;

    let result = process_files(
        &SourceExtractor::java(),
        &files,
        ErrorPolicy::from_verbose(verbose),
        &NoProgress,
    )?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result.test_cases())?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            let framework = result
                .primary_framework()
                .map_or("none", |framework| framework.as_str());
            println!("Found {} test methods ({}):", result.len(), framework);
            for case in result.test_cases() {
                println!("  - {}", case);
            }
        }
    }

    Ok(())
}

fn validate_config(config_path: &Path) -> Result<()> {
    let config = match load_effective_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("Configuration is valid!");
    println!();
    println!("Settings:");
    println!(
        "  Server URL: {}",
        config.export.server_url.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  API key: {}",
        if config.export.api_key.is_some() {
            "set"
        } else {
            "(not set)"
        }
    );
    println!("  Paths: {}", join_display(&config.discovery.paths));
    println!("  Extensions: {}", config.discovery.extensions.join(", "));
    println!("  Excluded dirs: {}", config.discovery.exclude_dirs.join(", "));

    Ok(())
}

fn join_display(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn init_config(config_path: &Path, url: &str) -> Result<()> {
    if config_path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit manually.",
            config_path.display()
        );
        std::process::exit(1);
    }

    let config = format!(
        r#"# testomat-export configuration file

[export]
server_url = "{}"
# api_key = "tstmt_..."   # or set TESTOMATIO

[discovery]
paths = ["src/test/java"]
extensions = ["java"]
exclude_dirs = ["target", "build", ".git"]
"#,
        url
    );

    std::fs::write(config_path, config)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {}", config_path.display());
    println!();
    println!("Edit the configuration as needed, then run:");
    println!("  testomat-export export --dry-run");

    Ok(())
}
