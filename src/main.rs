// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use log::{warn, info, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use linguaflix::AppError;
use linguaflix::app_config::{self, Config};
use linguaflix::catalog::ShowCatalog;
use linguaflix::file_utils::FileManager;
use linguaflix::language_utils;
use linguaflix::sentence::{CorpusCache, ProficiencyLevel, SentenceService};

/// CLI Wrapper for ProficiencyLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliProficiencyLevel {
    Beginner,
    Intermediate,
}

impl From<CliProficiencyLevel> for ProficiencyLevel {
    fn from(cli_level: CliProficiencyLevel) -> Self {
        match cli_level {
            CliProficiencyLevel::Beginner => ProficiencyLevel::Beginner,
            CliProficiencyLevel::Intermediate => ProficiencyLevel::Intermediate,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick a practice sentence from a subtitle file
    Sentence {
        /// Subtitle file (SRT)
        #[arg(value_name = "SUBTITLE_PATH")]
        path: PathBuf,

        /// Learner proficiency level
        #[arg(short = 'L', long, value_enum, default_value = "beginner")]
        level: CliProficiencyLevel,

        /// Number of sentences to draw; repeats reuse the cached corpus
        #[arg(short, long, default_value_t = 1)]
        repeat: usize,
    },

    /// Pick a practice sentence for a show registered in the config
    Show {
        /// Show identifier (e.g., 'friends')
        #[arg(value_name = "SHOW")]
        show: String,

        /// Subtitle language (e.g., 'en', 'eng', 'English')
        #[arg(short = 's', long, default_value = "en")]
        language: String,

        /// Learner proficiency level
        #[arg(short = 'L', long, value_enum, default_value = "beginner")]
        level: CliProficiencyLevel,
    },

    /// List the shows registered in the config
    List,

    /// Generate shell completions for linguaflix
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Linguaflix - Learner sentences from TV subtitles
///
/// Extracts practice sentences sized for a learner's proficiency level
/// from SRT subtitle files.
#[derive(Parser, Debug)]
#[command(name = "linguaflix")]
#[command(version)]
#[command(about = "Practice sentences for language learners from TV subtitles")]
#[command(long_about = "Linguaflix reads SRT subtitles, cleans and segments the dialogue, and picks a sentence that fits a learner's proficiency level.

EXAMPLES:
    linguaflix sentence friends.srt                    # Beginner sentence from a file
    linguaflix sentence friends.srt -L intermediate    # Intermediate sentence
    linguaflix sentence friends.srt --repeat 5         # Five draws from one cached corpus
    linguaflix show friends -s English                 # Sentence for a registered show
    linguaflix list                                    # Registered shows
    linguaflix completions bash > linguaflix.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger);
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌ "),
            Level::Warn => ("\x1B[1;33m", "🚧 "),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍 "),
            Level::Trace => ("\x1B[1;35m", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    // The global max level can change after init
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "linguaflix", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    let config = load_or_create_config(&cli.config, cli.log_level.clone())?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    match cli.command {
        Commands::Sentence { path, level, repeat } => run_sentence(&config, &path, level.into(), repeat).await?,
        Commands::Show { show, language, level } => run_show(&config, &show, &language, level.into()).await?,
        Commands::List => run_list(&config)?,
        Commands::Completions { .. } => {}
    }
    Ok(())
}

// Load the config file, or write a default one when it is missing
fn load_or_create_config(config_path: &str, log_level: Option<CliLogLevel>) -> Result<Config, AppError> {
    let mut config = if Path::new(config_path).exists() {
        Config::load(config_path)?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // Update log level in config if specified via command line
    if let Some(log_level) = log_level {
        config.log_level = log_level.into();
    }

    Ok(config)
}

fn build_service(config: &Config) -> SentenceService<CorpusCache> {
    let cache = CorpusCache::new(&config.cache);
    if cache.is_enabled() {
        // The sweeper stops on its own once the cache is dropped
        let _sweeper = cache.start_sweeper();
    }
    SentenceService::new(cache, &config.analysis)
}

async fn run_sentence(config: &Config, path: &Path, level: ProficiencyLevel, repeat: usize) -> Result<(), AppError> {
    let service = build_service(config);

    for _ in 0..repeat.max(1) {
        let result = service.fetch_sentence_for(path, level).await?;
        if result.sentence.is_none() {
            info!("No {} sentence found in {:?}", level, path);
        }
        println!("{}", serde_json::to_string(&result)?);
    }

    let (hits, misses, hit_rate) = service.store().stats();
    debug!("Corpus cache: {} hits, {} misses ({:.0}% hit rate)", hits, misses, hit_rate * 100.0);
    Ok(())
}

async fn run_show(config: &Config, show: &str, language: &str, level: ProficiencyLevel) -> Result<(), AppError> {
    let catalog = ShowCatalog::from_config(&config.subtitles);
    let path = catalog.resolve(show, language).ok_or_else(|| AppError::ShowNotFound {
        show: show.to_string(),
        language: language.to_string(),
    })?;

    let service = build_service(config);
    let result = service.fetch_sentence_for(path, level).await?;
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

fn run_list(config: &Config) -> Result<(), AppError> {
    let catalog = ShowCatalog::from_config(&config.subtitles);
    if catalog.is_empty() {
        info!("No shows registered in the config");
    }

    for (key, entry) in catalog.entries() {
        let language_name = language_utils::get_language_name(&entry.language)
            .unwrap_or_else(|_| entry.language.clone());
        let status = if FileManager::file_exists(&entry.path) { "" } else { " (missing)" };
        println!("{}\t{}\t{}{}", key, language_name, entry.path.display(), status);
    }

    // Subtitle files on disk that no show points at
    let base_dir = &config.subtitles.base_dir;
    if !FileManager::dir_exists(base_dir) {
        debug!("Subtitle directory {:?} does not exist", base_dir);
        return Ok(());
    }

    let registered: Vec<&Path> = catalog.entries().map(|(_, entry)| entry.path.as_path()).collect();
    for path in FileManager::find_subtitle_files(base_dir)? {
        if !registered.contains(&path.as_path()) {
            println!("-\t-\t{} (unregistered)", path.display());
        }
    }
    Ok(())
}
