// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};

use babelbot::app_config::{Config, LogLevel};
use babelbot::pipeline::TranslationPipeline;
use babelbot::providers::GoogleTranslator;
use babelbot::store::Repository;
use babelbot::{commands, languages};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Set a user's preferred language
    SetLang {
        /// Platform user id
        user_id: String,
        /// Language code (e.g. 'en', 'fr', 'zh-cn')
        lang: String,
    },

    /// Show a user's preferred language
    MyLang {
        /// Platform user id
        user_id: String,
    },

    /// List all supported language codes
    Languages {
        /// Also print English language names
        #[arg(short, long)]
        names: bool,
    },

    /// Flag a channel for automatic translation
    AddChannel {
        /// Platform channel id
        channel_id: String,
        /// Default language for authors without a preference
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Unflag a translation channel
    RemoveChannel {
        /// Platform channel id
        channel_id: String,
    },

    /// List translation channels and their default languages
    ListChannels,

    /// Set a translation channel's default language
    SetChannelLang {
        /// Platform channel id
        channel_id: String,
        /// Language code
        lang: String,
    },

    /// Run one message through the translation pipeline (live provider)
    Translate {
        /// Platform id of the message author
        author_id: String,
        /// Platform id of the channel
        channel_id: String,
        /// Message text
        text: String,
    },

    /// Show preference store statistics
    Status,

    /// Generate shell completions for babelbot
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// babelbot - chat translation bot core
///
/// Administers the preference store behind the translation bot and runs
/// one-shot pipeline passes for testing. The chat gateway adapter calls into
/// the same library this CLI exercises.
#[derive(Parser, Debug)]
#[command(name = "babelbot")]
#[command(version = "0.1.0")]
#[command(about = "Chat translation bot core - preference store admin and pipeline runner")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
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

    // Completions need no config or store
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "babelbot", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::from_file(&cli.config_path)?;

    // CLI log level wins over config
    let level = cli
        .log_level
        .map(LogLevel::from)
        .unwrap_or(config.log_level);
    log::set_max_level(level_filter(level));

    let repository = match &config.database_path {
        Some(path) => Repository::new(babelbot::store::StoreConnection::new(path)?),
        None => Repository::new_default()?,
    };
    repository.init()?;

    match cli.command {
        Commands::SetLang { user_id, lang } => {
            let reply = commands::set_my_language(&repository, &user_id, &lang).await?;
            println!("{}", reply);
        }
        Commands::MyLang { user_id } => {
            let reply = commands::show_my_language(&repository, &user_id).await?;
            println!("{}", reply);
        }
        Commands::Languages { names } => {
            if names {
                for code in babelbot::SUPPORTED_LANGUAGES {
                    let name = languages::get_language_name(code)
                        .unwrap_or_else(|_| "(unknown)".to_string());
                    println!("{:<8} {}", code, name);
                }
            } else {
                for chunk in commands::list_supported_languages() {
                    println!("{}", chunk);
                }
            }
        }
        Commands::AddChannel { channel_id, lang } => {
            let reply = commands::add_translation_channel(
                &repository,
                &channel_id,
                lang.as_deref(),
                &config.default_language,
            )
            .await?;
            println!("{}", reply);
        }
        Commands::RemoveChannel { channel_id } => {
            let reply = commands::remove_translation_channel(&repository, &channel_id).await?;
            println!("{}", reply);
        }
        Commands::ListChannels => {
            let reply = commands::list_translation_channels(&repository).await?;
            println!("{}", reply);
        }
        Commands::SetChannelLang { channel_id, lang } => {
            let reply =
                commands::set_channel_default_language(&repository, &channel_id, &lang).await?;
            println!("{}", reply);
        }
        Commands::Translate {
            author_id,
            channel_id,
            text,
        } => {
            let translator = Arc::new(GoogleTranslator::with_endpoint(
                config.provider.endpoint.clone(),
                config.provider.timeout_secs,
            ));
            let pipeline = TranslationPipeline::new(repository, translator);

            info!("Running pipeline for channel {}", channel_id);
            let reply = pipeline.handle_message(&author_id, &channel_id, &text).await?;
            println!("{}", reply);
        }
        Commands::Status => {
            let stats = repository.connection().stats()?;
            println!("{}", stats);
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
