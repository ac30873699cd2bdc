mod api;
mod export;
mod pages;

use clap::{Parser, Subcommand};
use kku_chatbot::ChatBot;
use kku_core::config::{self, ChatbotConfig, Config};
use kku_core::{shellexpand, Locale, LocaleContext};
use kku_i18n::Translator;
use kku_services::calendar::{self, Cell};
use kku_storage::Store;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "kku-gateway",
    version,
    about = "KKU Global Gateway: multilingual guide for international students"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml", env = "KKU_GATEWAY_CONFIG")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server.
    Serve,
    /// Show configuration, storage and translation coverage.
    Status,
    /// Ask the chatbot a one-shot question.
    Ask {
        /// Answer language code.
        #[arg(short, long)]
        lang: Option<String>,
        /// The question.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Print a month of the academic calendar.
    Calendar {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Render every page in every language as static files.
    Export {
        /// Output directory.
        #[arg(short, long)]
        out: PathBuf,
    },
}

/// Console logging, plus a file log when `log_dir` is given.
fn init_logging(cfg: &Config, log_dir: Option<PathBuf>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.gateway.log_level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "kku-gateway.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            let log_dir = PathBuf::from(shellexpand(&cfg.gateway.data_dir)).join("logs");
            std::fs::create_dir_all(&log_dir)?;
            let _guard = init_logging(&cfg, Some(log_dir));

            let storage = kku_storage::open(&cfg.storage).await?;
            println!("{}: starting on {}:{}", cfg.gateway.name, cfg.server.host, cfg.server.port);
            api::serve(api::AppState::new(cfg, storage)).await?;
        }
        Commands::Status => {
            let _guard = init_logging(&cfg, None);
            println!("{}: status\n", cfg.gateway.name);
            println!("Config: {}", cli.config);
            println!("Server: http://{}:{}", cfg.server.host, cfg.server.port);
            println!("Storage: {}", cfg.storage.backend);
            if cfg.storage.backend == "sqlite" {
                let store = Store::new(&cfg.storage).await?;
                println!("  db: {}", shellexpand(&cfg.storage.db_path));
                println!("  size: {} bytes", store.db_size().await?);
                println!("  clients: {}", store.client_count().await?);
            }
            println!();
            println!("Translations:");
            for locale in Locale::ALL {
                let missing = kku_i18n::missing_keys(locale).len();
                println!(
                    "  {} {:<18} {}",
                    locale.code(),
                    locale.native_name(),
                    if missing == 0 {
                        "complete".to_string()
                    } else {
                        format!("{missing} keys from fallback")
                    }
                );
            }
        }
        Commands::Ask { lang, message } => {
            let _guard = init_logging(&cfg, None);
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: kku-gateway ask <message>");
            }
            let question = message.join(" ");
            let ctx = LocaleContext::new(lang.as_deref());
            let bot = ChatBot::new(ctx.current(), &ChatbotConfig::immediate());
            println!("{}", bot.answer(&question).await);
        }
        Commands::Calendar { year, month, lang } => {
            let _guard = init_logging(&cfg, None);
            let t = Translator::new(LocaleContext::new(lang.as_deref()).current());
            print_month(&t, year, month)?;
        }
        Commands::Export { out } => {
            let _guard = init_logging(&cfg, None);
            let written = export::export_site(&out)?;
            println!("Wrote {written} pages to {}", out.display());
        }
    }

    Ok(())
}

/// Plain-text month grid with the events listed underneath.
fn print_month(t: &Translator, year: i32, month: u32) -> anyhow::Result<()> {
    let events = calendar::sample_events(t);
    let today = chrono::Utc::now().date_naive();
    let grid = calendar::build_month(year, month, &events, Some(today), None)?;

    let month_name = t
        .list("calendar.monthNames")
        .get(month as usize - 1)
        .copied()
        .unwrap_or_default();
    println!("{month_name} {year}");
    let header: Vec<String> = t
        .list("calendar.dayNames")
        .iter()
        .map(|d| format!("{d:>4}"))
        .collect();
    println!("{}", header.concat());

    let mut line = String::new();
    for (i, cell) in grid.cells.iter().enumerate() {
        match cell {
            Cell::Blank => line.push_str("    "),
            Cell::Day(day) => {
                let mark = if !day.events.is_empty() {
                    '*'
                } else if day.is_today {
                    '<'
                } else {
                    ' '
                };
                line.push_str(&format!("{:>3}{mark}", day.day));
            }
        }
        if i % 7 == 6 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    let days: Vec<_> = grid.days().filter(|d| !d.events.is_empty()).collect();
    if !days.is_empty() {
        println!();
    }
    for day in days {
        for event in &day.events {
            println!("  {}  {} ({})", event.date, event.title, t.text(event.kind.label_key()));
        }
    }
    Ok(())
}
