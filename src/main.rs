mod preview;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use immogram_core::{config, task::TaskSnapshot};
use immogram_i18n::{Locale, MessageRegistry};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

#[derive(Parser)]
#[command(
    name = "immogram",
    version,
    about = "Immogram — localized messages for the listing bot"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and verify the catalog of every configured locale.
    Check,
    /// Print every message for a task snapshot.
    Render {
        /// JSON file holding the task snapshot.
        #[arg(short, long)]
        task: String,
        /// Locale to render in (defaults to messages.default_locale).
        #[arg(short, long)]
        locale: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Subscriber goes up before the config is read; without RUST_LOG the
    // filter starts at "info" and switches to the configured level after.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let use_config_level = env_filter.is_none();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let cfg = config::load(&cli.config)?;
    if use_config_level {
        filter_handle.reload(EnvFilter::new(&cfg.immogram.log_level))?;
    }

    let registry = MessageRegistry::from_config(&cfg.messages)?;

    match cli.command {
        Commands::Check => {
            println!("{} — catalog check\n", cfg.immogram.name);
            for locale in registry.locales() {
                if let Some(messages) = registry.get(locale) {
                    let marker = if locale == registry.default_locale() {
                        " (default)"
                    } else {
                        ""
                    };
                    println!(
                        "  {locale}{marker}: {} keys, ok",
                        messages.catalog().len()
                    );
                }
            }
        }
        Commands::Render { task, locale } => {
            let content = std::fs::read_to_string(&task)
                .with_context(|| format!("failed to read task snapshot {task}"))?;
            let snapshot: TaskSnapshot = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse task snapshot {task}"))?;

            let messages = match locale {
                Some(tag) => registry
                    .get(&Locale::new(tag.as_str()))
                    .with_context(|| format!("locale '{tag}' is not configured"))?,
                None => registry.default_service(),
            };

            for (label, text) in preview::render_all(&messages, &snapshot)? {
                println!("[{label}]\n{text}\n");
            }
        }
    }

    Ok(())
}
