//! Content tier CLI
//!
//! Local entry point for inspecting pages, posts and forms against a live CMS.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand};
use cms_presenter::{
    error::{AppError, Result},
    models::Config,
    pipeline::{PageKind, PageLoader},
    services::{Countdown, FormKind, FormSubmitter, launch, parse_field},
};

/// cms-presenter - headless CMS content tier
#[derive(Parser, Debug)]
#[command(
    name = "cms-presenter",
    version,
    about = "Fetch and normalize CMS content for the website"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a page and print what it would render
    Page {
        /// home, about, services, resources, blog or contact
        name: String,
    },

    /// Load every page and report which ones render
    Pages,

    /// Resolve a post by site path, e.g. blog/my-post
    Post { path: String },

    /// Show the launch state and countdown
    Countdown,

    /// Submit a form
    Submit {
        /// newsletter, contact or coming-soon
        form: String,

        /// Form field as key=value (repeatable)
        #[arg(short, long = "field")]
        fields: Vec<String>,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);
    config.apply_env(|key| std::env::var(key).ok());
    log::debug!("Loaded configuration from {}", cli.config.display());

    let config = Arc::new(config);
    let now = Utc::now();

    match cli.command {
        Command::Page { name } => {
            let kind: PageKind = name.parse()?;
            let loader = PageLoader::new(Arc::clone(&config))?;
            print_json(&loader.load(kind, now).await?)?;
        }

        Command::Pages => {
            let loader = PageLoader::new(Arc::clone(&config))?;
            let mut failed = 0;
            for (kind, result) in loader.load_all(now).await {
                match result {
                    Ok(page) => log::info!(
                        "{kind}: {}",
                        page["status"].as_str().unwrap_or("unknown")
                    ),
                    Err(e) => {
                        failed += 1;
                        log::error!("{kind}: {e}");
                    }
                }
            }
            if failed > 0 {
                return Err(AppError::validation(format!("{failed} page(s) failed to load")));
            }
        }

        Command::Post { path } => {
            let loader = PageLoader::new(Arc::clone(&config))?;
            print_json(&loader.post(&path).await)?;
        }

        Command::Countdown => {
            let loader = PageLoader::new(Arc::clone(&config))?;
            let settings = match loader.content().site_settings().await {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Site settings unavailable: {e}");
                    None
                }
            };
            let settings_launch = settings.as_ref().and_then(|s| s.launch_date.as_deref());
            let launch_date = launch::effective_launch_date(settings_launch, &config.site);
            let countdown = Countdown::until(launch::countdown_target(launch_date, now), now);

            log::info!("Launch date: {}", launch_date.unwrap_or("not set"));
            if launch::should_show_coming_soon(settings_launch, &config.site, now) {
                log::info!(
                    "Coming soon: {}d {:02}h {:02}m {:02}s",
                    countdown.days,
                    countdown.hours,
                    countdown.minutes,
                    countdown.seconds
                );
            } else {
                log::info!("Site is live");
            }
        }

        Command::Submit { form, fields } => {
            let kind: FormKind = form.parse()?;
            let fields = fields
                .iter()
                .map(|raw| parse_field(raw))
                .collect::<Result<Vec<_>>>()?;

            let submitter = FormSubmitter::new(&config)?;
            print_json(&submitter.submit(kind, &fields).await?)?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            if config.backend.endpoint.is_none() {
                log::warn!("No GraphQL endpoint configured; content pages will show fallbacks");
            }
            if config.forms.endpoint.is_none() {
                log::warn!("No form endpoint configured; forms are disabled");
            }

            log::info!("All validations passed!");
        }
    }

    Ok(())
}
