use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};
use wx_core::{Config, NwsClient, catalog, fetch_forecast};

use crate::{prompt, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "wx",
    version,
    about = "National Weather Service forecasts for a few favourite spots",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Location name, e.g. "death valley". Prompts when missing or unknown.
    pub location: Option<String>,

    /// Override the API root (default https://api.weather.gov).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Print the forecast as JSON.
    #[arg(long)]
    pub json: bool,

    /// Show time window, temperature and wind for each period.
    #[arg(short, long)]
    pub detailed: bool,

    /// Debug logging to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the known locations.
    Locations,

    /// Interactively edit the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Locations) => {
                print!("{}", render::render_locations(catalog::all()));
                Ok(())
            }
            Some(Command::Configure) => configure(),
            None => self.show().await,
        }
    }

    async fn show(self) -> anyhow::Result<()> {
        println!("Welcome to weather app!");

        let location = match self.location.as_deref().map(catalog::normalize_location) {
            Some(name) if catalog::find(&name).is_some() => Some(name),
            Some(name) => {
                println!("Invalid location: {name}");
                println!("Choose from: {}", prompt::location_list());
                prompt::prompt_location()?
            }
            None => {
                println!("Select a location from this list");
                println!(" {}", render::title_case(&prompt::location_list()));
                prompt::prompt_location()?
            }
        };

        let Some(location) = location else {
            println!("Exiting Weather App...");
            std::process::exit(1);
        };

        let config = Config::load()?;
        let base_url = self.base_url.as_deref().unwrap_or(config.base_url());
        let client = NwsClient::new(config.user_agent(), config.timeout())?;

        let forecast = fetch_forecast(&client, base_url, &location).await?;

        if self.json {
            let text = serde_json::to_string_pretty(&forecast)
                .context("Failed to serialize forecast to JSON")?;
            println!("{text}");
        } else {
            render::print_forecast(&forecast, self.detailed);
        }

        Ok(())
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let base_url = Text::new("API base URL:")
        .with_default(config.base_url())
        .prompt()?;
    config.set_base_url(Some(&base_url));

    let user_agent = Text::new("User-Agent (weather.gov asks for contact info):")
        .with_default(config.user_agent())
        .prompt()?;
    config.user_agent = Some(user_agent.trim().to_string()).filter(|ua| !ua.is_empty());

    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds:")
        .with_default(config.timeout().as_secs())
        .with_error_message("Please enter a whole number of seconds")
        .prompt()?;
    config.timeout_secs = Some(timeout_secs);

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
