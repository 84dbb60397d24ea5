use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{CustomType, Text};
use log::debug;
use metservice_core::{BASE_URL, Config, Resource};

use crate::render::{self, Format};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "metservice", version, about = "MetService weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where to look and how to print it.
#[derive(Debug, Args)]
pub struct Target {
    /// Town or city as MetService spells it, e.g. "Dunedin". Falls back to
    /// the configured default location.
    pub location: Option<String>,

    /// Print the decoded record as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the base URL, default location and request timeout.
    Configure,

    /// Multi-day town forecast.
    Forecast(Target),

    /// Latest three-hourly and daily observations.
    Observation(Target),

    /// Minute-resolution observation snapshot.
    OneMin(Target),

    /// Hourly observations and forecasts for about two days.
    Hourly(Target),

    /// Pollen outlook.
    Pollen(Target),

    /// Sun and moon rise/set times.
    RiseSet(Target),

    /// Fetch any resource by name, e.g. `metservice get rise-set Dunedin`.
    Get {
        /// One of forecast, observation, one-min, hourly, pollen, rise-set.
        #[arg(value_parser = parse_resource)]
        resource: Resource,

        #[command(flatten)]
        target: Target,
    },
}

fn parse_resource(value: &str) -> anyhow::Result<Resource> {
    Resource::try_from(value)
}

impl Command {
    fn target(&self) -> Option<(Resource, &Target)> {
        match self {
            Command::Configure => None,
            Command::Forecast(t) => Some((Resource::Forecast, t)),
            Command::Observation(t) => Some((Resource::Observation, t)),
            Command::OneMin(t) => Some((Resource::ObservationOneMin, t)),
            Command::Hourly(t) => Some((Resource::ObservationForecastHours, t)),
            Command::Pollen(t) => Some((Resource::Pollen, t)),
            Command::RiseSet(t) => Some((Resource::RiseSet, t)),
            Command::Get { resource, target } => Some((*resource, target)),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        let Some((resource, target)) = self.command.target() else {
            return configure(&mut config);
        };

        let location = match &target.location {
            Some(location) => location.as_str(),
            None => config.default_location()?,
        };
        let format = if target.json {
            Format::Json
        } else {
            Format::Text
        };

        let client = config.client()?;
        let url = client.url_for(resource, location);
        debug!("Fetching {resource} from {url}");

        let out = render::show(&client, resource, location, format).await?;
        println!("{out}");

        Ok(())
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let base_url = Text::new("MetService base URL:")
        .with_default(config.base_url())
        .prompt()
        .context("Failed to read base URL")?;

    let location = Text::new("Default location (e.g. Dunedin, leave empty for none):")
        .with_default(config.default_location.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read default location")?;

    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds (0 for none):")
        .with_default(config.timeout_secs.unwrap_or(0))
        .prompt()
        .context("Failed to read timeout")?;

    let base_url = base_url.trim();
    config.base_url = (base_url != BASE_URL).then(|| base_url.to_string());
    config.default_location = None;
    if !location.trim().is_empty() {
        config.set_default_location(location.trim());
    }
    config.timeout_secs = (timeout_secs > 0).then_some(timeout_secs);

    config.save()?;
    let path = Config::config_file_path()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}
