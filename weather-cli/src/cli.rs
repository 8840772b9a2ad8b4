use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::autocompletion::{Autocomplete, Replacement};
use inquire::{CustomUserError, InquireError, Password, Text};
use weather_core::{Config, SearchSession, WeatherService, provider_from_config, resolver};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and response language.
    Configure,

    /// Show current weather for a city (Korean or English name).
    Show {
        /// City name, e.g. "서울" or "London".
        city: String,

        /// Print the snapshot as JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// List known Korean city names matching a partial input.
    Suggest {
        /// Partial city name, e.g. "제".
        partial: String,
    },

    /// Search repeatedly with autocomplete until an empty input.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(&city, json).await,
            Command::Suggest { partial } => {
                for name in resolver::suggest(&partial) {
                    println!("{name}\t{}", resolver::resolve(name));
                }
                Ok(())
            }
            Command::Interactive => interactive().await,
        }
    }
}

fn build_service() -> anyhow::Result<WeatherService> {
    let config = Config::load()?;
    if !config.has_api_key() {
        tracing::warn!(
            "No API key configured; requests will use a placeholder key. \
             Hint: run `weather configure` or set OPENWEATHER_API_KEY."
        );
    }
    let provider = provider_from_config(&config)?;
    Ok(WeatherService::new(Arc::from(provider)))
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let service = build_service()?;
    let snapshot = service.handle(city).await?;

    if json {
        let text = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize weather snapshot")?;
        println!("{text}");
    } else {
        println!("{}", render::render_snapshot(&snapshot));
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let service = build_service()?;
    let mut session = SearchSession::new();
    println!("{}", render::render_state(session.state()));

    loop {
        let input = Text::new("도시 이름:")
            .with_autocomplete(CitySuggester)
            .with_help_message("예: 서울, 도쿄, 뉴욕 · 빈 입력 또는 ESC로 종료")
            .prompt_skippable();

        let city = match input {
            Ok(Some(city)) if !city.trim().is_empty() => city,
            Ok(_) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let ticket = session.begin();
        println!("{}", render::render_state(session.state()));

        let result = service.handle(city.trim()).await;
        session.settle(ticket, result);
        println!("{}\n", render::render_state(session.state()));
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;
    if !api_key.trim().is_empty() {
        config.api_key = Some(api_key.trim().to_string());
    }

    let language = Text::new("Response language:")
        .with_default(config.language())
        .prompt()?;
    config.language = Some(language.trim().to_string());

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

/// Feeds the alias table into the prompt's suggestion list.
#[derive(Debug, Clone, Default)]
struct CitySuggester;

impl Autocomplete for CitySuggester {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        Ok(resolver::suggest(input)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}
