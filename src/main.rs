//! Command-line front end for the Sakhi cycle engine.
//!
//! Configuration comes from `SAKHI__*` environment variables (see
//! [`sakhi::config::AppConfig`]).
//!
//! # Examples
//!
//! ```sh
//! sakhi onboard --last-period 2024-01-01 --diet veg --language hindi
//! sakhi status
//! sakhi record-period today
//! sakhi log-symptom "Cramps"
//! sakhi settings --cycle-length 30
//! sakhi tool logSymptom '{"symptomName": "Headache"}'
//! ```

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;

use sakhi::adapters::{FileMessageStorage, FileProfileStorage, SystemClock};
use sakhi::application::{
    AppendMessagesCommand, AppendMessagesHandler, BuildAssistantContextHandler,
    CreateProfileCommand, CreateProfileHandler, ExecuteAssistantActionHandler,
    GetCycleStatusHandler, GetProfileHandler, LogSymptomCommand, LogSymptomHandler,
    RecordPeriodStartCommand, RecordPeriodStartHandler, UpdateSettingsCommand,
    UpdateSettingsHandler,
};
use sakhi::config::{AppConfig, ConfigError};
use sakhi::domain::conversation::tools::{assistant_tools, DateArg, ToolCall};
use sakhi::domain::foundation::DomainError;
use sakhi::domain::profile::{DietPreference, Language};
use sakhi::ports::{Clock, MessageRepository, ProfileRepository};

/// Track your cycle, log symptoms and run assistant tool calls.
#[derive(Parser)]
#[command(name = "sakhi", version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the profile
    Onboard {
        /// First day of the last period (YYYY-MM-DD or "today")
        #[arg(long, value_parser = DateArg::parse)]
        last_period: DateArg,

        #[arg(long, default_value = "vegetarian")]
        diet: DietPreference,

        #[arg(long, default_value = "english")]
        language: Language,

        #[arg(long)]
        name: Option<String>,
    },

    /// Show today's cycle day, phase and next period
    Status,

    /// Record that a period started
    RecordPeriod {
        /// YYYY-MM-DD or "today"
        #[arg(value_parser = DateArg::parse)]
        date: DateArg,
    },

    /// Log a symptom for today
    LogSymptom { symptom: String },

    /// Edit profile settings
    Settings {
        /// Correct the most recent period start
        #[arg(long, value_parser = DateArg::parse)]
        last_period: Option<DateArg>,

        /// Cycle length in days (20-45)
        #[arg(long)]
        cycle_length: Option<u32>,

        #[arg(long)]
        diet: Option<DietPreference>,

        #[arg(long)]
        language: Option<Language>,

        /// Empty string clears the name
        #[arg(long)]
        name: Option<String>,
    },

    /// Show period and symptom history
    History,

    /// Execute an assistant tool call
    Tool {
        name: String,

        /// Parameters as a JSON object
        #[arg(default_value = "{}")]
        params: String,
    },

    /// Print the context that seeds a new assistant session
    Context,

    /// Print the tool declarations sent to the assistant
    Tools,

    /// Store a user message and the assistant's reply
    LogExchange { user: String, reply: String },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}", .0.message)]
    Domain(#[from] DomainError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

struct App {
    profiles: Arc<dyn ProfileRepository>,
    messages: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    config: AppConfig,
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    sakhi::logging::init_subscriber(&config.logging);

    let app = App {
        profiles: Arc::new(FileProfileStorage::new(config.storage.profile_path())),
        messages: Arc::new(FileMessageStorage::new(config.storage.messages_path())),
        clock: Arc::new(SystemClock),
        config,
        json: cli.json,
    };

    app.dispatch(cli.command).await
}

impl App {
    async fn dispatch(&self, command: Command) -> Result<(), CliError> {
        let counting = self.config.tracking.day_counting;

        match command {
            Command::Onboard {
                last_period,
                diet,
                language,
                name,
            } => {
                let handler = CreateProfileHandler::new(self.profiles.clone());
                let profile = handler
                    .handle(CreateProfileCommand {
                        name,
                        last_period_date: last_period.resolve(self.clock.today()),
                        diet_preference: diet,
                        language,
                    })
                    .await?;
                self.print(&profile, || {
                    format!("Welcome! Last period recorded as {}.", profile.last_period_date())
                })?;
            }

            Command::Status => {
                let handler = GetCycleStatusHandler::new(self.profiles.clone(), self.clock.clone(), counting);
                let view = handler.handle().await?;
                self.print(&view, || {
                    format!(
                        "Day {} - {}\nNext period: {} (in {} days)\n\n{}\n{}",
                        view.status.day,
                        view.status.phase.label(),
                        view.status.next_period_date.to_display(),
                        view.status.days_until_next,
                        view.insight_title,
                        view.insight,
                    )
                })?;
            }

            Command::RecordPeriod { date } => {
                let handler = RecordPeriodStartHandler::new(self.profiles.clone());
                let result = handler
                    .handle(RecordPeriodStartCommand {
                        date: date.resolve(self.clock.today()),
                    })
                    .await?;
                self.print(&result.profile, || {
                    format!(
                        "Period start recorded. Last period: {}, cycle length: {}.",
                        result.outcome.last_period_date, result.outcome.cycle_length
                    )
                })?;
            }

            Command::LogSymptom { symptom } => {
                let handler = LogSymptomHandler::new(self.profiles.clone(), self.clock.clone(), counting);
                let entry = handler.handle(LogSymptomCommand { symptom }).await?;
                self.print(&entry, || match entry.cycle_day() {
                    Some(day) => format!("Logged '{}' on day {}.", entry.symptom(), day),
                    None => format!("Logged '{}'.", entry.symptom()),
                })?;
            }

            Command::Settings {
                last_period,
                cycle_length,
                diet,
                language,
                name,
            } => {
                let today = self.clock.today();
                let handler = UpdateSettingsHandler::new(self.profiles.clone());
                let profile = handler
                    .handle(UpdateSettingsCommand {
                        last_period_date: last_period.map(|d| d.resolve(today)),
                        cycle_length_days: cycle_length,
                        diet_preference: diet,
                        language,
                        name,
                    })
                    .await?;
                self.print(&profile, || {
                    format!(
                        "Settings saved. Last period: {}, cycle length: {}, diet: {}, language: {}.",
                        profile.last_period_date(),
                        profile.cycle_length(),
                        profile.diet_preference(),
                        profile.language().label(),
                    )
                })?;
            }

            Command::History => {
                let profile = GetProfileHandler::new(self.profiles.clone()).handle().await?;
                self.print(&profile, || {
                    let mut out = String::from("Period starts:\n");
                    for date in profile.period_history() {
                        out.push_str(&format!("  {}\n", date.to_display()));
                    }
                    out.push_str("Symptoms:\n");
                    if profile.symptom_history().is_empty() {
                        out.push_str("  none\n");
                    }
                    for entry in profile.symptom_history() {
                        let day = entry
                            .cycle_day()
                            .map_or_else(|| "?".to_string(), |d| d.to_string());
                        out.push_str(&format!(
                            "  {} {} (Day {})\n",
                            entry.date().to_display(),
                            entry.symptom(),
                            day
                        ));
                    }
                    out.trim_end().to_string()
                })?;
            }

            Command::Tool { name, params } => {
                let call = ToolCall::new(name, serde_json::from_str(&params)?);
                let handler = ExecuteAssistantActionHandler::new(self.profiles.clone(), self.clock.clone(), counting);
                let response = handler.handle(&call).await;
                self.print(&response.to_function_response(), || response.message().to_string())?;
            }

            Command::Context => {
                let handler = BuildAssistantContextHandler::new(
                    self.profiles.clone(),
                    self.messages.clone(),
                    self.clock.clone(),
                    self.config.assistant.limits(),
                );
                let context = handler.handle().await?;
                self.print(&context, || {
                    let mut out = context.system_instruction.clone();
                    for turn in &context.history {
                        out.push_str(&format!("\n[{}] {}", turn.role, turn.text));
                    }
                    out
                })?;
            }

            Command::Tools => {
                println!("{}", serde_json::to_string_pretty(&assistant_tools().to_gemini_tools())?);
            }

            Command::LogExchange { user, reply } => {
                let handler = AppendMessagesHandler::new(self.messages.clone());
                let stored = handler.handle(AppendMessagesCommand::exchange(user, reply)).await?;
                self.print(&stored, || format!("Stored {} messages.", stored.len()))?;
            }
        }

        Ok(())
    }

    fn print<T, F>(&self, value: &T, text: F) -> Result<(), CliError>
    where
        T: serde::Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text());
        }
        Ok(())
    }
}
