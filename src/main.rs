mod animation;
mod api;
mod carousel;
mod cli_messages;
mod config;
mod consts;
mod enrollment;
mod environment;
mod events;
mod i18n;
mod lesson;
mod logging;
mod models;
mod network;
mod polling;
mod session;
mod toast;
mod ui;
mod validation;

use crate::api::ApiClient;
use crate::config::{Preferences, Theme, get_config_path};
use crate::enrollment::{EnrollError, EnrollmentForm, submit_enrollment};
use crate::environment::Environment;
use crate::i18n::{Language, Text, tr};
use crate::lesson::{complete_lesson, describe_completion};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::validation::Field;
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the live learning dashboard
    Start {
        /// Print updates to the console instead of drawing the dashboard
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,

        /// Disable background colors in the dashboard
        #[arg(long = "no-background", action = ArgAction::SetTrue)]
        no_background: bool,
    },
    /// Send an enrollment request for a course
    Enroll {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        email: String,

        /// Optional note for the admissions team
        #[arg(long, default_value = "")]
        message: String,

        #[arg(long, value_name = "COURSE_ID")]
        course_id: u64,
    },
    /// Mark a lesson as completed
    CompleteLesson {
        #[arg(long, value_name = "LESSON_ID")]
        lesson_id: u64,
    },
    /// Show or change saved preferences
    Prefs {
        /// light or dark
        #[arg(long)]
        theme: Option<Theme>,

        /// ar or en
        #[arg(long)]
        language: Option<Language>,

        /// Enable or disable the periodic full refresh
        #[arg(long)]
        auto_refresh: Option<bool>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log::set_max_level(logging::LogLevel::threshold().into());
    let environment = Environment::from_env();
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            headless,
            no_background,
        } => start(environment, &config_path, headless, !no_background).await,
        Command::Enroll {
            name,
            phone,
            email,
            message,
            course_id,
        } => {
            let form = EnrollmentForm {
                name,
                phone,
                email,
                message,
                course_id,
            };
            enroll(environment, &config_path, form).await
        }
        Command::CompleteLesson { lesson_id } => {
            mark_lesson_complete(environment, &config_path, lesson_id).await
        }
        Command::Prefs {
            theme,
            language,
            auto_refresh,
        } => update_preferences(&config_path, theme, language, auto_refresh),
    }
}

/// Loads saved preferences, warning when an existing file cannot be used.
fn load_preferences(config_path: &Path) -> Preferences {
    match Preferences::load_from_file(config_path) {
        Ok(preferences) => preferences,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Preferences::default(),
        Err(e) => {
            print_cmd_warn!(
                "Ignoring preferences file",
                "{}: {}",
                config_path.display(),
                e
            );
            Preferences::default()
        }
    }
}

/// Starts the dashboard session in TUI or headless mode.
async fn start(
    env: Environment,
    config_path: &Path,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    let session = setup_session(env, Some(config_path.to_path_buf())).await?;
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}

async fn enroll(
    env: Environment,
    config_path: &Path,
    form: EnrollmentForm,
) -> Result<(), Box<dyn Error>> {
    let language = load_preferences(config_path).language;
    let client = ApiClient::new(env)?;

    match submit_enrollment(&client, &form, language).await {
        Ok(_) => {
            print_cmd_success!(tr(language, Text::EnrollmentSent), "course {}", form.course_id);
            Ok(())
        }
        Err(EnrollError::Invalid(errors)) => {
            for field in [Field::Name, Field::Phone, Field::Email, Field::Message] {
                if let Some(error) = errors.get(field) {
                    print_cmd_error!(&field.to_string(), error.message.as_str());
                }
            }
            Err(EnrollError::Invalid(errors).into())
        }
        Err(e) => {
            print_cmd_error!(&e.to_string());
            Err(e.into())
        }
    }
}

async fn mark_lesson_complete(
    env: Environment,
    config_path: &Path,
    lesson_id: u64,
) -> Result<(), Box<dyn Error>> {
    let language = load_preferences(config_path).language;
    let client = ApiClient::new(env)?;
    match complete_lesson(&client, lesson_id, language).await {
        Ok(completion) => {
            print_cmd_success!(
                tr(language, Text::LessonCompleted),
                "{}",
                describe_completion(&completion, language)
            );
            Ok(())
        }
        Err(e) => {
            print_cmd_error!(&e.message, e.source.to_string().as_str());
            Err(e.into())
        }
    }
}

/// Applies the given preference changes, or prints the current ones when none are given.
fn update_preferences(
    config_path: &Path,
    theme: Option<Theme>,
    language: Option<Language>,
    auto_refresh: Option<bool>,
) -> Result<(), Box<dyn Error>> {
    let mut preferences = load_preferences(config_path);

    if theme.is_none() && language.is_none() && auto_refresh.is_none() {
        print_cmd_info!(
            "Preferences",
            "theme={} language={} autoRefresh={}",
            preferences.theme,
            preferences.language,
            preferences.auto_refresh
        );
        return Ok(());
    }

    if let Some(theme) = theme {
        preferences.theme = theme;
    }
    if let Some(language) = language {
        preferences.language = language;
    }
    if let Some(auto_refresh) = auto_refresh {
        preferences.auto_refresh = auto_refresh;
    }

    preferences
        .save(config_path)
        .map_err(|e| format!("Failed to save preferences: {}", e))?;
    print_cmd_success!("Preferences saved", "{}", config_path.display());
    Ok(())
}
