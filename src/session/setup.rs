//! Session setup and initialization

use crate::api::ApiClient;
use crate::config::Preferences;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::environment::Environment;
use crate::events::UiMessage;
use crate::polling::core::EventSender;
use crate::polling::{PollSchedule, Poller};
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Messages from the poll tasks
    pub message_receiver: mpsc::Receiver<UiMessage>,
    /// Shutdown sender to stop the UI loop
    pub shutdown_sender: broadcast::Sender<()>,
    /// Running poll timers
    pub poller: Poller,
    pub environment: Environment,
    pub preferences: Preferences,
    /// Where preference toggles are saved, if a home directory exists
    pub preferences_path: Option<PathBuf>,
}

/// Sets up a polling session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Loads saved preferences
/// 2. Builds the HTTP client for the environment
/// 3. Arms the poll timers and requests the first payloads
/// 4. Returns session data for mode-specific handling
pub async fn setup_session(
    env: Environment,
    preferences_path: Option<PathBuf>,
) -> Result<SessionData, Box<dyn Error>> {
    let preferences = preferences_path
        .as_deref()
        .map(Preferences::load_or_default)
        .unwrap_or_default();

    let client = ApiClient::new(env.clone())?;

    let (sender, message_receiver) = mpsc::channel::<UiMessage>(EVENT_QUEUE_SIZE);
    let mut poller = Poller::new(
        Arc::new(client),
        EventSender::new(sender),
        PollSchedule::default(),
        preferences.auto_refresh,
    );
    poller.start();
    poller.load_initial();

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    Ok(SessionData {
        message_receiver,
        shutdown_sender,
        poller,
        environment: env,
        preferences,
        preferences_path,
    })
}
