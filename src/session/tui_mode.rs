//! Interactive dashboard session

use super::SessionData;
use super::messages::{print_session_exit_success, print_session_shutdown, print_session_starting};
use crate::ui;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::error::Error;
use std::io::{self, Stdout};

type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode and the alternate screen, restored on drop even if the UI loop errors.
struct TerminalGuard {
    terminal: DashboardTerminal,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_session_starting("dashboard", &session.environment);

    let ctrl_c_shutdown = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = ctrl_c_shutdown.send(());
        }
    });

    let app = ui::App::new(
        session.environment,
        session.message_receiver,
        session.shutdown_sender,
        session.poller,
        session.preferences,
        session.preferences_path,
        with_background,
    );

    {
        let mut guard = TerminalGuard::enter()?;
        ui::run(&mut guard.terminal, app).await?;
    }

    print_session_shutdown();
    print_session_exit_success();
    Ok(())
}
