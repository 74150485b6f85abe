use color_eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};

/// Set up the terminal: raw mode, alternate screen, hidden cursor.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    if let Err(e) = enable_raw_mode() {
        return Err(color_eyre::eyre::eyre!("Failed to enable raw mode: {e}"));
    }

    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        // Clean up raw mode before bailing
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enter alternate screen: {e}"
        ));
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(color_eyre::eyre::eyre!("Failed to create terminal: {e}"));
        }
    };

    // Clearing or hiding the cursor failing is not fatal
    if terminal.clear().is_err() {
        // Continue with whatever is on screen
    }
    let _ = execute!(std::io::stdout(), cursor::Hide);

    Ok(terminal)
}

/// Restore the terminal, tolerating partial failures so a broken teardown
/// never masks the real error.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut stdout_handle = stdout();

    // Cursor first: works in both normal and alternate screen
    let _ = execute!(stdout_handle, cursor::Show);

    if alternate_screen {
        let _ = execute!(stdout_handle, LeaveAlternateScreen);
    }

    if raw_mode {
        let _ = disable_raw_mode();
    }

    // Force a newline so the shell prompt lands cleanly
    let _ = execute!(stdout_handle, cursor::MoveToNextLine(1));
    let _ = stdout_handle.flush();
}
