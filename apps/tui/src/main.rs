mod app;
mod cli;
mod config;
mod domain;
mod event;
mod places;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = cli::CliArgs::parse();
    args.apply_env_overrides();

    // Resolve configuration once; the clients never read the environment
    let config = config::init_app_config()?;
    let mut app = App::new(config);

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        // Run in headless mode
        return event::run_headless(&mut app, args.json).await;
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    // Return the result
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
