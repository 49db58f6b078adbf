//! Terminal UI for the vitae portfolio.
//!
//! Renders the "Skills & Expertise" section as a scrollable view with
//! entrance animations: skill bars fill to their proficiency level, the
//! technology badges fade in staggered, and the achievement numbers count
//! up the first time they scroll into view.

mod app;
mod counter;
pub mod error;
mod reveal;
mod state;
mod ui;

pub use {app::App, counter::Counter, error::Error};

/// Entry point for the portfolio TUI.
pub async fn run_tui() -> Result<(), Error> {
    let section = vitae_content::profile::skills_section();

    // Enable focus-change reporting so we can redraw on tab-switch.
    crossterm::execute!(std::io::stdout(), crossterm::event::EnableFocusChange)
        .map_err(Error::Terminal)?;

    let terminal = ratatui::init();
    let result = App::new(section).run(terminal).await;
    ratatui::restore();

    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableFocusChange);

    result
}
