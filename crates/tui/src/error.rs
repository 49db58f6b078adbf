/// Errors specific to the portfolio TUI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
