use {
    clap::Parser,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(name = "vitae", about = "vitae — terminal portfolio")]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Print the skills section as JSON and exit instead of launching the
    /// TUI.
    #[arg(long, default_value_t = false)]
    dump: bool,
}

/// Initialise tracing. Logs go to stderr so they never corrupt the
/// alternate-screen TUI; they surface once the terminal is restored.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    if cli.dump {
        let section = vitae_content::profile::skills_section();
        println!("{}", serde_json::to_string_pretty(&section)?);
        return Ok(());
    }

    vitae_tui::run_tui().await?;
    Ok(())
}
