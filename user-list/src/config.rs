use clap::Parser;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use users_core::DEFAULT_BASE_URL;

#[derive(Debug, Parser)]
#[command(name = "user-list")]
#[command(about = "Fetch the user list and render it as HTML")]
pub struct Config {
    /// Base URL of the API serving `GET /users`
    #[arg(long, env = "USER_LIST_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log level
    #[arg(short, long, default_value = "info", value_parser = clap::value_parser!(Level))]
    pub log_level: Level,
}

impl Config {
    /// Filter from `RUST_LOG`, falling back to `--log-level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| self.level_filter())
    }

    fn level_filter(&self) -> EnvFilter {
        EnvFilter::default().add_directive(LevelFilter::from_level(self.log_level).into())
    }
}
