mod api;
mod config;
mod error;
mod fetch;
mod report;
mod types;

use anyhow::Result;

use crate::config::Config;
use crate::fetch::HeroClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Console report goes to stdout; logs stay quiet unless RUST_LOG asks.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    #[cfg(target_family = "windows")]
    {
        if colored::control::set_virtual_terminal(true).is_err() {
            eprintln!("failed to print colorfully.")
        };
    }

    let config = Config::from_env();
    let client = HeroClient::new(&config)?;

    let mut rng = rand::thread_rng();
    let mut out = std::io::stdout();
    report::run(&client, &mut rng, &mut out).await?;

    Ok(())
}
