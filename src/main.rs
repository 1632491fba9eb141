use anyhow::Context;
use szoniska_api::Config;

mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("Failed to load `.env` file: {error}");
	}

	let config = Config::new().context("load config")?;

	logging::init();

	szoniska_api::run(config).await
}
