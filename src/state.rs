//! The API's main application state.
//!
//! This is initialized once on startup, and then passed around the application by axum.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use derive_more::Debug;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool, Transaction};

use crate::{Config, Result};

/// The main application state.
///
/// This is cloned into every router; both fields are cheap handles.
#[derive(Debug, Clone)]
pub struct State {
	/// The API configuration.
	config: Arc<Config>,

	/// Connection pool to the backing database.
	#[debug(skip)]
	database: Pool<MySql>,
}

impl State {
	/// Creates a new [`State`] by connecting to the database.
	pub async fn new(config: Config) -> anyhow::Result<Self> {
		let database = MySqlPoolOptions::new()
			.acquire_timeout(Duration::from_secs(10))
			.connect(config.database_url.as_str())
			.await
			.context("connect to database")?;

		Ok(Self {
			config: Arc::new(config),
			database,
		})
	}

	/// Returns the API configuration.
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Returns a reference to the database connection pool.
	pub fn database(&self) -> &Pool<MySql> {
		&self.database
	}

	/// Begins a new database transaction.
	pub async fn transaction(&self) -> Result<Transaction<'static, MySql>> {
		self.database.begin().await.map_err(Into::into)
	}
}
