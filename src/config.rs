//! Module containing the [`Config`] struct, the API's configuration.

use std::env;
use std::error::Error as StdError;
use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;
use derive_more::Debug;
use url::Url;

use crate::authorization::AdminAllowList;

/// Configuration values for the API.
///
/// These are read from the environment on startup.
#[derive(Debug, Clone)]
pub struct Config {
	/// The ip address and port the API is going to listen on.
	#[debug("{addr}")]
	pub addr: SocketAddr,

	/// The database URL that the API will connect to.
	#[debug("*****")]
	pub database_url: Url,

	/// The public URL of the API (`api.szoniska.hu`).
	#[debug("{}", public_url.as_str())]
	pub public_url: Url,

	/// The `Domain` value expected on session cookies (`.szoniska.hu`).
	pub cookie_domain: String,

	/// The credentials identifying the administrator account.
	///
	/// This is fixed at deployment time and never derived from a mutable store.
	pub admin_allow_list: AdminAllowList,
}

impl Config {
	/// Creates a new [`Config`] object by reading from the environment.
	pub fn new() -> anyhow::Result<Self> {
		let ip_addr = parse_from_env("SZONISKA_API_IP")?;
		let port = parse_from_env("SZONISKA_API_PORT")?;
		let addr = SocketAddr::new(ip_addr, port);
		let database_url = parse_from_env("DATABASE_URL")?;
		let public_url = parse_from_env("SZONISKA_API_PUBLIC_URL")?;
		let cookie_domain = parse_from_env("SZONISKA_API_COOKIE_DOMAIN")?;
		let admin_email = parse_from_env("SZONISKA_ADMIN_EMAIL")?;
		let admin_discord_id = parse_from_env("SZONISKA_ADMIN_DISCORD_ID")?;
		let admin_allow_list = AdminAllowList::new(admin_email, admin_discord_id);

		Ok(Self {
			addr,
			database_url,
			public_url,
			cookie_domain,
			admin_allow_list,
		})
	}
}

/// Parses an environment variable into a `T`.
fn parse_from_env<T>(var: &str) -> anyhow::Result<T>
where
	T: FromStr,
	T::Err: StdError + Send + Sync + 'static,
{
	let value = env::var(var).with_context(|| format!("missing `{var}` environment variable"))?;

	if value.is_empty() {
		anyhow::bail!("`{var}` cannot be empty");
	}

	<T as FromStr>::from_str(&value).with_context(|| format!("failed to parse `{var}`"))
}
