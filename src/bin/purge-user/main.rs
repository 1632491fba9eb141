//! Maintenance tool that removes a user account and everything attached to it.
//!
//! Deletions happen in dependency order so foreign keys never get in the way: warnings first,
//! then posts, then sessions, then the account itself. Each step is unconditional; re-running
//! the tool after a partial failure finishes the job.

use anyhow::Context;
use clap::Parser;
use sqlx::MySqlPool;
use url::Url;
use uuid::Uuid;

/// Delete a user and all of their data.
#[derive(Parser)]
struct Args {
	/// The ID of the user to purge.
	user_id: Uuid,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("Failed to load `.env` file: {error}");
	}

	let args = Args::parse();

	let database_url = std::env::var("DATABASE_URL")
		.context("missing `DATABASE_URL` environment variable")?
		.parse::<Url>()
		.context("invalid `DATABASE_URL`")?;

	let database = MySqlPool::connect(database_url.as_str())
		.await
		.context("connect to database")?;

	let warnings = sqlx::query("DELETE FROM Warnings WHERE user_id = ? OR issued_by = ?")
		.bind(args.user_id)
		.bind(args.user_id)
		.execute(&database)
		.await
		.context("delete warnings")?
		.rows_affected();

	let posts = sqlx::query("DELETE FROM Posts WHERE author_id = ?")
		.bind(args.user_id)
		.execute(&database)
		.await
		.context("delete posts")?
		.rows_affected();

	let sessions = sqlx::query("DELETE FROM Sessions WHERE user_id = ?")
		.bind(args.user_id)
		.execute(&database)
		.await
		.context("delete sessions")?
		.rows_affected();

	let users = sqlx::query("DELETE FROM Users WHERE id = ?")
		.bind(args.user_id)
		.execute(&database)
		.await
		.context("delete user")?
		.rows_affected();

	println!(
		"purged user {}: {warnings} warning(s), {posts} post(s), {sessions} session(s), \
		 {users} account row(s)",
		args.user_id,
	);

	Ok(())
}
