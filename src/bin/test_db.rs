// src/bin/test_db.rs
//
// One-shot connectivity check: count the rows in "user" and report.
// Exit 0 on success, 1 on anything else.

use api_backend::db::client::{DbClient, PgClient};
use api_backend::utils::errors::DbError;

/// Runs the count and hands the connection back no matter how the
/// count went.
async fn check<C: DbClient>(client: &C) -> Result<i64, DbError> {
    let outcome = client.count("user").await;
    client.disconnect().await;
    outcome
}

#[tokio::main]
async fn main() {
    let client = match PgClient::connect().await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("DB test failed: {e}");
            std::process::exit(1);
        }
    };

    match check(&client).await {
        Ok(count) => println!("DB connected, user count = {count}"),
        Err(e) => {
            eprintln!("DB test failed: {e}");
            std::process::exit(1);
        }
    }
}
