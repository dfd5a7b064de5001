//! Smoke console: log in, pull every list in parallel, print a summary.
//!
//! Useful for checking a backend deployment from a terminal; the real
//! presentation layer consumes the library crate instead.

use std::sync::Arc;

use tzts::api::ApiClient;
use tzts::config::AppConfig;
use tzts::errors::AppError;
use tzts::session::SessionContext;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env();
    let username = config
        .username
        .clone()
        .ok_or_else(|| AppError::Config("TZTS_USERNAME is not set".to_string()))?;
    let password = config
        .password
        .clone()
        .ok_or_else(|| AppError::Config("TZTS_PASSWORD is not set".to_string()))?;

    let session = Arc::new(SessionContext::new());
    let api = ApiClient::new(config.base_url.clone(), session);

    api.login(&username, &password).await?;

    let (meetings, visits, rooms, users) = tokio::try_join!(
        api.list_meetings(),
        api.list_visits(),
        api.list_rooms(),
        api.list_users(),
    )?;

    println!(
        "{} meetings, {} visits, {} rooms, {} users at {}",
        meetings.len(),
        visits.len(),
        rooms.len(),
        users.len(),
        config.base_url
    );

    println!("\nMeetings:");
    for m in &meetings {
        println!(
            "  #{} {} | {} | {} | {}{}",
            m.id,
            m.title,
            m.start_time,
            m.room.name,
            m.status.label(),
            m.duration_display()
                .map(|d| format!(" | {d}"))
                .unwrap_or_default(),
        );
    }

    println!("\nVisits:");
    for v in &visits {
        println!(
            "  #{} {} | {} | host {} | {}{}",
            v.id,
            v.reason,
            v.start_time,
            v.host.full_name(),
            v.status.label(),
            v.duration_display()
                .map(|d| format!(" | {d}"))
                .unwrap_or_default(),
        );
    }

    Ok(())
}
