//! Backfill slugs for records imported before slug assignment existed.
//!
//! Safe to re-run: only rows with an empty slug are touched, and every slug
//! assigned in a batch joins the in-memory set so the batch cannot collide
//! with itself.

use anyhow::Result;
use sqlx::PgPool;
use std::collections::HashSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tusker_core::{config::AppConfig, domain::slug, infrastructure::database};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let pool = database::init_pool(config.database_url()).await?;

    tracing::info!("starting slug backfill");

    let (updated, skipped) = backfill(&pool, "articles", "title").await?;
    tracing::info!(updated, skipped, "article backfill finished");

    let (updated, skipped) = backfill(&pool, "tuskers", "name").await?;
    tracing::info!(updated, skipped, "tusker backfill finished");

    Ok(())
}

async fn backfill(pool: &PgPool, table: &str, source_column: &str) -> Result<(u64, u64)> {
    let pending: Vec<(i64, String)> = sqlx::query_as(&format!(
        "SELECT id, {source_column} FROM {table} WHERE slug = ''"
    ))
    .fetch_all(pool)
    .await?;

    if pending.is_empty() {
        tracing::info!(table, "no rows need slug backfill");
        return Ok((0, 0));
    }

    let taken: Vec<(String,)> =
        sqlx::query_as(&format!("SELECT slug FROM {table} WHERE slug <> ''"))
            .fetch_all(pool)
            .await?;
    let mut existing: HashSet<String> = taken.into_iter().map(|(slug,)| slug).collect();

    let mut updated = 0u64;
    let mut skipped = 0u64;

    for (id, text) in pending {
        let base = slug::normalize(&text);
        if base.is_empty() {
            tracing::warn!(table, id, source = %text, "could not derive a slug, skipping");
            skipped += 1;
            continue;
        }

        let unique = slug::make_unique(&base, &existing);
        sqlx::query(&format!("UPDATE {table} SET slug = $1 WHERE id = $2"))
            .bind(&unique)
            .bind(id)
            .execute(pool)
            .await?;

        tracing::info!(table, id, slug = %unique, "assigned slug");
        existing.insert(unique);
        updated += 1;
    }

    Ok((updated, skipped))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    subscriber.try_init().ok();
}
