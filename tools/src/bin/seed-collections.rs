use anyhow::Context;
use clap::Parser;
use sea_orm_migration::MigratorTrait;

use frenzy_admin::config::{self, Insecure};
use frenzy_admin::{seed, store};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "frenzy.toml")]
    config: std::path::PathBuf,
    /// Overrides db_path from the config.
    #[arg(long)]
    db: Option<String>,
    /// Apply pending migrations before seeding.
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx", log::LevelFilter::Error)
        .init();
    let args = Args::parse();
    // The session setting is not used by this tool.
    let mut cfg = config::load(&args.config, Insecure::Allow).await?;
    if let Some(db) = args.db {
        cfg.db_path = db;
    }
    let db = store::connect(&cfg.db_path)
        .await
        .context(format!("Failed to connect to {}", cfg.db_path))?;
    let result: anyhow::Result<seed::SeededIds> = async {
        if args.migrate {
            migration::Migrator::up(&db, None)
                .await
                .context("Applying migrations failed")?;
        }
        seed::seed_collections(&db, &cfg.seed)
            .await
            .context("Error setting up collections")
    }
    .await;
    store::close(db).await;
    let ids = result?;
    log::info!("All collections created successfully!");
    println!("{}", serde_json::json!({
        "gameId": ids.game_id,
        "matchId": ids.match_id,
        "registrationId": ids.registration_id,
        "notificationId": ids.notification_id,
        "transactionId": ids.transaction_id,
    }));
    Ok(())
}
