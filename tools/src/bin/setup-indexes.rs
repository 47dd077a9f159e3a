use anyhow::{anyhow, Context};
use clap::Parser;

use frenzy_admin::config::{self, Insecure};
use frenzy_admin::index_store::SqliteIndexStore;
use frenzy_admin::indexes::{self, IndexFile};
use frenzy_admin::store;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "frenzy.toml")]
    config: std::path::PathBuf,
    #[arg(long)]
    db: Option<String>,
    /// Overrides index_file from the config.
    #[arg(long, short = 'f')]
    index_file: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx", log::LevelFilter::Error)
        .init();
    let args = Args::parse();
    let mut cfg = config::load(&args.config, Insecure::Allow).await?;
    if let Some(db) = &args.db {
        cfg.db_path = db.clone();
    }
    let index_path = args.index_file.clone().unwrap_or(cfg.index_file);
    // A malformed file stops everything before the store is touched.
    let file = IndexFile::read(&index_path).await?;

    let db = store::connect(&cfg.db_path)
        .await
        .context(format!("Failed to connect to {}", cfg.db_path))?;
    let runner = SqliteIndexStore::new(db.clone());
    let report = indexes::provision(&runner, &file).await;
    drop(runner);
    store::close(db).await;

    println!();
    println!("IMPORTANT: To complete index creation, please run:");
    println!(
        "{}",
        indexes::deploy_command(&args.config, args.db.as_deref(), args.index_file.as_deref())
    );
    println!();
    println!(
        "This will deploy all indexes defined in {}",
        index_path.display()
    );
    if !report.is_success() {
        return Err(anyhow!(
            "{} of {} indexes failed",
            report.failed.len(),
            file.indexes.len()
        ));
    }
    Ok(())
}
