use anyhow::Context;
use clap::Parser;

use frenzy_admin::config::{self, Insecure};
use frenzy_admin::index_store;
use frenzy_admin::indexes::IndexFile;
use frenzy_admin::store;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "frenzy.toml")]
    config: std::path::PathBuf,
    #[arg(long)]
    db: Option<String>,
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
    if let Some(db) = args.db {
        cfg.db_path = db;
    }
    let file = IndexFile::read(args.index_file.unwrap_or(cfg.index_file)).await?;
    let db = store::connect(&cfg.db_path)
        .await
        .context(format!("Failed to connect to {}", cfg.db_path))?;
    let result = index_store::deploy(&db, &file).await;
    store::close(db).await;
    let deployed = result.context("Deploying indexes failed")?;
    println!("Deployed {} indexes.", deployed.len());
    Ok(())
}
