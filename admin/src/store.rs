use rand::distributions::Alphanumeric;
use rand::Rng;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

const ID_LEN: usize = 20;

/// Client-side document id, same shape as the ids the mobile app generates.
pub fn new_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(char::from)
        .collect()
}

pub async fn connect(db_path: &str) -> Result<DatabaseConnection, DbErr> {
    let mut db_options = ConnectOptions::new(db_path);
    db_options.max_connections(8).sqlx_logging(false);
    Database::connect(db_options).await
}

// Takes the handle by value so nothing can use it afterwards.
pub async fn close(db: DatabaseConnection) {
    let _ = db
        .close()
        .await
        .inspect_err(|e| log::error!("Failed to close the database: {e}"));
}
