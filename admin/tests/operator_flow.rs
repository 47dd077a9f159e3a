use sea_orm::{EntityTrait, PaginatorTrait};
use sea_orm_migration::MigratorTrait;

use frenzy_admin::config::{self, Insecure};
use frenzy_admin::index_store::{self, SqliteIndexStore};
use frenzy_admin::indexes::{self, IndexFile};
use frenzy_admin::{seed, store};
use frenzy_db as db;

#[tokio::test]
async fn seed_and_index_on_disk() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .is_test(true)
        .filter_module("sqlx", log::LevelFilter::Error)
        .try_init();
    let dir = tempdir::TempDir::new("frenzy-test").expect("Failed to create test dir");
    let db_url = format!(
        "sqlite://{}/db.sqlite?mode=rwc",
        dir.path().to_str().unwrap()
    );
    let index_file = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("firestore.indexes.json");
    let config_path = dir.path().join("frenzy.toml");
    tokio::fs::write(
        &config_path,
        format!(
            "db_path = {db_url:?}\nindex_file = {:?}\n[seed]\nuser_id = \"operator\"\n",
            index_file.to_str().unwrap()
        ),
    )
    .await
    .expect("Failed to write config");

    let cfg = config::load(&config_path, Insecure::Deny)
        .await
        .expect("Failed to load config");
    let db = store::connect(&cfg.db_path)
        .await
        .expect("Failed to connect to the database");
    migration::Migrator::up(&db, None)
        .await
        .expect("Applying initial DB migrations failed");

    let first = seed::seed_collections(&db, &cfg.seed)
        .await
        .expect("First seeding failed");
    seed::seed_collections(&db, &cfg.seed)
        .await
        .expect("Second seeding failed");
    let total = db::games::Entity::find().count(&db).await.unwrap()
        + db::matches::Entity::find().count(&db).await.unwrap()
        + db::match_registrations::Entity::find()
            .count(&db)
            .await
            .unwrap()
        + db::notifications::Entity::find().count(&db).await.unwrap()
        + db::transactions::Entity::find().count(&db).await.unwrap();
    assert_eq!(total, 10);
    let registration = db::match_registrations::Entity::find_by_id(first.registration_id)
        .one(&db)
        .await
        .unwrap()
        .expect("Registration not found");
    assert_eq!(registration.user_id, "operator");

    let file = IndexFile::read(&cfg.index_file)
        .await
        .expect("Failed to read the shipped index file");
    let runner = SqliteIndexStore::new(db.clone());
    let report = indexes::provision(&runner, &file).await;
    assert!(report.is_success(), "Failures: {:?}", report.failed);
    assert_eq!(report.requested.len(), file.indexes.len());

    index_store::deploy(&db, &file)
        .await
        .expect("Deploying indexes failed");
    let report = indexes::provision(&runner, &file).await;
    assert!(report.is_success(), "Failures: {:?}", report.failed);
    assert_eq!(report.triggered.len(), file.indexes.len());

    store::close(db).await;
}
