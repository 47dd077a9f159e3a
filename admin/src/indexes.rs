use anyhow::Context;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Order {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArrayConfig {
    Contains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FieldMode {
    Order {
        order: Order,
    },
    Array {
        #[serde(rename = "arrayConfig")]
        array_config: ArrayConfig,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexField {
    pub field_path: String,
    #[serde(flatten)]
    pub mode: FieldMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSpec {
    pub collection_group: String,
    #[serde(default)]
    pub query_scope: Option<String>,
    pub fields: Vec<IndexField>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexFile {
    pub indexes: Vec<IndexSpec>,
    #[serde(default)]
    pub field_overrides: Vec<serde_json::Value>,
}

impl IndexFile {
    pub fn parse(content: &str) -> anyhow::Result<IndexFile> {
        serde_json::from_str(content).context("Malformed index specification")
    }

    pub async fn read(path: impl AsRef<std::path::Path>) -> anyhow::Result<IndexFile> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .context(format!("Failed to read index file {}", path.display()))?;
        Self::parse(&content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Direction {
    #[display(fmt = "asc")]
    Asc,
    #[display(fmt = "desc")]
    Desc,
}

impl From<Order> for Direction {
    fn from(order: Order) -> Self {
        match order {
            Order::Ascending => Direction::Asc,
            Order::Descending => Direction::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Clause {
    #[display(fmt = "where({:?}, \"array-contains\", {:?})", field, value)]
    ArrayContains { field: String, value: String },
    #[display(fmt = "orderBy({:?}, \"{}\")", field, direction)]
    OrderBy { field: String, direction: Direction },
}

impl Clause {
    pub fn field(&self) -> &str {
        match self {
            Clause::ArrayContains { field, .. } | Clause::OrderBy { field, .. } => field,
        }
    }
}

const PLACEHOLDER_VALUE: &str = "dummy";

/// A query shaped like an index so that running it asks the store for that
/// index. The result rows are never looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerQuery {
    pub collection: String,
    pub clauses: Vec<Clause>,
    pub limit: u64,
}

impl TriggerQuery {
    pub fn for_index(spec: &IndexSpec) -> TriggerQuery {
        let clauses = spec
            .fields
            .iter()
            .map(|f| match f.mode {
                FieldMode::Array {
                    array_config: ArrayConfig::Contains,
                } => Clause::ArrayContains {
                    field: f.field_path.clone(),
                    value: PLACEHOLDER_VALUE.to_owned(),
                },
                FieldMode::Order { order } => Clause::OrderBy {
                    field: f.field_path.clone(),
                    direction: order.into(),
                },
            })
            .collect();
        TriggerQuery {
            collection: spec.collection_group.clone(),
            clauses,
            limit: 1,
        }
    }
}

impl std::fmt::Display for TriggerQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.collection)?;
        for c in self.clauses.iter() {
            write!(f, ".{c}")?;
        }
        write!(f, ".limit({})", self.limit)
    }
}

pub const CODE_INVALID_ARGUMENT: i32 = 3;
pub const CODE_FAILED_PRECONDITION: i32 = 9;
pub const CODE_INTERNAL: i32 = 13;

#[derive(Debug, Display)]
pub enum StoreError {
    #[display(fmt = "FAILED_PRECONDITION: {_0}")]
    FailedPrecondition(String),
    #[display(fmt = "INVALID_ARGUMENT: {_0}")]
    InvalidArgument(String),
    #[display(fmt = "INTERNAL: {_0}")]
    Db(sea_orm::DbErr),
}

impl std::error::Error for StoreError {}

impl StoreError {
    pub fn code(&self) -> i32 {
        match self {
            StoreError::FailedPrecondition(_) => CODE_FAILED_PRECONDITION,
            StoreError::InvalidArgument(_) => CODE_INVALID_ARGUMENT,
            StoreError::Db(_) => CODE_INTERNAL,
        }
    }

    pub fn requires_index(&self) -> bool {
        matches!(self, StoreError::FailedPrecondition(msg) if msg.contains("requires an index"))
    }
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(e: sea_orm::DbErr) -> Self {
        StoreError::Db(e)
    }
}

#[async_trait::async_trait]
pub trait QueryRunner: Send + Sync {
    /// Returns the number of matched documents.
    async fn run(&self, query: &TriggerQuery) -> Result<usize, StoreError>;
}

#[derive(Debug)]
pub enum Outcome {
    // The query ran, so the index is already there.
    Triggered,
    // The store rejected the query for lack of the index and recorded a request.
    Requested,
    Failed(StoreError),
}

impl Outcome {
    pub fn classify(result: Result<usize, StoreError>) -> Outcome {
        match result {
            Ok(_) => Outcome::Triggered,
            Err(e) if e.code() == CODE_FAILED_PRECONDITION && e.requires_index() => {
                Outcome::Requested
            }
            Err(e) => Outcome::Failed(e),
        }
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub triggered: Vec<String>,
    pub requested: Vec<String>,
    pub failed: Vec<(String, StoreError)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub const DEPLOY_HINT: &str = "deploy-indexes";

/// The finalize command, carrying the same overrides the provisioning run
/// was given so both steps target one database and one index file.
pub fn deploy_command(
    config: &std::path::Path,
    db: Option<&str>,
    index_file: Option<&std::path::Path>,
) -> String {
    let mut command = format!("{DEPLOY_HINT} --config {}", config.display());
    if let Some(db) = db {
        command.push_str(&format!(" --db {db}"));
    }
    if let Some(index_file) = index_file {
        command.push_str(&format!(" -f {}", index_file.display()));
    }
    command
}

/// Issues one trigger query per index. Failures are logged and do not stop
/// the remaining indexes. Nothing here verifies that an index got built.
pub async fn provision(runner: &dyn QueryRunner, file: &IndexFile) -> Report {
    log::info!("Creating indexes...");
    let mut report = Report::default();
    for spec in file.indexes.iter() {
        let collection = &spec.collection_group;
        log::info!("Creating index for collection: {collection}");
        log::info!(
            "Fields: {}",
            serde_json::to_string_pretty(&spec.fields).unwrap_or_default()
        );
        let query = TriggerQuery::for_index(spec);
        log::debug!("Trigger query: {query}");
        match Outcome::classify(runner.run(&query).await) {
            Outcome::Triggered => {
                log::info!("Index creation triggered for {collection}");
                report.triggered.push(collection.clone());
            }
            Outcome::Requested => {
                log::info!("Index creation request sent for {collection}");
                report.requested.push(collection.clone());
            }
            Outcome::Failed(e) => {
                log::error!("Error creating index for {collection}: {e}");
                report.failed.push((collection.clone(), e));
            }
        }
    }
    report
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Mutex;

    const SAMPLE: &str = r#"{
      "indexes": [
        {
          "collectionGroup": "matches",
          "queryScope": "COLLECTION",
          "fields": [
            { "fieldPath": "status", "order": "ASCENDING" },
            { "fieldPath": "date", "order": "DESCENDING" }
          ]
        },
        {
          "collectionGroup": "matches",
          "fields": [
            { "fieldPath": "registeredUsers", "arrayConfig": "CONTAINS" },
            { "fieldPath": "date", "order": "ASCENDING" }
          ]
        }
      ],
      "fieldOverrides": []
    }"#;

    fn single(collection: &str, field: &str, order: Order) -> IndexSpec {
        IndexSpec {
            collection_group: collection.to_owned(),
            query_scope: None,
            fields: vec![IndexField {
                field_path: field.to_owned(),
                mode: FieldMode::Order { order },
            }],
        }
    }

    #[test]
    fn test_parse() {
        let file = IndexFile::parse(SAMPLE).expect("Failed to parse sample");
        assert_eq!(file.indexes.len(), 2);
        assert_eq!(file.indexes[0].query_scope.as_deref(), Some("COLLECTION"));
        assert_eq!(
            file.indexes[0].fields[1].mode,
            FieldMode::Order {
                order: Order::Descending
            }
        );
        assert_eq!(
            file.indexes[1].fields[0].mode,
            FieldMode::Array {
                array_config: ArrayConfig::Contains
            }
        );
    }

    #[test]
    fn test_parse_malformed() {
        assert!(IndexFile::parse("{\"indexes\": [{\"fields\": []}]}").is_err());
        assert!(IndexFile::parse(
            r#"{"indexes": [{"collectionGroup": "matches", "fields": [{"fieldPath": "status", "order": "SIDEWAYS"}]}]}"#
        )
        .is_err());
        assert!(IndexFile::parse("not json").is_err());
    }

    #[test]
    fn test_single_field_query() {
        let query = TriggerQuery::for_index(&single("matches", "status", Order::Ascending));
        assert_eq!(query.collection, "matches");
        assert_eq!(
            query.clauses,
            vec![Clause::OrderBy {
                field: "status".to_owned(),
                direction: Direction::Asc
            }]
        );
        assert_eq!(query.limit, 1);
        assert_eq!(
            query.to_string(),
            r#"matches.orderBy("status", "asc").limit(1)"#
        );
    }

    #[test]
    fn test_array_contains_query() {
        let file = IndexFile::parse(SAMPLE).unwrap();
        let query = TriggerQuery::for_index(&file.indexes[1]);
        assert_eq!(
            query.to_string(),
            r#"matches.where("registeredUsers", "array-contains", "dummy").orderBy("date", "asc").limit(1)"#
        );
    }

    #[test]
    fn test_deploy_command_keeps_overrides() {
        let config = std::path::Path::new("frenzy.toml");
        assert_eq!(
            deploy_command(config, None, None),
            "deploy-indexes --config frenzy.toml"
        );
        assert_eq!(
            deploy_command(
                config,
                Some("sqlite://other.sqlite"),
                Some(std::path::Path::new("custom.indexes.json"))
            ),
            "deploy-indexes --config frenzy.toml --db sqlite://other.sqlite -f custom.indexes.json"
        );
    }

    #[test]
    fn test_classify() {
        assert!(matches!(Outcome::classify(Ok(0)), Outcome::Triggered));
        assert!(matches!(
            Outcome::classify(Err(StoreError::FailedPrecondition(
                "The query requires an index.".to_owned()
            ))),
            Outcome::Requested
        ));
        assert!(matches!(
            Outcome::classify(Err(StoreError::FailedPrecondition(
                "Transaction aborted.".to_owned()
            ))),
            Outcome::Failed(_)
        ));
        assert!(matches!(
            Outcome::classify(Err(StoreError::InvalidArgument(
                "The query requires an index.".to_owned()
            ))),
            Outcome::Failed(_)
        ));
    }

    struct FakeRunner {
        queries: Mutex<Vec<TriggerQuery>>,
    }

    #[async_trait::async_trait]
    impl QueryRunner for FakeRunner {
        async fn run(&self, query: &TriggerQuery) -> Result<usize, StoreError> {
            self.queries.lock().unwrap().push(query.clone());
            match query.collection.as_str() {
                "matches" => Err(StoreError::FailedPrecondition(
                    "The query requires an index. Request it here.".to_owned(),
                )),
                "games" => Ok(1),
                _ => Err(StoreError::InvalidArgument("unknown collection".to_owned())),
            }
        }
    }

    #[tokio::test]
    async fn test_provision_continues_after_failure() {
        let file = IndexFile {
            indexes: vec![
                single("bogus", "x", Order::Ascending),
                single("matches", "status", Order::Ascending),
                single("games", "genre", Order::Descending),
            ],
            field_overrides: vec![],
        };
        let runner = FakeRunner {
            queries: Mutex::new(vec![]),
        };
        let report = provision(&runner, &file).await;
        assert_eq!(report.requested, vec!["matches".to_owned()]);
        assert_eq!(report.triggered, vec!["games".to_owned()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "bogus");
        assert!(!report.is_success());

        let queries = runner.queries.lock().unwrap();
        assert_eq!(queries.len(), 3);
        assert_eq!(
            queries[1].clauses,
            vec![Clause::OrderBy {
                field: "status".to_owned(),
                direction: Direction::Asc
            }]
        );
        assert!(queries.iter().all(|q| q.limit == 1));
    }
}
