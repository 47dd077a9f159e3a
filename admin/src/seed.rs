use sea_orm::prelude::TimeDateTimeWithTimeZone;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, TransactionError, TransactionTrait};

use crate::config::SeedConfig;
use crate::store::new_id;
use frenzy_db as db;
use frenzy_db::common::{PaymentStatus, StringList};

#[derive(Debug)]
pub struct SeedError {
    pub context: String,
    pub db_error: DbErr,
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.context, self.db_error)
    }
}

impl std::error::Error for SeedError {}

fn seed_err(context: &str) -> impl FnOnce(DbErr) -> SeedError + '_ {
    move |db_error| SeedError {
        context: context.to_owned(),
        db_error,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededIds {
    pub game_id: String,
    pub match_id: String,
    pub registration_id: String,
    pub notification_id: String,
    pub transaction_id: String,
}

/// Writes one sample record to each collection, every record pointing at the
/// ones created before it. All writes share one transaction, so a failure
/// leaves nothing behind. Running twice creates a second, independent set.
pub async fn seed_collections(
    db: &DatabaseConnection,
    cfg: &SeedConfig,
) -> Result<SeededIds, SeedError> {
    let user_id = cfg.user_id.clone();
    db.transaction(|txn| {
        Box::pin(async move {
            let now = TimeDateTimeWithTimeZone::now_utc();
            write_all(txn, &user_id, now).await
        })
    })
    .await
    .map_err(|e| match e {
        TransactionError::Connection(db_error) => SeedError {
            context: "Seeding transaction failed".to_owned(),
            db_error,
        },
        TransactionError::Transaction(e) => e,
    })
}

async fn write_all<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    now: TimeDateTimeWithTimeZone,
) -> Result<SeededIds, SeedError> {
    log::info!("Creating games collection...");
    let game = sample_game(new_id(), now);
    let game_id = game.id.clone();
    db::games::Entity::insert(db::games::ActiveModel::from(game))
        .exec(db)
        .await
        .map_err(seed_err("Failed to create game"))?;
    log::info!("Game created with ID: {game_id}");

    log::info!("Creating matches collection...");
    let sample_match = sample_match(new_id(), &game_id, now);
    let match_id = sample_match.id.clone();
    let match_title = sample_match.title.clone();
    db::matches::Entity::insert(db::matches::ActiveModel::from(sample_match))
        .exec(db)
        .await
        .map_err(seed_err("Failed to create match"))?;
    log::info!("Match created with ID: {match_id}");

    log::info!("Creating match_registrations collection...");
    let registration = sample_registration(new_id(), user_id, &match_id, &match_title, now);
    let registration_id = registration.id.clone();
    db::match_registrations::Entity::insert(db::match_registrations::ActiveModel::from(
        registration,
    ))
    .exec(db)
    .await
    .map_err(seed_err("Failed to create registration"))?;
    log::info!("Registration created with ID: {registration_id}");

    log::info!("Creating notifications collection...");
    let notification = sample_notification(new_id(), user_id, &match_id, &game_id, now);
    let notification_id = notification.id.clone();
    db::notifications::Entity::insert(db::notifications::ActiveModel::from(notification))
        .exec(db)
        .await
        .map_err(seed_err("Failed to create notification"))?;
    log::info!("Notification created with ID: {notification_id}");

    log::info!("Creating transactions collection...");
    let transaction = sample_transaction(new_id(), user_id, &match_id, &registration_id, now);
    let transaction_id = transaction.id.clone();
    db::transactions::Entity::insert(db::transactions::ActiveModel::from(transaction))
        .exec(db)
        .await
        .map_err(seed_err("Failed to create transaction"))?;
    log::info!("Transaction created with ID: {transaction_id}");

    Ok(SeededIds {
        game_id,
        match_id,
        registration_id,
        notification_id,
        transaction_id,
    })
}

fn days(n: i64) -> time::Duration {
    time::Duration::days(n)
}

fn sample_game(id: String, now: TimeDateTimeWithTimeZone) -> db::games::Model {
    db::games::Model {
        id,
        title: "PUBG Mobile".to_owned(),
        description: "Battle Royale game for mobile devices".to_owned(),
        genre: "Battle Royale".to_owned(),
        image_url: "https://example.com/pubg.jpg".to_owned(),
        banner_url: "https://example.com/pubg-banner.jpg".to_owned(),
        rating: 4.5,
        platforms: ["Mobile", "PC"].into_iter().collect(),
        requirements: db::games::Requirements {
            minimum: "Android 5.1.1 or above".to_owned(),
            recommended: "Android 7.1.2 or above".to_owned(),
        },
        is_active: true,
        created_at: now,
        updated_at: now,
        created_by: "admin".to_owned(),
        total_matches: 0,
        active_tournaments: 0,
    }
}

fn sample_match(id: String, game_id: &str, now: TimeDateTimeWithTimeZone) -> db::matches::Model {
    db::matches::Model {
        id,
        title: "PUBG Mobile Championship".to_owned(),
        game_id: game_id.to_owned(),
        description: "Monthly championship tournament".to_owned(),
        rules: "Standard tournament rules apply".to_owned(),
        date: now + days(7),
        time: "14:00".to_owned(),
        time_zone: "UTC+5:30".to_owned(),
        stream_info: db::matches::StreamInfo {
            platform: "YouTube".to_owned(),
            stream_url: "https://youtube.com/watch?v=example".to_owned(),
            is_live: false,
            viewer_count: 0,
        },
        format: "Single Elimination".to_owned(),
        prize_pool: 1000,
        entry_fee: 50,
        max_participants: 100,
        current_participants: 0,
        platforms: ["Mobile"].into_iter().collect(),
        location: db::matches::Location {
            venue: "Online".to_owned(),
            address: "N/A".to_owned(),
            is_online: true,
        },
        registration_end_date: now + days(6),
        registered_users: StringList::default(),
        status: db::matches::Status::Upcoming,
        is_active: true,
        bracket_url: String::new(),
        created_at: now,
        updated_at: now,
        started_at: None,
        ended_at: None,
    }
}

fn sample_registration(
    id: String,
    user_id: &str,
    match_id: &str,
    match_title: &str,
    now: TimeDateTimeWithTimeZone,
) -> db::match_registrations::Model {
    db::match_registrations::Model {
        id,
        user_id: user_id.to_owned(),
        match_id: match_id.to_owned(),
        match_title: match_title.to_owned(),
        in_game_name: "PlayerOne".to_owned(),
        team_name: "Team Alpha".to_owned(),
        platform: "Mobile".to_owned(),
        status: db::match_registrations::Status::Pending,
        registered_at: now,
        checked_in_at: None,
        payment_status: PaymentStatus::Pending,
        payment_id: String::new(),
        transaction_id: String::new(),
        amount: 50,
        rank: None,
        score: 0,
        eliminated: false,
        created_at: now,
        updated_at: now,
    }
}

fn sample_notification(
    id: String,
    user_id: &str,
    match_id: &str,
    game_id: &str,
    now: TimeDateTimeWithTimeZone,
) -> db::notifications::Model {
    db::notifications::Model {
        id,
        user_id: user_id.to_owned(),
        title: "Tournament Registration Open".to_owned(),
        message: "Registration for PUBG Mobile Championship is now open!".to_owned(),
        kind: db::notifications::Kind::TournamentUpdate,
        match_id: Some(match_id.to_owned()),
        game_id: Some(game_id.to_owned()),
        action_url: format!("esports://matches/{match_id}"),
        is_read: false,
        metadata: db::notifications::Metadata {
            start_time: Some(now + days(7)),
            prize_amount: Some(1000),
        },
        created_at: now,
        expires_at: now + days(14),
    }
}

fn sample_transaction(
    id: String,
    user_id: &str,
    match_id: &str,
    registration_id: &str,
    now: TimeDateTimeWithTimeZone,
) -> db::transactions::Model {
    db::transactions::Model {
        id,
        user_id: user_id.to_owned(),
        kind: db::transactions::Kind::EntryFee,
        amount: 50,
        currency: "USD".to_owned(),
        match_id: match_id.to_owned(),
        registration_id: registration_id.to_owned(),
        status: PaymentStatus::Pending,
        payment_method: "card".to_owned(),
        payment_id: String::new(),
        metadata: serde_json::json!({}),
        created_at: now,
        updated_at: now,
    }
}
