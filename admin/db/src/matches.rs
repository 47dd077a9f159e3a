use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::common::StringList;

// upcoming -> live -> completed is the expected order; nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum Status {
    #[sea_orm(string_value = "upcoming")]
    Upcoming,
    #[sea_orm(string_value = "live")]
    Live,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct StreamInfo {
    pub platform: String,
    pub stream_url: String,
    pub is_live: bool,
    pub viewer_count: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub venue: String,
    pub address: String,
    pub is_online: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(indexed)]
    pub game_id: String,
    pub description: String,
    pub rules: String,
    #[sea_orm(indexed)]
    pub date: TimeDateTimeWithTimeZone,
    pub time: String,
    pub time_zone: String,
    pub stream_info: StreamInfo,
    pub format: String,
    pub prize_pool: i64,
    pub entry_fee: i64,
    pub max_participants: i32,
    pub current_participants: i32,
    pub platforms: StringList,
    pub location: Location,
    pub registration_end_date: TimeDateTimeWithTimeZone,
    pub registered_users: StringList,
    #[sea_orm(indexed)]
    pub status: Status,
    pub is_active: bool,
    pub bracket_url: String,
    pub created_at: TimeDateTimeWithTimeZone,
    pub updated_at: TimeDateTimeWithTimeZone,
    pub started_at: Option<TimeDateTimeWithTimeZone>,
    pub ended_at: Option<TimeDateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Games,
    #[sea_orm(has_many = "super::match_registrations::Entity")]
    MatchRegistrations,
    #[sea_orm(has_many = "super::notifications::Entity")]
    Notifications,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Games.def()
    }
}

impl Related<super::match_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchRegistrations.def()
    }
}

impl Related<super::notifications::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
