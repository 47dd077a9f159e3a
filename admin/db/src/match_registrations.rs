use sea_orm::entity::prelude::*;

use crate::common::PaymentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "checked_in")]
    CheckedIn,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_registrations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(indexed)]
    pub user_id: String,
    #[sea_orm(indexed)]
    pub match_id: String,
    pub match_title: String,
    pub in_game_name: String,
    pub team_name: String,
    pub platform: String,
    pub status: Status,
    pub registered_at: TimeDateTimeWithTimeZone,
    pub checked_in_at: Option<TimeDateTimeWithTimeZone>,
    // Mirrors the state of the transaction row; both are kept.
    pub payment_status: PaymentStatus,
    pub payment_id: String,
    pub transaction_id: String,
    pub amount: i64,
    pub rank: Option<i32>,
    pub score: i64,
    pub eliminated: bool,
    pub created_at: TimeDateTimeWithTimeZone,
    pub updated_at: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Matches,
    #[sea_orm(has_many = "super::transactions::Entity")]
    Transactions,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

impl Related<super::transactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
