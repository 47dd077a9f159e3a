use sea_orm::entity::prelude::*;

use crate::common::PaymentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
pub enum Kind {
    #[sea_orm(string_value = "entry_fee")]
    EntryFee,
    #[sea_orm(string_value = "prize_payout")]
    PrizePayout,
    #[sea_orm(string_value = "deposit")]
    Deposit,
    #[sea_orm(string_value = "withdrawal")]
    Withdrawal,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(indexed)]
    pub user_id: String,
    #[sea_orm(column_name = "type")]
    pub kind: Kind,
    pub amount: i64,
    pub currency: String,
    #[sea_orm(indexed)]
    pub match_id: String,
    pub registration_id: String,
    pub status: PaymentStatus,
    pub payment_method: String,
    pub payment_id: String,
    pub metadata: Json,
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
    #[sea_orm(
        belongs_to = "super::match_registrations::Entity",
        from = "Column::RegistrationId",
        to = "super::match_registrations::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    MatchRegistrations,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Matches.def()
    }
}

impl Related<super::match_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
