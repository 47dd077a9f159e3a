pub use super::games::Entity as Games;
pub use super::index_requests::Entity as IndexRequests;
pub use super::match_registrations::Entity as MatchRegistrations;
pub use super::matches::Entity as Matches;
pub use super::notifications::Entity as Notifications;
pub use super::transactions::Entity as Transactions;
