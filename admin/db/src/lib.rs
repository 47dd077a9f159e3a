pub mod prelude;

pub mod common;
pub mod games;
pub mod index_requests;
pub mod match_registrations;
pub mod matches;
pub mod notifications;
pub mod transactions;
