pub mod amount;
pub mod balance;
pub mod cluster;
pub mod mint;
pub mod notification;
pub mod session;
pub mod token_action;
