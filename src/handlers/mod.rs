pub mod chat;
pub mod health;
pub mod profile;
pub mod report;
