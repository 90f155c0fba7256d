pub mod chat;
pub mod config;
pub mod finance;
pub mod mood;
pub mod profile;
