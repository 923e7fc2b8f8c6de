pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod usecases;
pub mod views;
