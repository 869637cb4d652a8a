pub mod config_store;
pub mod defaults;
pub mod opener;
pub mod secrets;
pub mod service;
