//! Configuration modules for the Taskdeck API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables:
//!
//! - [`cors`]: CORS allow-list cache settings
//! - [`database`]: PostgreSQL connection pool initialization

pub mod cors;
pub mod database;
