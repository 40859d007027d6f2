// DIV CRM - sales pipeline tracker backend
//
// Persists prospects and their follow-up interactions, fills relance
// message templates with prospect data, and gates access behind a
// shared-password session cookie.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;
