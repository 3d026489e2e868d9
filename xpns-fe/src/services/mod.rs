//! Outbound service clients for xpns-fe

pub mod sheets_client;

pub use sheets_client::SheetsClient;
