//! Hackathon Registration Library
//!
//! This library provides the registration form domain (field rules, member
//! slots, form controller), the relay that writes submissions to a Google
//! spreadsheet, and the HTTP layer serving both.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

/// Origin that receives the page height when the form is embedded in an iframe
pub const EMBED_PARENT_ORIGIN: &str = "https://technoforge-rpa.ru";
