//! bookmark-launcher library
//!
//! A categorized bookmark store with JSON persistence, plus the pieces the
//! command-line launcher builds on: settings and the system URL opener.

pub mod config;
pub mod launcher;
pub mod store;
