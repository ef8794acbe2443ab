//! Core domain helpers shared across all subdomains.
//!
//! - [`similarity`] - edit-distance scoring used by name resolution and
//!   application selection
//! - [`string`] - UTF-8 safe truncation and tokenizing
//! - [`json`] - emptiness and scalar checks over tool results

pub mod json;
pub mod similarity;
pub mod string;
