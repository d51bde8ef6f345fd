//! Localized country names for ISO-3166-1 alpha-3 codes.
//!
//! Maps three-letter country codes to human-readable names in the active
//! locale, and lists the supported codes and names in population order.

pub mod config;
pub mod domain;
pub mod names;
pub mod web;
