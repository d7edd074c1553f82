//! Integration Tests
//!
//! End-to-end tests through the `uiatlas` facade:
//! - Scenarios: exact ranking, synonym recall, tokenization, complements
//! - Degradation: failing and hanging providers
//! - Catalogs and configuration loaded from files

#[path = "../common/mod.rs"]
mod common;

mod catalogs;
mod degradation;
mod scenarios;
