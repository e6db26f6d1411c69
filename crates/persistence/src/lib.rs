//! Persistence layer for the Clinic Sites backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations and the site data source

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
