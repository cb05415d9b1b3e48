//! Core library modules for the obra application.
//!
//! Serves as the main entry point for all obra library components, providing
//! a centralized access point to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Data Model**: Typed project and user records with tolerant parsing
//! - **Date Arithmetic**: Normalization of stored dates, day-figure math
//! - **Report Generation**: Per-user and fleet-wide aggregation pipelines
//! - **Project Management**: Guarded create/update/delete and membership edits
//! - **User Interface**: Console rendering and display formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use obra::libs::admin_report::AdminReportGenerator;
//! use obra::store::MemoryStore;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), obra::libs::errors::FetchError> {
//! let store = Arc::new(MemoryStore::new());
//! let generator = AdminReportGenerator::new(store.clone(), store);
//! let report = generator.generate().await?;
//! # Ok(())
//! # }
//! ```

pub mod admin_report;
pub mod config;
pub mod data_storage;
pub mod dates;
pub mod errors;
pub mod formatter;
pub mod messages;
pub mod project;
pub mod service;
pub mod user;
pub mod user_report;
pub mod view;
