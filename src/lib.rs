//! # Obra - BIM Project Collaboration Reports
//!
//! A command-line utility for generating project activity reports from a
//! construction-industry collaboration platform and managing its projects.
//!
//! ## Features
//!
//! - **User Reports**: Per-user breakdown of created and collaborating
//!   projects with deadlines, durations and collaboration stats
//! - **Admin Reports**: Platform-wide dashboard with user distributions,
//!   project metrics, rankings and signup growth
//! - **Project Management**: Create, update, delete projects and edit
//!   their collaborator sets
//! - **Snapshot Mode**: Run any report against an exported JSON snapshot
//!   instead of the live portal
//!
//! ## Usage
//!
//! ```rust,no_run
//! use obra::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
pub mod store;
