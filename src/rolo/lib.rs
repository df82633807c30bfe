//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic contact directory library**. The interactive
//! prompt that ships in the binary is just one client of it.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (repl.rs, wired by main.rs)                      │
//! │  - Parses typed commands, formats output, owns the prompt   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session Directory and the store behind it       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model/Storage (model.rs, directory.rs, store/)             │
//! │  - Validated value types: PhoneNumber, Birthday             │
//! │  - Directory: the keyed container of records                │
//! │  - Abstract DirectoryStore trait                            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, model, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Every fallible operation reports a typed [`error::RoloError`]; turning
//! a failure into user-facing text is the CLI layer's job.
//!
//! ## Validation at Construction
//!
//! A [`model::PhoneNumber`] or [`model::Birthday`] can only be obtained
//! from its validating constructor, so no record ever holds a
//! half-validated value. Deserialization goes through the same checks.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`directory`]: The keyed record container, search and pagination
//! - [`model`]: Validated value types and the contact record
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod store;
