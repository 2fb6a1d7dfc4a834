//! # Cardpane Architecture
//!
//! Cardpane manages an ordered pane of **cards**: a source snippet paired with
//! zero or more typed outputs. It is a UI-agnostic library; the bundled binary
//! is one line-oriented client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses lines, renders cards, owns stdout/stderr          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Session, validates boundary strings             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Components (store, filter, sort, reorder, selection)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! New cards come from outside through the [`ingest`] port and are applied
//! between commands, one at a time, in delivery order.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never prints and never exits. Every operation
//! is synchronous and total; the only errors are rejected input (bad regex,
//! unknown facet, unknown sort mode, unknown direction, duplicate id).
//! Missing cards are reported as warnings, not errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`session`]: The single owned state object
//! - [`store`]: Ordered card sequence and visibility mapping
//! - [`filter`]: Search and output-type facet rules
//! - [`sort`]: Sort modes
//! - [`reorder`]: Manual moves
//! - [`selection`]: Selected card ids
//! - [`ingest`]: Channel from external card producers
//! - [`model`]: `Card`, `CardOutput`
//! - [`config`]: Configuration loading
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod reorder;
pub mod selection;
pub mod session;
pub mod sort;
pub mod store;
