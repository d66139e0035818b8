//! Local persistence and query layer for construction sites and their
//! inspections.
//!
//! - [`storage`]: durable named collections with whole-collection replace
//!   (SQLite, JSON files or memory).
//! - [`repository`]: typed CRUD, cascade delete and the site listing
//!   aggregate on top of a [`storage::CollectionStore`].
//! - [`types`]: the `Site` and `Inspection` records.

pub mod app;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod repository;
pub mod storage;
pub mod tracing;
pub mod types;
