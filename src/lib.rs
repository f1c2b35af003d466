//! Core library for the hunter directory application.
//!
//! The app is a thin front-end over a remote REST backend that owns
//! persistence and business rules. This crate holds the reusable,
//! presentation-independent pieces:
//!
//! - [`hunter`]: the directory record, canonical identity, and draft
//!   validation.
//! - [`store`]: the process-lifetime selection state shared by every
//!   screen, with synchronous change notification.
//! - [`client`]: the four remote operations (search, list, create,
//!   delete), each reconciling its result into the store.
//! - [`config`]: typed connection settings for the backend.
//!
//! Screens obtain a [`SelectionStore`] and a [`DirectoryClient`] at startup,
//! trigger operations from user input, and re-render from store
//! notifications. Only the client writes the store.

pub mod client;
pub mod config;
pub mod hunter;
pub mod store;

pub use client::{DirectoryClient, DirectoryError};
pub use config::Config;
pub use hunter::{parse_skills, Field, FieldError, Hunter, HunterDraft, HunterId, ValidHunter};
pub use store::{SelectionStore, StoreEvent, SubscriptionId};
