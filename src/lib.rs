//! Expense Organizer: a WebAssembly client for personal and shared
//! expense tracking.
//!
//! Durable state, identity, and business rules (row-level data
//! partitioning, budget spent-amount maintenance, invite matching)
//! live in an external backend reached over HTTP. This crate holds the
//! reactive client core: a session holder, a domain state store that
//! merges the remote collections into denormalized views, the gateway
//! between them, and the screens on top.

pub mod api;
pub mod components;
pub mod constants;
pub mod models;
pub mod session;
pub mod store;
pub mod utils;
pub mod views;
