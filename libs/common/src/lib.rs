//! Common library for the game store services
//!
//! This crate provides shared functionality used by the HTTP services:
//! database connectivity and the shared error types.

pub mod database;
pub mod error;
