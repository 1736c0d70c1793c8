//! Spindle core - signal/slot primitives for the Spindle picker models.
//!
//! This crate carries the notification layer the picker models are built on:
//!
//! - [`Signal`] - a type-safe signal with multiple connected slots
//! - [`ConnectionId`] / [`ConnectionGuard`] - connection lifetime management
//! - [`logging`] - tracing targets and macro wrappers
//!
//! Delivery is synchronous: picker models react to scroll-settle events from a
//! single UI event stream, so a slot always runs to completion inside `emit`
//! before the next event is processed.

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
