//! Domain types and rules for the cloud kitchen dish service.
//!
//! This crate does no I/O. It owns the [`dish::Dish`] entity, the inbound
//! request schema with its price coercion, and the domain error type shared
//! by the storage and HTTP layers.

pub mod dish;
pub mod error;
pub mod types;
