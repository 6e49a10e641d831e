//! The contract between the chat UI and whatever answers it.
//!
//! This crate defines the conversation data model, the normalized reply
//! type, and the [`ChatBackend`] trait that transports implement. Types
//! here never touch the network; they are the constraints the transport
//! and the UI layers agree on, so either side can be swapped out without
//! modifying the other.

#![deny(missing_docs)]

mod backend;
mod failure;
mod message;
mod reply;

pub use backend::*;
pub use failure::*;
pub use message::*;
pub use reply::*;
