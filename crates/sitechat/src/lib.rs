//! Terminal client for the personal-site chat service.
//!
//! The crate includes a CLI for chatting from the terminal. And you can
//! also embed [`Session`] to drive the same conversation flow from your
//! own host app, over any backend.

#![deny(missing_docs)]

mod session;

pub use session::Session;

/// Re-exports of the [`sitechat_chat`] crate.
pub mod chat {
    pub use sitechat_chat::*;
}
