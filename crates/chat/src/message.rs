use serde::{Deserialize, Serialize};

/// The author of a [`ChatMessage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message typed by the person using the chat.
    User,
    /// A reply attributed to the assistant, genuine or diagnostic.
    Assistant,
}

/// A single entry in the conversation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored the message.
    pub role: Role,
    /// The display text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user message.
    #[inline]
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    #[inline]
    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// An append-only conversation transcript.
///
/// The transcript belongs to the UI layer and lives only as long as the
/// session does. Backends never see it; they receive one prompt at a
/// time.
#[derive(Clone, Default, Debug)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Appends a message. Messages can never be removed or edited.
    #[inline]
    pub fn push(&mut self, msg: ChatMessage) {
        self.messages.push(msg);
    }

    /// Returns the messages in order of arrival.
    #[inline]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the most recent message, if any.
    #[inline]
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Returns the number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if nothing has been said yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
