use serde::{Deserialize, Serialize};

// ------------------------
// Types sent to the server
// ------------------------

/// The request payload. `prompt` is the exact and only field the service
/// accepts; the conversation history stays on our side.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ChatRequest {
    pub prompt: String,
}

// ------------------------------
// Types received from the server
// ------------------------------

/// The JSON answer shape.
///
/// Which field carries the reply has varied across service revisions, so
/// all of them are optional and checked in priority order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ReplyBody {
    pub response: Option<String>,
    pub message: Option<String>,
    pub content: Option<String>,
}

impl ReplyBody {
    /// Returns the first usable reply field, `response` winning over
    /// `message` winning over `content`. An empty string counts as
    /// absent, so a reply can never come out blank.
    #[inline]
    pub fn into_reply_text(self) -> Option<String> {
        [self.response, self.message, self.content]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
    }
}
