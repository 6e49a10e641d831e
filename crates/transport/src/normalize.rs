//! Turns a buffered response body into exactly one reply.

use sitechat_chat::{FailureKind, Reply};

use crate::proto::ReplyBody;

/// Marker that selects the event-stream branch.
const DATA_PREFIX: &str = "data: ";

/// A data line equal to this sentinel terminates the logical message.
const END_SENTINEL: &str = "end";

/// Reply text used when an event stream carried no content.
pub(crate) const EMPTY_STREAM_REPLY: &str =
    "Sorry, I received an empty response from the chat service.";

/// Reply text used when a JSON answer has no recognized field.
pub(crate) const FALLBACK_REPLY: &str =
    "Sorry, I couldn't process that request.";

/// Normalizes a buffered success body into one reply.
///
/// The service answers either with `data: `-framed lines (the whole
/// stream delivered as one body, not incrementally) or with a plain JSON
/// object. Nothing else about the response announces its shape, so the
/// branch is picked by substring.
pub(crate) fn normalize_body(body: &str) -> Reply {
    if body.contains(DATA_PREFIX) {
        normalize_event_stream(body)
    } else {
        normalize_json(body)
    }
}

fn normalize_event_stream(body: &str) -> Reply {
    let mut full_message = String::new();
    for line in body.lines() {
        let Some(chunk) = line.strip_prefix(DATA_PREFIX) else {
            continue;
        };
        let trimmed = chunk.trim();
        if trimmed.is_empty() || trimmed == END_SENTINEL {
            continue;
        }
        full_message.push_str(chunk);
    }

    let full_message = full_message.trim();
    if full_message.is_empty() {
        Reply::diagnostic(FailureKind::EmptyReply, EMPTY_STREAM_REPLY)
    } else {
        Reply::answer(full_message)
    }
}

fn normalize_json(body: &str) -> Reply {
    let decoded = match serde_json::from_str::<ReplyBody>(body) {
        Ok(decoded) => decoded,
        Err(err) => {
            debug!("undecodable reply body: {err}");
            return Reply::diagnostic(
                FailureKind::MalformedBody,
                format!(
                    "Received a response but couldn't decode it. \
                     Raw response: {}...",
                    snippet(body),
                ),
            );
        }
    };

    match decoded.into_reply_text() {
        Some(text) => Reply::answer(text),
        // The original service displays this as an ordinary assistant
        // message, so it is not a diagnostic.
        None => Reply::answer(FALLBACK_REPLY),
    }
}

/// Returns the first 200 characters of `body`, for embedding raw
/// evidence in diagnostics without flooding the conversation.
pub(crate) fn snippet(body: &str) -> &str {
    const MAX_CHARS: usize = 200;
    match body.char_indices().nth(MAX_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
