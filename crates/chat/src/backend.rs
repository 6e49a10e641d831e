use crate::Reply;

/// A type that can turn a user prompt into a reply.
///
/// Implementors own the whole failure story: every transport or decoding
/// problem must be converted into a diagnostic [`Reply`] rather than
/// surfaced as an error or a panic, so one prompt always yields exactly
/// one reply. Callers are expected to reject blank prompts before
/// calling; implementations may assume the prompt has content after
/// trimming.
///
/// A backend behaves like a stateless object: it never retains the
/// conversation, and it does not sequence concurrent calls. Callers that
/// need replies in request order must provide that ordering themselves.
pub trait ChatBackend: Send + Sync {
    /// Sends one prompt and resolves to exactly one reply.
    fn send_prompt(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Reply> + Send + 'static;
}
