use sitechat_chat::{ChatBackend, ChatMessage, Transcript};

/// A chat session: the transcript plus the backend that answers it.
///
/// Every call site drives the conversation through this one type, so the
/// prompt/reply choreography lives in a single place instead of being
/// duplicated per surface.
pub struct Session<B> {
    backend: B,
    transcript: Transcript,
}

impl<B: ChatBackend> Session<B> {
    /// Creates a session over the given backend.
    #[inline]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            transcript: Transcript::default(),
        }
    }

    /// Sends one user input through the backend.
    ///
    /// Blank input is rejected locally: no request is issued and the
    /// transcript is left untouched. Otherwise the transcript gains
    /// exactly two entries, the user message and then the reply (genuine
    /// or diagnostic), and the reply entry is returned.
    ///
    /// Taking `&mut self` keeps asks sequenced: a second ask cannot start
    /// until the previous reply has been appended.
    pub async fn ask(&mut self, input: &str) -> Option<&ChatMessage> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(input));
        let reply = self.backend.send_prompt(input).await;
        self.transcript
            .push(ChatMessage::assistant(reply.into_text()));
        self.transcript.last()
    }

    /// Returns the conversation so far.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use sitechat_chat::{FailureKind, Reply, Role};
    use sitechat_test_backend::ScriptedBackend;

    use super::*;

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let backend = ScriptedBackend::default();
        let mut session = Session::new(backend.clone());

        assert!(session.ask("").await.is_none());
        assert!(session.ask("   \n").await.is_none());

        assert!(session.transcript().is_empty());
        assert_eq!(backend.prompt_count(), 0);
    }

    #[tokio::test]
    async fn test_one_ask_appends_exactly_two_entries() {
        let mut backend = ScriptedBackend::default();
        backend.push_reply(Reply::answer("hi there"));
        let mut session = Session::new(backend.clone());

        let reply = session.ask("  Hello  ").await.unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "hi there");

        let messages = session.transcript().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "Hello");
        assert_eq!(messages[1].role, Role::Assistant);

        // The backend saw the trimmed prompt, nothing else.
        assert_eq!(backend.prompts(), ["Hello"]);
    }

    #[tokio::test]
    async fn test_diagnostic_replies_still_enter_the_transcript() {
        let mut backend = ScriptedBackend::default();
        backend.push_reply(Reply::diagnostic(
            FailureKind::Network,
            "Network error: unable to reach the chat server.",
        ));
        let mut session = Session::new(backend);

        let reply = session.ask("Hello").await.unwrap();
        assert!(reply.content.contains("Network error"));
        assert_eq!(session.transcript().len(), 2);
    }

    #[tokio::test]
    async fn test_turns_stay_in_order() {
        let mut backend = ScriptedBackend::default();
        backend.push_reply(Reply::answer("one"));
        backend.push_reply(Reply::answer("two"));
        let mut session = Session::new(backend);

        session.ask("first").await;
        session.ask("second").await;

        let contents: Vec<_> = session
            .transcript()
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, ["first", "one", "second", "two"]);
    }
}
