//! A canned in-memory backend for testing purpose.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sitechat_chat::{ChatBackend, FailureKind, Reply};
use tokio::time::sleep;

/// A backend that answers from a preset script.
///
/// Before sending prompts, queue up the replies the backend should hand
/// out; they are consumed in order, one per prompt. The script must hold
/// enough entries for the prompts a test sends. Running dry yields a
/// distinguishable diagnostic, since the backend contract forbids failing
/// any other way. Received prompts are recorded so tests can assert what
/// actually went over the wire.
///
/// # Note
///
/// This type is not optimized for production use. You should only use it
/// for testing.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    script: Arc<Mutex<VecDeque<Reply>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl ScriptedBackend {
    /// Queues a reply to hand out for a future prompt.
    #[inline]
    pub fn push_reply(&mut self, reply: Reply) {
        self.script.lock().unwrap().push_back(reply);
    }

    /// Makes every reply arrive after an artificial delay.
    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns the number of prompts received so far.
    #[inline]
    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Returns the prompts received so far, in order.
    #[inline]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ChatBackend for ScriptedBackend {
    fn send_prompt(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Reply> + Send + 'static {
        let script = Arc::clone(&self.script);
        let prompts = Arc::clone(&self.prompts);
        let delay = self.delay;
        let prompt = prompt.to_owned();

        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }

            prompts.lock().unwrap().push(prompt);
            let scripted = script.lock().unwrap().pop_front();
            scripted.unwrap_or_else(|| {
                Reply::diagnostic(
                    FailureKind::EmptyReply,
                    "script exhausted: no reply was preset for this prompt",
                )
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_come_out_in_order() {
        let mut backend = ScriptedBackend::default();
        backend.push_reply(Reply::answer("first"));
        backend.push_reply(Reply::answer("second"));

        assert_eq!(backend.send_prompt("a").await.text(), "first");
        assert_eq!(backend.send_prompt("b").await.text(), "second");
        assert_eq!(backend.prompts(), ["a", "b"]);
    }

    #[tokio::test]
    async fn test_exhausted_script_degrades_to_a_diagnostic() {
        let backend = ScriptedBackend::default();
        let reply = backend.send_prompt("anyone there?").await;
        assert!(reply.is_diagnostic());
        assert!(!reply.text().is_empty());
        assert_eq!(backend.prompt_count(), 1);
    }
}
