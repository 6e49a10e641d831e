use crate::FailureKind;

/// How a [`Reply`] was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplyKind {
    /// Genuine assistant content from the service.
    Answer,
    /// Text synthesized locally in place of a failed exchange.
    Diagnostic(FailureKind),
}

/// The single display string a backend produces per prompt.
///
/// A reply is never empty: failure paths produce readable diagnostic text
/// instead of errors, so the conversation never gains a blank entry and
/// never silently loses one. The kind tag lets callers and tests tell the
/// two paths apart; only the text crosses into the transcript.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reply {
    kind: ReplyKind,
    text: String,
}

impl Reply {
    /// Creates a reply carrying genuine assistant content.
    #[inline]
    pub fn answer<S: Into<String>>(text: S) -> Self {
        Self {
            kind: ReplyKind::Answer,
            text: text.into(),
        }
    }

    /// Creates a reply carrying locally synthesized diagnostic text.
    #[inline]
    pub fn diagnostic<S: Into<String>>(kind: FailureKind, text: S) -> Self {
        Self {
            kind: ReplyKind::Diagnostic(kind),
            text: text.into(),
        }
    }

    /// Returns the display text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns how this reply was produced.
    #[inline]
    pub fn kind(&self) -> ReplyKind {
        self.kind
    }

    /// Returns `true` if this reply was synthesized from a failure.
    #[inline]
    pub fn is_diagnostic(&self) -> bool {
        matches!(self.kind, ReplyKind::Diagnostic(_))
    }

    /// Consumes the reply, returning the display text.
    #[inline]
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let answer = Reply::answer("hi");
        assert_eq!(answer.kind(), ReplyKind::Answer);
        assert!(!answer.is_diagnostic());
        assert_eq!(answer.text(), "hi");

        let diag = Reply::diagnostic(FailureKind::Network, "unreachable");
        assert_eq!(
            diag.kind(),
            ReplyKind::Diagnostic(FailureKind::Network)
        );
        assert!(diag.is_diagnostic());
        assert_eq!(diag.into_text(), "unreachable");
    }
}
