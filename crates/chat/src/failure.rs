/// The class of failure behind a diagnostic reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The chat service could not be reached at all.
    Network,
    /// The exchange failed after a connection was established.
    Connection,
    /// The service answered with a non-success HTTP status.
    Status,
    /// The response body could not be decoded in any known shape.
    MalformedBody,
    /// The response was recognized but carried no content.
    EmptyReply,
}
