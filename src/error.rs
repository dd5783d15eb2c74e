use thiserror::Error;

/// Failure modes of a single invocation.
///
/// Transport and decode failures are kept apart, and the two decode passes
/// get their own variants, so a failed call can be attributed to the wire,
/// the envelope, or the inner payload.
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The remote endpoint was unreachable or the call itself failed.
    #[error("transport failure invoking '{function}'")]
    Transport {
        function: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The endpoint ran but flagged the execution as failed.
    #[error("function '{function}' reported an execution error: {kind}")]
    Function { function: String, kind: String },

    /// The caller's payload could not be serialized to JSON text.
    #[error("request payload is not serializable")]
    Request(#[source] serde_json::Error),

    /// The response envelope carried no payload at all.
    #[error("response envelope carried no payload")]
    EmptyEnvelope,

    /// First decode pass failed: the envelope payload is not a JSON string.
    #[error("envelope payload is not a JSON-encoded string")]
    Envelope(#[source] serde_json::Error),

    /// Second decode pass failed: the embedded string is not valid JSON.
    #[error("inner payload is not valid JSON")]
    Payload(#[source] serde_json::Error),
}
