use serde_json::Value;

use crate::error::InvokeError;

/// Raw response envelope handed back by the invocation transport.
///
/// The payload bytes are JSON text encoding a string, and that string in
/// turn encodes the logical GraphQL response. [`into_logical`] runs both
/// passes; each pass fails with its own error variant.
///
/// [`into_logical`]: ResponseEnvelope::into_logical
#[derive(Debug, Clone, Default)]
pub struct ResponseEnvelope {
    pub payload: Option<Vec<u8>>,
    pub function_error: Option<String>,
}

impl ResponseEnvelope {
    /// Decode the envelope down to the logical GraphQL response.
    ///
    /// An envelope with the function-error flag set or with no payload is
    /// rejected before any decoding happens.
    pub fn into_logical(self, function: &str) -> Result<Value, InvokeError> {
        if let Some(kind) = self.function_error {
            return Err(InvokeError::Function {
                function: function.to_owned(),
                kind,
            });
        }
        let bytes = self.payload.ok_or(InvokeError::EmptyEnvelope)?;
        let text = decode_envelope(&bytes)?;
        decode_payload(&text)
    }
}

/// First pass: the envelope payload must parse as a JSON string.
pub fn decode_envelope(bytes: &[u8]) -> Result<String, InvokeError> {
    serde_json::from_slice(bytes).map_err(InvokeError::Envelope)
}

/// Second pass: the embedded string must itself parse as JSON.
pub fn decode_payload(text: &str) -> Result<Value, InvokeError> {
    serde_json::from_str(text).map_err(InvokeError::Payload)
}
