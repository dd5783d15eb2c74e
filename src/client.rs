use std::sync::Arc;

use async_trait::async_trait;
use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, Region};
use aws_sdk_lambda::{primitives::Blob, types::InvocationType};
use serde_json::Value;

use crate::{envelope::ResponseEnvelope, error::InvokeError};

/// Name of the deployed movies function, as created by the backend stack.
pub const DEFAULT_FUNCTION: &str = "movies-handler-grapqhl";

/// A JSON object payload: string keys mapped to arbitrary JSON values.
pub type Payload = serde_json::Map<String, Value>;

/// Request handed to the invocation transport.
///
/// `payload` holds the serialized JSON text of the caller's payload, or
/// `None` when the caller attached nothing. The two shapes differ on the
/// wire: an absent payload means no payload field at all, not an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub function_name: String,
    pub payload: Option<Vec<u8>>,
}

/// Transport able to carry an [`InvocationRequest`] to the remote endpoint
/// and hand back the raw response envelope.
///
/// This is the seam between the invoker and the wire; tests substitute
/// their own implementations.
#[async_trait]
pub trait InvokeTransport: Send + Sync {
    async fn send(&self, request: InvocationRequest) -> Result<ResponseEnvelope, InvokeError>;
}

#[async_trait]
impl<T: InvokeTransport + ?Sized> InvokeTransport for Arc<T> {
    async fn send(&self, request: InvocationRequest) -> Result<ResponseEnvelope, InvokeError> {
        (**self).send(request).await
    }
}

/// AWS Lambda transport: one `RequestResponse` invocation per request.
pub struct LambdaTransport {
    client: aws_sdk_lambda::Client,
}

impl LambdaTransport {
    /// Build a Lambda client from the default credential chain, falling
    /// back to `us-east-1` when no region is configured.
    pub async fn connect() -> Self {
        let region_provider =
            RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;
        Self {
            client: aws_sdk_lambda::Client::new(&config),
        }
    }
}

#[async_trait]
impl InvokeTransport for LambdaTransport {
    async fn send(&self, request: InvocationRequest) -> Result<ResponseEnvelope, InvokeError> {
        let mut call = self
            .client
            .invoke()
            .function_name(&request.function_name)
            .invocation_type(InvocationType::RequestResponse);
        if let Some(bytes) = request.payload {
            call = call.payload(Blob::new(bytes));
        }

        let output = call.send().await.map_err(|e| InvokeError::Transport {
            function: request.function_name.clone(),
            source: Box::new(e),
        })?;

        Ok(ResponseEnvelope {
            payload: output.payload().map(|b| b.as_ref().to_vec()),
            function_error: output.function_error().map(str::to_owned),
        })
    }
}

/// Handle for invoking the remote movies function.
///
/// The handle is a passive connection factory: it is never mutated across
/// calls and every [`invoke`](Invoker::invoke) is independent of the ones
/// before it.
pub struct Invoker {
    transport: Box<dyn InvokeTransport>,
    function_name: String,
}

impl Invoker {
    /// Connect to AWS Lambda, targeting `MOVIES_FUNCTION` when set and
    /// [`DEFAULT_FUNCTION`] otherwise.
    pub async fn connect() -> Self {
        let function_name =
            std::env::var("MOVIES_FUNCTION").unwrap_or_else(|_| DEFAULT_FUNCTION.to_owned());
        log::info!("Invoker targeting function '{function_name}'");
        Self {
            transport: Box::new(LambdaTransport::connect().await),
            function_name,
        }
    }

    /// Build an invoker over an arbitrary transport.
    pub fn with_transport<T>(transport: T, function_name: &str) -> Self
    where
        T: InvokeTransport + 'static,
    {
        Self {
            transport: Box::new(transport),
            function_name: function_name.to_owned(),
        }
    }

    /// Invoke the remote function once and decode its logical response.
    ///
    /// With `Some(payload)` the payload is serialized and attached to the
    /// request; with `None` the request goes out without a payload field.
    /// The call completes only when the endpoint has responded or the
    /// transport has failed; transport and decode failures propagate to the
    /// caller unchanged, and nothing is retried.
    pub async fn invoke(&self, payload: Option<Payload>) -> Result<Value, InvokeError> {
        let payload = match payload {
            Some(map) => Some(serde_json::to_vec(&map).map_err(InvokeError::Request)?),
            None => None,
        };

        let request = InvocationRequest {
            function_name: self.function_name.clone(),
            payload,
        };
        log::debug!("invoking '{}'", request.function_name);

        let envelope = self.transport.send(request).await?;
        envelope.into_logical(&self.function_name)
    }
}
