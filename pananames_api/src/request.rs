//! Per-request decorators applied after the client's own headers are set.

use std::time::Duration;

use reqwest::header::{HeaderName, HeaderValue};

use crate::Error;

/// Mutates an outgoing request just before it is sent.
///
/// Decorators run in the order given, after the core headers are attached, so
/// they may override any of them. Closures of the right shape implement this
/// trait too.
pub trait RequestOption: Send + Sync {
    fn apply(&self, req: &mut reqwest::Request) -> Result<(), Error>;
}

impl<F> RequestOption for F
where
    F: Fn(&mut reqwest::Request) -> Result<(), Error> + Send + Sync,
{
    fn apply(&self, req: &mut reqwest::Request) -> Result<(), Error> {
        self(req)
    }
}

/// Aborts the request if no complete response arrives within the duration.
#[derive(Debug, Clone, Copy)]
pub struct WithTimeout(pub Duration);

impl RequestOption for WithTimeout {
    fn apply(&self, req: &mut reqwest::Request) -> Result<(), Error> {
        *req.timeout_mut() = Some(self.0);
        Ok(())
    }
}

/// Sets a header, replacing any existing value.
#[derive(Debug, Clone)]
pub struct WithHeader(pub HeaderName, pub HeaderValue);

impl WithHeader {
    pub fn new(name: &str, value: &str) -> Result<Self, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InvalidInput(format!("invalid header name {:?}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| Error::InvalidInput(format!("invalid header value: {}", e)))?;
        Ok(Self(name, value))
    }
}

impl RequestOption for WithHeader {
    fn apply(&self, req: &mut reqwest::Request) -> Result<(), Error> {
        req.headers_mut().insert(self.0.clone(), self.1.clone());
        Ok(())
    }
}
