//! Error types for pushing data to Consul.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while pushing data to Consul.
#[derive(Error, Debug)]
pub enum PushError {
    /// The HTTP client could not be constructed.
    #[error("Failed to create Consul HTTP client")]
    Client(#[source] reqwest::Error),

    /// The configured Consul address is not a usable base URL.
    #[error("Invalid Consul HTTP address '{addr}': {reason}")]
    InvalidAddress { addr: String, reason: String },

    /// The request never got a response.
    #[error("Failed to push {resource}")]
    Request {
        resource: String,
        #[source]
        source: reqwest::Error,
    },

    /// Consul answered with a non-success status.
    #[error("Failed to push {resource}: Consul returned {status}: {body}")]
    Status {
        resource: String,
        status: StatusCode,
        body: String,
    },
}

impl PushError {
    /// Description of the resource being pushed, if the error concerns one.
    pub fn resource(&self) -> Option<&str> {
        match self {
            Self::Request { resource, .. } | Self::Status { resource, .. } => Some(resource),
            Self::Client(_) | Self::InvalidAddress { .. } => None,
        }
    }
}
