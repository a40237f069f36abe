//! Failure taxonomy shared by every API gateway port.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by API gateway adapters.
    ///
    /// `Rejected` and `Server` render only their message, which is what the
    /// user sees: either the server-supplied text or a generic fallback.
    pub enum GatewayError {
        /// No response was received.
        Transport {
            /// Transport failure description.
            message: String,
        } => "could not reach the Holidaze API: {message}",
        /// HTTP 4xx other than 429.
        Rejected {
            /// HTTP status code.
            status: u16,
            /// Server message, or a generic fallback.
            message: String,
        } => "{message}",
        /// HTTP 429.
        RateLimited {
            /// Server message, or a generic fallback.
            message: String,
        } => "the Holidaze API is rate limiting requests: {message}",
        /// HTTP 5xx.
        Server {
            /// HTTP status code.
            status: u16,
            /// Generic message.
            message: String,
        } => "{message}",
        /// A success response did not match the expected shape.
        Decode {
            /// Decoder failure description.
            message: String,
        } => "unexpected response from the Holidaze API: {message}",
    }
}

impl GatewayError {
    /// HTTP status carried by the failure, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}
