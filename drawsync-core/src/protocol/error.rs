use thiserror::Error;

/// Why an inbound frame was rejected. Rejected frames are dropped; they never
/// close the connection.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Not JSON, unknown `type`, or a required field is missing.
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
