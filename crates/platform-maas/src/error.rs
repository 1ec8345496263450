//! Adapter error types.
//!
//! Misconfiguration and validation errors are terminal until the user fixes
//! the input; Kubernetes errors are transient and handed back to the caller's
//! backoff loop. Absence of an object on a delete path is success, not an
//! error.

use crds::PlatformType;
use thiserror::Error;

/// Errors returned by platform adapter operations.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Kubernetes API error. Transient; retried by the caller's backoff.
    #[error("Kubernetes error: {0}")]
    Kube(#[from] kube::Error),

    /// The platform block an operation requires is absent from the spec.
    /// Caller contract violation; surfaced as a terminal status condition.
    #[error("cluster {cluster} has no {platform} platform spec")]
    MisconfiguredPlatform {
        /// Name of the offending cluster.
        cluster: String,
        /// Platform whose block was expected.
        platform: PlatformType,
    },

    /// The referenced credentials secret does not exist. Terminal until the
    /// user creates it; not a transient backend failure.
    #[error("credentials secret {namespace}/{secret} not found")]
    MissingCredentialsSecret {
        /// Name of the referenced secret.
        secret: String,
        /// Namespace the secret was expected in.
        namespace: String,
    },

    /// A credentials secret is missing a required key. Terminal until the
    /// user corrects the secret.
    #[error("credentials secret {secret} is missing required key {key}")]
    MissingCredentialKey {
        /// Name of the offending secret.
        secret: String,
        /// The absent key.
        key: &'static str,
    },

    /// User input failed validation (empty required field, value out of
    /// range).
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// Machine template name derivation failed.
    #[error("failed to generate machine template name: {0}")]
    TemplateNaming(#[source] serde_json::Error),

    /// No adapter exists for the requested platform type.
    #[error("unsupported platform type: {0}")]
    UnsupportedPlatform(PlatformType),
}
