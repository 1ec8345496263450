//! Platform tag and shared endpoint types
//!
//! `PlatformType` is the tag the orchestrator uses to select the platform
//! adapter variant for a cluster; exactly one adapter is constructed per
//! cluster, before any adapter method is invoked.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Infrastructure platform a hosted cluster runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PlatformType {
    /// MAAS (Metal as a Service) bare-metal provisioning.
    #[serde(rename = "MAAS")]
    Maas,

    /// No infrastructure automation; machines are brought by the user.
    None,
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformType::Maas => write!(f, "MAAS"),
            PlatformType::None => write!(f, "None"),
        }
    }
}

/// Host/port pair for a cluster's control-plane endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpoint {
    /// Hostname or IP address of the API server.
    pub host: String,

    /// Port the API server listens on.
    pub port: i32,
}
