//! HostedCluster CRD
//!
//! Declarative description of a hosted cluster. The platform adapter reads
//! this spec; it never writes it.

use crate::maas::MaasPlatformSpec;
use crate::platform::{ApiEndpoint, PlatformType};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Desired state of a hosted cluster.
#[derive(CustomResource, Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "metalshift.io",
    version = "v1beta1",
    kind = "HostedCluster",
    namespaced,
    status = "HostedClusterStatus",
    shortname = "hc"
)]
#[serde(rename_all = "camelCase")]
pub struct HostedClusterSpec {
    /// Platform the cluster runs on. Exactly the block matching
    /// `platform.type` is set; all others are absent.
    pub platform: PlatformSpec,
}

/// Tagged platform configuration for a hosted cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSpec {
    /// Platform tag selecting the adapter variant.
    #[serde(rename = "type")]
    pub platform_type: PlatformType,

    /// MAAS-specific configuration. Required when `type` is `MAAS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maas: Option<MaasPlatformSpec>,
}

/// Observed state of a hosted cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostedClusterStatus {
    /// Control-plane endpoint once it has been published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_plane_endpoint: Option<ApiEndpoint>,

    /// Whether the cluster-level infrastructure object has been reconciled.
    #[serde(default)]
    pub infrastructure_ready: bool,
}
