//! NodePool CRD
//!
//! A pool of worker nodes for a hosted cluster. The platform adapter derives
//! a provider machine template from the platform block; the scaling
//! controller owns everything else.

use crate::maas::MaasNodePoolPlatform;
use crate::platform::PlatformType;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Desired state of a node pool.
#[derive(CustomResource, Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "metalshift.io",
    version = "v1beta1",
    kind = "NodePool",
    namespaced,
    status = "NodePoolStatus",
    shortname = "np"
)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolSpec {
    /// Name of the HostedCluster this pool belongs to, in the same namespace.
    pub cluster_name: String,

    /// Desired number of nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,

    /// Platform the nodes run on.
    pub platform: NodePoolPlatform,
}

/// Tagged platform configuration for a node pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolPlatform {
    /// Platform tag selecting the adapter variant.
    #[serde(rename = "type")]
    pub platform_type: PlatformType,

    /// MAAS-specific configuration. Required when `type` is `MAAS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maas: Option<MaasNodePoolPlatform>,
}

/// Observed state of a node pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodePoolStatus {
    /// Nodes currently provisioned for this pool.
    #[serde(default)]
    pub replicas: i32,

    /// Name of the machine template currently in use. A new name signals the
    /// scaling controller that a rolling replacement is required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machine_template_name: Option<String>,
}
