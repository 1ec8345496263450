//! MAAS CAPI provider objects
//!
//! Typed views of the objects consumed by the MAAS cluster-api provider:
//! the cluster-level infrastructure descriptor and the machine template.
//! Both derive `PartialEq` so create-or-update can diff whole objects.

use crate::platform::ApiEndpoint;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cluster-level infrastructure descriptor for the MAAS provider.
#[derive(CustomResource, Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1beta1",
    kind = "MaasCluster",
    namespaced,
    status = "MaasClusterStatus",
    derive = "Default",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct MaasClusterSpec {
    /// DNS domain machines in this cluster are registered under.
    #[serde(default)]
    pub dns_domain: String,

    /// Endpoint of the cluster's control plane, copied verbatim from the
    /// hosted cluster.
    #[serde(default)]
    pub control_plane_endpoint: ApiEndpoint,
}

/// Observed state of a MaasCluster, written by the provider controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaasClusterStatus {
    /// Whether the provider considers the cluster infrastructure ready.
    #[serde(default)]
    pub ready: bool,
}

/// Template describing how to provision one class of worker machine.
/// Immutable once created; a spec change produces an object with a new
/// content-derived name instead.
#[derive(CustomResource, Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "infrastructure.cluster.x-k8s.io",
    version = "v1beta1",
    kind = "MaasMachineTemplate",
    namespaced,
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct MaasMachineTemplateSpec {
    /// The machine resource stamped out for each node.
    pub template: MaasMachineTemplateResource,
}

/// Inner resource of a machine template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaasMachineTemplateResource {
    /// Machine spec applied to every machine created from this template.
    pub spec: MaasMachineSpec,
}

/// MAAS machine allocation constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaasMachineSpec {
    /// OS image deployed on the machine.
    pub image: String,

    /// Minimum CPU count the allocated machine must have.
    #[serde(rename = "minCPU", default, skip_serializing_if = "Option::is_none")]
    pub min_cpu: Option<i32>,

    /// Minimum memory in MB the allocated machine must have.
    #[serde(
        rename = "minMemoryInMB",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub min_memory_in_mb: Option<i32>,

    /// MAAS tags the allocated machine must carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// MAAS resource pool the machine is allocated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_pool: Option<String>,

    /// Failure domain the machine is created in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_domain: Option<String>,
}
