//! MAAS platform blocks
//!
//! Platform-specific portions of the `HostedCluster` and `NodePool` specs.
//! These are plain data; all defaulting and precedence logic lives in the
//! platform adapter.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cluster-level MAAS configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaasPlatformSpec {
    /// Reference to a secret holding MAAS credentials, in the same namespace
    /// as the cluster. The secret must contain `MAAS_ENDPOINT` and
    /// `MAAS_API_KEY`.
    pub identity_ref: MaasIdentityReference,

    /// DNS domain for the MAAS cluster. Defaults to `maas.local` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub dns_domain: Option<String>,

    /// MAAS zone the cluster is deployed in. Any available zone when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub zone: Option<String>,
}

/// Reference to an infrastructure provider identity secret.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaasIdentityReference {
    /// Name of a secret in the same namespace as the resource being
    /// provisioned.
    #[schemars(length(max = 255))]
    pub name: String,
}

/// Node-pool-level MAAS configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaasNodePoolPlatform {
    /// Reference to a secret holding MAAS credentials.
    pub identity_ref: MaasIdentityReference,

    /// MAAS machine type/tag used for node selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub machine_type: Option<String>,

    /// MAAS zone the nodes are deployed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub zone: Option<String>,

    /// Additional MAAS tags applied to the nodes for filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 10))]
    pub tags: Option<Vec<String>>,

    /// MAAS resource pool used for node allocation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub resource_pool: Option<String>,

    /// Minimum CPU count required for the nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub min_cpu: Option<i32>,

    /// Minimum memory in MB required for the nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1024))]
    pub min_memory: Option<i32>,

    /// MAAS image ID for the nodes. A release-based default is used when
    /// unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub image: Option<String>,

    /// Failure domain the machines are created in. Must match a key in the
    /// failure-domain map on the cluster object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub failure_domain: Option<String>,

    /// Minimum disk size in GB required for the nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub min_disk_size: Option<i32>,

    /// LXD VM hosting options. When unset or disabled, machines are
    /// provisioned on bare metal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lxd: Option<MaasLxdConfig>,

    /// Static IP configuration for VMs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_ip: Option<MaasStaticIpConfig>,
}

/// LXD VM creation options for a machine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaasLxdConfig {
    /// Whether this machine should be created as an LXD VM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Storage pool to use for the VM.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub storage_pool: Option<String>,

    /// Network to connect the VM to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 255))]
    pub network: Option<String>,
}

/// Static IP configuration for a VM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaasStaticIpConfig {
    /// Static IP address to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Network CIDR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,

    /// Network gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// DNS servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
}
