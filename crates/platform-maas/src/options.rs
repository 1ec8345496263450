//! Node-pool platform options.
//!
//! The raw flag surface as accepted on the command line, and its validation
//! into a `MaasNodePoolPlatform` block. List-valued flags are comma-separated
//! with per-entry trimming.

use crate::error::PlatformError;
use crds::{
    MaasIdentityReference, MaasLxdConfig, MaasNodePoolPlatform, MaasStaticIpConfig, NodePool,
    PlatformType,
};
use clap::Args;

/// Raw MAAS node-pool flags.
#[derive(Debug, Clone, Default, Args)]
pub struct RawMaasPlatformOptions {
    /// Name of the MAAS credentials secret (required).
    #[arg(long)]
    pub identity_ref: Option<String>,

    /// MAAS machine type/tag for node selection.
    #[arg(long)]
    pub machine_type: Option<String>,

    /// MAAS zone where nodes will be deployed.
    #[arg(long)]
    pub zone: Option<String>,

    /// MAAS resource pool for node allocation.
    #[arg(long)]
    pub resource_pool: Option<String>,

    /// Comma-separated list of MAAS tags for filtering.
    #[arg(long)]
    pub tags: Option<String>,

    /// Minimum CPU count required for nodes.
    #[arg(long, default_value_t = 1)]
    pub min_cpu: i32,

    /// Minimum memory in MB required for nodes.
    #[arg(long, default_value_t = 1024)]
    pub min_memory: i32,

    /// MAAS image ID to use for nodes.
    #[arg(long)]
    pub image: Option<String>,

    /// Failure domain the machines are created in.
    #[arg(long)]
    pub failure_domain: Option<String>,

    /// Minimum disk size in GB.
    #[arg(long)]
    pub min_disk_size: Option<i32>,

    /// Create machines as LXD VMs instead of bare metal.
    #[arg(long)]
    pub lxd_enabled: bool,

    /// LXD storage pool for VMs.
    #[arg(long)]
    pub lxd_storage_pool: Option<String>,

    /// LXD network for VMs.
    #[arg(long)]
    pub lxd_network: Option<String>,

    /// Static IP address for VMs.
    #[arg(long)]
    pub static_ip: Option<String>,

    /// Network CIDR for the static IP.
    #[arg(long)]
    pub static_ip_cidr: Option<String>,

    /// Network gateway for the static IP.
    #[arg(long)]
    pub static_ip_gateway: Option<String>,

    /// Comma-separated list of DNS servers for the static IP.
    #[arg(long)]
    pub static_ip_nameservers: Option<String>,
}

/// Splits a comma-separated flag value, trimming entries and dropping empty
/// ones.
pub fn parse_csv(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

impl RawMaasPlatformOptions {
    /// Validates the raw flags and builds the node-pool platform block.
    pub fn validate(&self) -> Result<MaasNodePoolPlatform, PlatformError> {
        let identity_ref = self
            .identity_ref
            .clone()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| PlatformError::Validation("identity-ref is required".to_string()))?;

        if self.min_cpu < 1 {
            return Err(PlatformError::Validation(
                "min-cpu must be at least 1".to_string(),
            ));
        }
        if self.min_memory < 1024 {
            return Err(PlatformError::Validation(
                "min-memory must be at least 1024 MB".to_string(),
            ));
        }
        if let Some(size) = self.min_disk_size {
            if size < 1 {
                return Err(PlatformError::Validation(
                    "min-disk-size must be at least 1 GB".to_string(),
                ));
            }
        }

        let tags = parse_csv(self.tags.as_deref());
        if tags.len() > 10 {
            return Err(PlatformError::Validation(
                "at most 10 tags may be set".to_string(),
            ));
        }

        let lxd = self.lxd_enabled.then(|| MaasLxdConfig {
            enabled: Some(true),
            storage_pool: self.lxd_storage_pool.clone(),
            network: self.lxd_network.clone(),
        });

        let static_ip = self.static_ip.as_ref().map(|ip| {
            let nameservers = parse_csv(self.static_ip_nameservers.as_deref());
            MaasStaticIpConfig {
                ip: Some(ip.clone()),
                cidr: self.static_ip_cidr.clone(),
                gateway: self.static_ip_gateway.clone(),
                nameservers: (!nameservers.is_empty()).then_some(nameservers),
            }
        });

        Ok(MaasNodePoolPlatform {
            identity_ref: MaasIdentityReference { name: identity_ref },
            machine_type: self.machine_type.clone(),
            zone: self.zone.clone(),
            tags: (!tags.is_empty()).then_some(tags),
            resource_pool: self.resource_pool.clone(),
            min_cpu: Some(self.min_cpu),
            min_memory: Some(self.min_memory),
            image: self.image.clone(),
            failure_domain: self.failure_domain.clone(),
            min_disk_size: self.min_disk_size,
            lxd,
            static_ip,
        })
    }
}

/// Applies a validated platform block onto a node pool spec.
pub fn apply_platform(node_pool: &mut NodePool, platform: MaasNodePoolPlatform) {
    node_pool.spec.platform.platform_type = PlatformType::Maas;
    node_pool.spec.platform.maas = Some(platform);
}
