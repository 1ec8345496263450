//! Node-pool to machine-template derivation.
//!
//! Defaulting and override precedence, per field:
//!
//! | field            | default       | override condition        | fallback |
//! |------------------|---------------|---------------------------|----------|
//! | image            | `ubuntu/focal`| `image` non-empty         | —        |
//! | minCPU           | 1             | `minCpu` set              | —        |
//! | minMemoryInMB    | 1024          | `minMemory` set           | —        |
//! | tags             | none          | `tags` non-empty          | —        |
//! | resourcePool     | none          | `resourcePool` non-empty  | —        |
//! | failureDomain    | none          | `failureDomain` non-empty | `zone`   |
//!
//! Absence means "keep the default", never "clear". `failureDomain` and
//! `zone` alias the same provider concept; the more specific field wins, and
//! the fallback never merges the two.

use crate::error::PlatformError;
use crds::{
    MaasMachineSpec, MaasMachineTemplate, MaasMachineTemplateResource, MaasMachineTemplateSpec,
    MaasNodePoolPlatform, NodePool,
};
use sha2::{Digest, Sha256};

/// Image used when the node pool does not name one.
pub const DEFAULT_IMAGE: &str = "ubuntu/focal";

/// Minimum CPU count used when the node pool does not set one.
pub const DEFAULT_MIN_CPU: i32 = 1;

/// Minimum memory in MB used when the node pool does not set one.
pub const DEFAULT_MIN_MEMORY_MB: i32 = 1024;

/// Prefix of every content-derived template name.
pub const TEMPLATE_NAME_PREFIX: &str = "maas-machine-template";

/// Resolves a node pool's platform block into an effective machine spec,
/// applying the precedence table above. A missing block yields all defaults.
pub fn resolved_machine_spec(platform: Option<&MaasNodePoolPlatform>) -> MaasMachineSpec {
    let mut spec = MaasMachineSpec {
        image: DEFAULT_IMAGE.to_string(),
        min_cpu: Some(DEFAULT_MIN_CPU),
        min_memory_in_mb: Some(DEFAULT_MIN_MEMORY_MB),
        tags: None,
        resource_pool: None,
        failure_domain: None,
    };
    let Some(platform) = platform else {
        return spec;
    };

    if let Some(image) = non_empty(platform.image.as_deref()) {
        spec.image = image;
    }
    if let Some(cpu) = platform.min_cpu {
        spec.min_cpu = Some(cpu);
    }
    if let Some(memory) = platform.min_memory {
        spec.min_memory_in_mb = Some(memory);
    }
    if let Some(tags) = platform.tags.as_ref().filter(|t| !t.is_empty()) {
        spec.tags = Some(tags.clone());
    }
    spec.resource_pool = non_empty(platform.resource_pool.as_deref());
    spec.failure_domain = non_empty(platform.failure_domain.as_deref())
        .or_else(|| non_empty(platform.zone.as_deref()));
    spec
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}

/// Content-derived template name: the name is a function of the resolved
/// spec alone, so identical effective specs collapse to one template across
/// pools and generations alike. Any resolved-field change yields a new name,
/// which is the signal the scaling controller uses to roll nodes.
///
/// The resolved spec is serialized in struct-field order and contains no
/// maps, so the hashed bytes are stable across reconciles.
pub fn template_name(spec: &MaasMachineTemplateSpec) -> Result<String, PlatformError> {
    let bytes = serde_json::to_vec(spec).map_err(PlatformError::TemplateNaming)?;
    let digest = Sha256::digest(&bytes);
    let short: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
    Ok(format!("{TEMPLATE_NAME_PREFIX}-{short}"))
}

/// Derives the machine template for a node pool. The namespace is left for
/// the caller; it is always the control-plane namespace of the owning
/// cluster.
pub fn machine_template(node_pool: &NodePool) -> Result<MaasMachineTemplate, PlatformError> {
    let spec = MaasMachineTemplateSpec {
        template: MaasMachineTemplateResource {
            spec: resolved_machine_spec(node_pool.spec.platform.maas.as_ref()),
        },
    };
    let name = template_name(&spec)?;
    Ok(MaasMachineTemplate::new(&name, spec))
}
