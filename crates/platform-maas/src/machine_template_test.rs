//! Unit tests for machine template derivation and naming

#[cfg(test)]
mod tests {
    use crate::machine_template::*;
    use crate::test_utils::*;
    use crds::{MaasIdentityReference, MaasNodePoolPlatform};
    use kube::ResourceExt;

    fn platform() -> MaasNodePoolPlatform {
        MaasNodePoolPlatform {
            identity_ref: MaasIdentityReference {
                name: "maas-creds".to_string(),
            },
            ..MaasNodePoolPlatform::default()
        }
    }

    #[test]
    fn missing_block_yields_all_defaults() {
        let spec = resolved_machine_spec(None);
        assert_eq!(spec.image, DEFAULT_IMAGE);
        assert_eq!(spec.min_cpu, Some(DEFAULT_MIN_CPU));
        assert_eq!(spec.min_memory_in_mb, Some(DEFAULT_MIN_MEMORY_MB));
        assert_eq!(spec.tags, None);
        assert_eq!(spec.resource_pool, None);
        assert_eq!(spec.failure_domain, None);
    }

    #[test]
    fn zone_only_becomes_failure_domain() {
        // Unset CPU/memory/image keep defaults; zone aliases failure domain.
        let mut p = platform();
        p.zone = Some("zone-a".to_string());
        p.failure_domain = Some(String::new());
        p.image = Some(String::new());

        let spec = resolved_machine_spec(Some(&p));
        assert_eq!(spec.min_cpu, Some(1));
        assert_eq!(spec.min_memory_in_mb, Some(1024));
        assert_eq!(spec.image, DEFAULT_IMAGE);
        assert_eq!(spec.failure_domain.as_deref(), Some("zone-a"));
    }

    #[test]
    fn explicit_failure_domain_wins_over_zone() {
        let mut p = platform();
        p.zone = Some("zone-a".to_string());
        p.failure_domain = Some("rack-7".to_string());

        let spec = resolved_machine_spec(Some(&p));
        assert_eq!(spec.failure_domain.as_deref(), Some("rack-7"));
    }

    #[test]
    fn set_fields_override_defaults_independently() {
        let mut p = platform();
        p.image = Some("ubuntu/jammy".to_string());
        p.min_cpu = Some(8);
        p.min_memory = Some(16384);
        p.tags = Some(vec!["gpu".to_string(), "nvme".to_string()]);
        p.resource_pool = Some("compute".to_string());

        let spec = resolved_machine_spec(Some(&p));
        assert_eq!(spec.image, "ubuntu/jammy");
        assert_eq!(spec.min_cpu, Some(8));
        assert_eq!(spec.min_memory_in_mb, Some(16384));
        assert_eq!(
            spec.tags.as_deref(),
            Some(&["gpu".to_string(), "nvme".to_string()][..])
        );
        assert_eq!(spec.resource_pool.as_deref(), Some("compute"));
    }

    #[test]
    fn empty_tag_list_keeps_default() {
        let mut p = platform();
        p.tags = Some(Vec::new());
        let spec = resolved_machine_spec(Some(&p));
        assert_eq!(spec.tags, None);
    }

    #[test]
    fn identical_effective_specs_share_a_name() {
        // zone vs failureDomain with the same value resolve identically.
        let mut via_zone = platform();
        via_zone.zone = Some("zone-a".to_string());
        let mut via_failure_domain = platform();
        via_failure_domain.failure_domain = Some("zone-a".to_string());

        let a = machine_template(&test_node_pool("workers", Some(via_zone))).unwrap();
        let b = machine_template(&test_node_pool("workers", Some(via_failure_domain))).unwrap();
        assert_eq!(a.name_any(), b.name_any());
        assert_eq!(a.spec, b.spec);
    }

    #[test]
    fn pools_with_identical_effective_specs_share_a_template() {
        // The name is a function of the resolved spec alone; the pool name
        // does not participate, so two pools deduplicate to one template.
        let a = machine_template(&test_node_pool("pool-a", Some(platform()))).unwrap();
        let b = machine_template(&test_node_pool("pool-b", Some(platform()))).unwrap();
        assert_eq!(a.name_any(), b.name_any());
    }

    #[test]
    fn any_resolved_field_change_changes_the_name() {
        let mut p = platform();
        p.min_cpu = Some(1);
        let one_cpu = machine_template(&test_node_pool("workers", Some(p.clone()))).unwrap();

        p.min_cpu = Some(2);
        let two_cpu = machine_template(&test_node_pool("workers", Some(p))).unwrap();

        assert_ne!(one_cpu.name_any(), two_cpu.name_any());
    }

    #[test]
    fn name_is_prefix_plus_short_digest() {
        let template = machine_template(&test_node_pool("workers", Some(platform()))).unwrap();
        let name = template.name_any();
        let suffix = name
            .strip_prefix(TEMPLATE_NAME_PREFIX)
            .and_then(|s| s.strip_prefix('-'))
            .unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn naming_is_stable_across_calls() {
        let pool = test_node_pool("workers", Some(platform()));
        let first = machine_template(&pool).unwrap();
        let second = machine_template(&pool).unwrap();
        assert_eq!(first.name_any(), second.name_any());
    }
}
