//! Unit tests for infrastructure descriptor derivation

#[cfg(test)]
mod tests {
    use crate::credentials::{CLUSTER_LABEL, PLATFORM_LABEL};
    use crate::infra::*;
    use crate::test_utils::*;
    use kube::ResourceExt;

    #[test]
    fn fresh_descriptor_starts_from_an_empty_spec() {
        let cluster = fresh_cluster("c1", "cp-namespace");
        assert_eq!(cluster.spec, crds::MaasClusterSpec::default());
        assert_eq!(cluster.spec.dns_domain, "");
    }

    #[test]
    fn dns_domain_falls_back_to_default() {
        let hcluster = test_hosted_cluster("c1", "maas-creds", None, None);
        let maas = hcluster.spec.platform.maas.as_ref().unwrap();
        assert_eq!(dns_domain(maas), DEFAULT_DNS_DOMAIN);

        let hcluster = test_hosted_cluster("c1", "maas-creds", Some(""), None);
        let maas = hcluster.spec.platform.maas.as_ref().unwrap();
        assert_eq!(dns_domain(maas), DEFAULT_DNS_DOMAIN);
    }

    #[test]
    fn dns_domain_uses_spec_value_when_set() {
        let hcluster = test_hosted_cluster("c1", "maas-creds", Some("metal.example.com"), None);
        let maas = hcluster.spec.platform.maas.as_ref().unwrap();
        assert_eq!(dns_domain(maas), "metal.example.com");
    }

    #[test]
    fn desired_state_carries_endpoint_and_annotation() {
        let hcluster = test_hosted_cluster("c1", "maas-creds", Some("metal.example.com"), None);
        let maas = hcluster.spec.platform.maas.as_ref().unwrap();
        let endpoint = test_endpoint();

        let mut cluster = fresh_cluster("c1", "cp-namespace");
        apply_desired_state(&mut cluster, maas, &endpoint);

        assert_eq!(cluster.spec.dns_domain, "metal.example.com");
        assert_eq!(cluster.spec.control_plane_endpoint, endpoint);
        assert!(cluster.annotations().contains_key(CUSTOM_DNS_ANNOTATION));
        assert_eq!(
            cluster.labels().get(CLUSTER_LABEL).map(String::as_str),
            Some("c1")
        );
        assert_eq!(
            cluster.labels().get(PLATFORM_LABEL).map(String::as_str),
            Some("maas")
        );
    }

    #[test]
    fn externally_edited_descriptor_is_driven_back_to_spec() {
        let hcluster = test_hosted_cluster("c1", "maas-creds", Some("metal.example.com"), None);
        let maas = hcluster.spec.platform.maas.as_ref().unwrap();
        let endpoint = test_endpoint();

        let mut cluster = fresh_cluster("c1", "cp-namespace");
        apply_desired_state(&mut cluster, maas, &endpoint);

        // Simulate external edits: wrong DNS domain, stripped annotation.
        cluster.spec.dns_domain = "tampered.example.com".to_string();
        cluster.annotations_mut().remove(CUSTOM_DNS_ANNOTATION);

        apply_desired_state(&mut cluster, maas, &endpoint);
        assert_eq!(cluster.spec.dns_domain, "metal.example.com");
        assert!(cluster.annotations().contains_key(CUSTOM_DNS_ANNOTATION));
    }

    #[test]
    fn reapplying_desired_state_is_a_no_op() {
        let hcluster = test_hosted_cluster("c1", "maas-creds", None, Some("zone-a"));
        let maas = hcluster.spec.platform.maas.as_ref().unwrap();
        let endpoint = test_endpoint();

        let mut first = fresh_cluster("c1", "cp-namespace");
        apply_desired_state(&mut first, maas, &endpoint);

        let mut second = first.clone();
        apply_desired_state(&mut second, maas, &endpoint);

        // create_or_update skips the write when the objects compare equal.
        assert_eq!(first, second);
    }
}
