//! Test utilities for unit testing the adapter
//!
//! Helpers for building HostedCluster/NodePool/Secret fixtures.

use crds::{
    ApiEndpoint, HostedCluster, HostedClusterSpec, MaasIdentityReference, MaasNodePoolPlatform,
    MaasPlatformSpec, NodePool, NodePoolPlatform, NodePoolSpec, PlatformSpec, PlatformType,
};
use k8s_openapi::ByteString;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// Helper to create a test HostedCluster with a MAAS platform block.
pub fn test_hosted_cluster(
    name: &str,
    identity_ref: &str,
    dns_domain: Option<&str>,
    zone: Option<&str>,
) -> HostedCluster {
    HostedCluster {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("clusters".to_string()),
            ..ObjectMeta::default()
        },
        spec: HostedClusterSpec {
            platform: PlatformSpec {
                platform_type: PlatformType::Maas,
                maas: Some(MaasPlatformSpec {
                    identity_ref: MaasIdentityReference {
                        name: identity_ref.to_string(),
                    },
                    dns_domain: dns_domain.map(str::to_string),
                    zone: zone.map(str::to_string),
                }),
            },
        },
        status: None,
    }
}

/// Helper to create a test HostedCluster whose MAAS block is absent.
pub fn hosted_cluster_without_platform(name: &str) -> HostedCluster {
    HostedCluster {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("clusters".to_string()),
            ..ObjectMeta::default()
        },
        spec: HostedClusterSpec {
            platform: PlatformSpec {
                platform_type: PlatformType::Maas,
                maas: None,
            },
        },
        status: None,
    }
}

/// Helper to create a test NodePool with an optional MAAS platform block.
pub fn test_node_pool(name: &str, maas: Option<MaasNodePoolPlatform>) -> NodePool {
    NodePool {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some("clusters".to_string()),
            ..ObjectMeta::default()
        },
        spec: NodePoolSpec {
            cluster_name: "test-cluster".to_string(),
            replicas: Some(2),
            platform: NodePoolPlatform {
                platform_type: PlatformType::Maas,
                maas,
            },
        },
        status: None,
    }
}

/// Helper to create a test credentials secret with the given string data.
pub fn test_secret(name: &str, namespace: &str, pairs: &[(&str, &str)]) -> Secret {
    let data: BTreeMap<String, ByteString> = pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), ByteString(value.as_bytes().to_vec())))
        .collect();
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..ObjectMeta::default()
        },
        data: Some(data),
        type_: Some("Opaque".to_string()),
        ..Secret::default()
    }
}

/// Control-plane endpoint fixture.
pub fn test_endpoint() -> ApiEndpoint {
    ApiEndpoint {
        host: "api.test-cluster.example.com".to_string(),
        port: 6443,
    }
}
