//! Cluster-level infrastructure descriptor reconciliation.
//!
//! One `MaasCluster` per hosted cluster, keyed by cluster name in the
//! control-plane namespace. Created once, then re-derived from the current
//! spec on every pass so endpoint and DNS-domain drift is corrected.

use crate::credentials::{CLUSTER_LABEL, PLATFORM_LABEL};
use crate::error::PlatformError;
use crate::upsert;
use crds::{ApiEndpoint, HostedCluster, MaasCluster, MaasClusterSpec, MaasPlatformSpec, PlatformType};
use kube::api::Api;
use kube::{Client, ResourceExt};
use tracing::info;

/// DNS domain used when the cluster spec leaves it unset.
pub const DEFAULT_DNS_DOMAIN: &str = "maas.local";

/// Tells the provider that DNS records are managed outside of MAAS. External
/// actors may strip it, so it is re-applied on every reconcile.
pub const CUSTOM_DNS_ANNOTATION: &str = "spectrocloud.com/custom-dns-provided";

/// Effective DNS domain for a cluster spec.
pub fn dns_domain(maas: &MaasPlatformSpec) -> String {
    maas.dns_domain
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DNS_DOMAIN.to_string())
}

/// Projects the desired state onto `cluster`. Pure; used on both the create
/// and the update path so spec edits converge on the next pass.
pub fn apply_desired_state(
    cluster: &mut MaasCluster,
    maas: &MaasPlatformSpec,
    api_endpoint: &ApiEndpoint,
) {
    cluster.spec = MaasClusterSpec {
        dns_domain: dns_domain(maas),
        control_plane_endpoint: api_endpoint.clone(),
    };
    cluster
        .annotations_mut()
        .insert(CUSTOM_DNS_ANNOTATION.to_string(), String::new());
}

pub(crate) fn fresh_cluster(cluster_name: &str, control_plane_namespace: &str) -> MaasCluster {
    let mut cluster = MaasCluster::new(cluster_name, MaasClusterSpec::default());
    cluster.metadata.namespace = Some(control_plane_namespace.to_string());
    cluster
        .labels_mut()
        .insert(CLUSTER_LABEL.to_string(), cluster_name.to_string());
    cluster
        .labels_mut()
        .insert(PLATFORM_LABEL.to_string(), "maas".to_string());
    cluster
}

/// Creates or updates the cluster's `MaasCluster` descriptor and returns the
/// reconciled object so the caller can record its identity in status.
///
/// The descriptor is never deleted here; it goes away with the cascading
/// deletion of the parent cluster.
pub async fn reconcile(
    client: &Client,
    hcluster: &HostedCluster,
    control_plane_namespace: &str,
    api_endpoint: &ApiEndpoint,
) -> Result<MaasCluster, PlatformError> {
    let cluster_name = hcluster.name_any();
    let Some(maas) = hcluster.spec.platform.maas.as_ref() else {
        return Err(PlatformError::MisconfiguredPlatform {
            cluster: cluster_name,
            platform: PlatformType::Maas,
        });
    };

    let api: Api<MaasCluster> = Api::namespaced(client.clone(), control_plane_namespace);
    let fresh = fresh_cluster(&cluster_name, control_plane_namespace);
    let (reconciled, outcome) = upsert::create_or_update(&api, &cluster_name, fresh, |cluster| {
        apply_desired_state(cluster, maas, api_endpoint);
    })
    .await?;
    info!(
        ?outcome,
        "reconciled MaasCluster {control_plane_namespace}/{cluster_name}"
    );
    Ok(reconciled)
}
