//! Platform façade.
//!
//! One adapter variant per infrastructure platform, all implementing the
//! same capability set. The orchestrator selects a variant once, by the
//! cluster's platform-type tag, and calls only that variant's methods for
//! the cluster's lifetime. Return values are tagged by platform instead of
//! being inspected through optional pointer fields.

use crate::error::PlatformError;
use crate::{credentials, deployment, infra, machine_template};
use async_trait::async_trait;
use crds::{ApiEndpoint, HostedCluster, MaasCluster, MaasMachineTemplate, NodePool, PlatformType};
use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::rbac::v1::PolicyRule;
use kube::Client;
use std::sync::Arc;

/// Cluster-level infrastructure object produced by an adapter.
#[derive(Debug, Clone)]
pub enum InfraResource {
    /// The MAAS cluster descriptor.
    Maas(MaasCluster),
}

/// Machine template produced by an adapter.
#[derive(Debug, Clone)]
pub enum MachineTemplate {
    /// The MAAS machine template.
    Maas(MaasMachineTemplate),
}

/// Capability set every platform adapter implements.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Creates or updates the cluster-level infrastructure descriptor and
    /// returns the reconciled object for status recording.
    async fn reconcile_capi_infra(
        &self,
        client: &Client,
        hcluster: &HostedCluster,
        control_plane_namespace: &str,
        api_endpoint: &ApiEndpoint,
    ) -> Result<InfraResource, PlatformError>;

    /// Propagates the cluster's credentials into the control-plane
    /// namespace, writing only when content differs.
    async fn reconcile_credentials(
        &self,
        client: &Client,
        hcluster: &HostedCluster,
        control_plane_namespace: &str,
    ) -> Result<(), PlatformError>;

    /// Builds the deployment spec for this platform's CAPI provider
    /// controller. Pure; no I/O.
    fn capi_provider_deployment_spec(
        &self,
        hcluster: &HostedCluster,
    ) -> Result<DeploymentSpec, PlatformError>;

    /// Derives the content-addressed machine template for a node pool.
    /// Pure; no I/O.
    fn machine_template(&self, node_pool: &NodePool) -> Result<MachineTemplate, PlatformError>;

    /// Removes the cluster's credential copies. Already-absent objects are
    /// success.
    async fn delete_credentials(
        &self,
        client: &Client,
        hcluster: &HostedCluster,
        control_plane_namespace: &str,
    ) -> Result<(), PlatformError>;

    /// Reconciles platform secret encryption. Platforms without an
    /// encryption backend no-op.
    async fn reconcile_secret_encryption(
        &self,
        _client: &Client,
        _hcluster: &HostedCluster,
        _control_plane_namespace: &str,
    ) -> Result<(), PlatformError> {
        Ok(())
    }

    /// Extra RBAC rules this platform's provider controller needs beyond the
    /// default set. Most platforms need none.
    fn capi_policy_rules(&self) -> Vec<PolicyRule> {
        Vec::new()
    }
}

/// Adapter construction inputs shared across platforms.
#[derive(Debug, Clone, Default)]
pub struct PlatformConfig {
    /// Default image for the CAPI provider controller; overridable via the
    /// platform's image-override environment variable.
    pub capi_provider_image: String,
}

/// Selects the adapter variant for a platform-type tag. Called once per
/// cluster, before any adapter method.
pub fn for_platform(
    platform_type: PlatformType,
    config: &PlatformConfig,
) -> Result<Arc<dyn Platform>, PlatformError> {
    match platform_type {
        PlatformType::Maas => Ok(Arc::new(MaasPlatform::new(
            config.capi_provider_image.clone(),
        ))),
        other => Err(PlatformError::UnsupportedPlatform(other)),
    }
}

/// The MAAS adapter variant.
#[derive(Debug, Clone)]
pub struct MaasPlatform {
    capi_provider_image: String,
}

impl MaasPlatform {
    /// Creates the adapter with the configured provider image.
    pub fn new(capi_provider_image: String) -> Self {
        Self { capi_provider_image }
    }
}

#[async_trait]
impl Platform for MaasPlatform {
    async fn reconcile_capi_infra(
        &self,
        client: &Client,
        hcluster: &HostedCluster,
        control_plane_namespace: &str,
        api_endpoint: &ApiEndpoint,
    ) -> Result<InfraResource, PlatformError> {
        infra::reconcile(client, hcluster, control_plane_namespace, api_endpoint)
            .await
            .map(InfraResource::Maas)
    }

    async fn reconcile_credentials(
        &self,
        client: &Client,
        hcluster: &HostedCluster,
        control_plane_namespace: &str,
    ) -> Result<(), PlatformError> {
        credentials::propagate(client, hcluster, control_plane_namespace).await
    }

    fn capi_provider_deployment_spec(
        &self,
        hcluster: &HostedCluster,
    ) -> Result<DeploymentSpec, PlatformError> {
        let image = deployment::provider_image(&self.capi_provider_image);
        deployment::capi_provider_deployment_spec(hcluster, &image)
    }

    fn machine_template(&self, node_pool: &NodePool) -> Result<MachineTemplate, PlatformError> {
        machine_template::machine_template(node_pool).map(MachineTemplate::Maas)
    }

    async fn delete_credentials(
        &self,
        client: &Client,
        hcluster: &HostedCluster,
        control_plane_namespace: &str,
    ) -> Result<(), PlatformError> {
        credentials::delete(client, hcluster, control_plane_namespace).await
    }
}
