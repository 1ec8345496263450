//! Deployment spec for the MAAS CAPI provider controller.
//!
//! Pure construction, no I/O. Credentials are wired as secret-key references
//! by name, never as literal values, so a rotated secret reaches the
//! controller without a redeploy.

use crate::credentials::{API_KEY_KEY, ENDPOINT_KEY};
use crate::error::PlatformError;
use crds::{HostedCluster, PlatformType};
use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::core::v1::{
    Container, EnvVar, EnvVarSource, ObjectFieldSelector, PodSpec, PodTemplateSpec,
    ResourceRequirements, SecretKeySelector,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use kube::ResourceExt;
use std::collections::BTreeMap;

/// Environment variable overriding the configured provider image.
pub const IMAGE_OVERRIDE_ENV: &str = "MAAS_CAPI_PROVIDER_IMAGE";

/// Name of the provider controller container.
pub const CONTROLLER_NAME: &str = "maas-capi-controller";

/// Image precedence, first match wins: explicit override, then the
/// configured image.
pub fn resolve_image(configured: &str, override_image: Option<&str>) -> String {
    match override_image {
        Some(image) if !image.is_empty() => image.to_string(),
        _ => configured.to_string(),
    }
}

/// Resolves the provider image, honoring the process-environment override.
pub fn provider_image(configured: &str) -> String {
    resolve_image(configured, std::env::var(IMAGE_OVERRIDE_ENV).ok().as_deref())
}

/// Builds the deployment spec that launches the MAAS CAPI provider for this
/// cluster.
///
/// Resource limits and requests are a fixed floor, deliberately not derived
/// from the cluster spec.
pub fn capi_provider_deployment_spec(
    hcluster: &HostedCluster,
    image: &str,
) -> Result<DeploymentSpec, PlatformError> {
    let Some(maas) = hcluster.spec.platform.maas.as_ref() else {
        return Err(PlatformError::MisconfiguredPlatform {
            cluster: hcluster.name_any(),
            platform: PlatformType::Maas,
        });
    };
    let secret_name = maas.identity_ref.name.as_str();

    let container = Container {
        name: CONTROLLER_NAME.to_string(),
        image: Some(image.to_string()),
        args: Some(vec![
            "--v=2".to_string(),
            "--leader-elect=true".to_string(),
            "--sync-period=15m".to_string(),
            "--namespace=$(NAMESPACE)".to_string(),
        ]),
        env: Some(vec![
            // Injected from the running pod's own namespace.
            EnvVar {
                name: "NAMESPACE".to_string(),
                value_from: Some(EnvVarSource {
                    field_ref: Some(ObjectFieldSelector {
                        field_path: "metadata.namespace".to_string(),
                        ..ObjectFieldSelector::default()
                    }),
                    ..EnvVarSource::default()
                }),
                ..EnvVar::default()
            },
            secret_env(ENDPOINT_KEY, secret_name, ENDPOINT_KEY),
            secret_env(API_KEY_KEY, secret_name, API_KEY_KEY),
            EnvVar {
                name: "MAAS_ZONE".to_string(),
                value: maas.zone.clone(),
                ..EnvVar::default()
            },
        ]),
        resources: Some(ResourceRequirements {
            limits: Some(resource_list("200m", "100Mi")),
            requests: Some(resource_list("200m", "20Mi")),
            ..ResourceRequirements::default()
        }),
        ..Container::default()
    };

    Ok(DeploymentSpec {
        template: PodTemplateSpec {
            metadata: None,
            spec: Some(PodSpec {
                containers: vec![container],
                ..PodSpec::default()
            }),
        },
        ..DeploymentSpec::default()
    })
}

fn secret_env(name: &str, secret: &str, key: &str) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value_from: Some(EnvVarSource {
            secret_key_ref: Some(SecretKeySelector {
                name: secret.to_string(),
                key: key.to_string(),
                optional: None,
            }),
            ..EnvVarSource::default()
        }),
        ..EnvVar::default()
    }
}

fn resource_list(cpu: &str, memory: &str) -> BTreeMap<String, Quantity> {
    BTreeMap::from([
        ("cpu".to_string(), Quantity(cpu.to_string())),
        ("memory".to_string(), Quantity(memory.to_string())),
    ])
}
