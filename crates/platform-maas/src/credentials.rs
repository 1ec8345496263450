//! Cross-namespace propagation of the MAAS credentials secret.
//!
//! One-way sync: the user-supplied secret in the cluster namespace is the
//! source of truth. The copy in the control-plane namespace is replaced in
//! full whenever any required key differs ([`copy_is_stale`] is the diff
//! function) and left untouched otherwise, so consumers are not restarted on
//! no-op reconciles.

use crate::error::PlatformError;
use crds::{HostedCluster, PlatformType};
use k8s_openapi::api::core::v1::Secret;
use kube::api::{Api, DeleteParams, PostParams};
use kube::{Client, ResourceExt};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Secret key holding the MAAS API endpoint URL.
pub const ENDPOINT_KEY: &str = "MAAS_ENDPOINT";

/// Secret key holding the MAAS API key.
pub const API_KEY_KEY: &str = "MAAS_API_KEY";

/// Keys that must be present before any infrastructure object is created.
pub const REQUIRED_KEYS: [&str; 2] = [ENDPOINT_KEY, API_KEY_KEY];

/// Label keys applied to every object the adapter writes.
pub const CLUSTER_LABEL: &str = "metalshift.io/cluster";
/// Value: the lowercase platform name.
pub const PLATFORM_LABEL: &str = "platform";

/// Deterministic name of a cluster's credentials copy.
pub fn derived_copy_name(cluster_name: &str) -> String {
    format!("{cluster_name}-maas-credentials")
}

/// Namespace the source secret is read from: the hosted cluster's own.
pub fn source_namespace(hcluster: &HostedCluster) -> Result<String, PlatformError> {
    hcluster.namespace().ok_or_else(|| {
        PlatformError::Validation(format!(
            "hosted cluster {} has no namespace",
            hcluster.name_any()
        ))
    })
}

/// Resolves the source secret lookup. Absence is user-correctable, not a
/// transient backend failure, and is reported as such.
pub fn require_source(
    lookup: Result<Option<Secret>, kube::Error>,
    name: &str,
    namespace: &str,
) -> Result<Secret, PlatformError> {
    match lookup {
        Ok(Some(secret)) => Ok(secret),
        Ok(None) => Err(PlatformError::MissingCredentialsSecret {
            secret: name.to_string(),
            namespace: namespace.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Validates that the source secret carries every required key.
pub fn validate_source(source: &Secret) -> Result<(), PlatformError> {
    for key in REQUIRED_KEYS {
        let present = source.data.as_ref().is_some_and(|d| d.contains_key(key));
        if !present {
            return Err(PlatformError::MissingCredentialKey {
                secret: source.name_any(),
                key,
            });
        }
    }
    Ok(())
}

/// Diff function for the one-way sync: true when any required key's bytes
/// differ between the existing copy and the source.
pub fn copy_is_stale(existing: &Secret, source: &Secret) -> bool {
    let Some(source_data) = source.data.as_ref() else {
        // An empty source never validates, so nothing to sync.
        return false;
    };
    let Some(existing_data) = existing.data.as_ref() else {
        return true;
    };
    REQUIRED_KEYS
        .iter()
        .any(|key| existing_data.get(*key) != source_data.get(*key))
}

fn desired_copy(cluster_name: &str, name: &str, namespace: &str, source: &Secret) -> Secret {
    let mut copy = Secret {
        type_: Some("Opaque".to_string()),
        data: source.data.clone(),
        ..Secret::default()
    };
    copy.metadata.name = Some(name.to_string());
    copy.metadata.namespace = Some(namespace.to_string());
    copy.metadata.labels = Some(BTreeMap::from([
        (CLUSTER_LABEL.to_string(), cluster_name.to_string()),
        (PLATFORM_LABEL.to_string(), "maas".to_string()),
    ]));
    copy
}

/// Copies the cluster's credentials secret into the control-plane namespace.
///
/// The copy keeps the source secret's name so the provider deployment's
/// secret references resolve without rewiring. Replacement is whole-secret,
/// not a key merge, so a rotated source never leaves stale keys behind.
pub async fn propagate(
    client: &Client,
    hcluster: &HostedCluster,
    control_plane_namespace: &str,
) -> Result<(), PlatformError> {
    let cluster_name = hcluster.name_any();
    let namespace = source_namespace(hcluster)?;
    let Some(maas) = hcluster.spec.platform.maas.as_ref() else {
        return Err(PlatformError::MisconfiguredPlatform {
            cluster: cluster_name,
            platform: PlatformType::Maas,
        });
    };

    let source_api: Api<Secret> = Api::namespaced(client.clone(), &namespace);
    let source = require_source(
        source_api.get_opt(&maas.identity_ref.name).await,
        &maas.identity_ref.name,
        &namespace,
    )?;
    validate_source(&source)?;

    let copy_name = maas.identity_ref.name.as_str();
    let dest_api: Api<Secret> = Api::namespaced(client.clone(), control_plane_namespace);
    match dest_api.get_opt(copy_name).await? {
        None => {
            let desired = desired_copy(&cluster_name, copy_name, control_plane_namespace, &source);
            dest_api.create(&PostParams::default(), &desired).await?;
            info!("created credentials secret {control_plane_namespace}/{copy_name}");
        }
        Some(existing) if copy_is_stale(&existing, &source) => {
            let mut desired =
                desired_copy(&cluster_name, copy_name, control_plane_namespace, &source);
            desired.metadata.resource_version = existing.resource_version();
            dest_api
                .replace(copy_name, &PostParams::default(), &desired)
                .await?;
            info!("updated rotated credentials secret {control_plane_namespace}/{copy_name}");
        }
        Some(_) => {
            debug!("credentials secret {control_plane_namespace}/{copy_name} up to date, skipping write");
        }
    }
    Ok(())
}

/// Deletes the cluster's credential copies from the control-plane namespace.
///
/// Both naming modes are covered: the derived `<cluster>-maas-credentials`
/// name always, and the identity-ref-named copy when the platform block is
/// still readable. Already-absent objects are success.
pub async fn delete(
    client: &Client,
    hcluster: &HostedCluster,
    control_plane_namespace: &str,
) -> Result<(), PlatformError> {
    let mut names = vec![derived_copy_name(&hcluster.name_any())];
    if let Some(maas) = hcluster.spec.platform.maas.as_ref() {
        if !names.contains(&maas.identity_ref.name) {
            names.push(maas.identity_ref.name.clone());
        }
    }

    let api: Api<Secret> = Api::namespaced(client.clone(), control_plane_namespace);
    for name in names {
        match api.delete(&name, &DeleteParams::default()).await {
            Ok(_) => info!("deleted credentials secret {control_plane_namespace}/{name}"),
            Err(kube::Error::Api(ae)) if ae.code == 404 => {
                debug!("credentials secret {control_plane_namespace}/{name} already absent");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
