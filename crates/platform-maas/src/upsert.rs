//! Idempotent create-or-update against the Kubernetes API.
//!
//! Every mutation follows the same shape: read the current object, apply the
//! desired state onto a copy, and write only when the result differs. A
//! retried call after a transient failure therefore converges instead of
//! duplicating objects or amplifying writes.

use crate::error::PlatformError;
use kube::Resource;
use kube::api::{Api, PostParams};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use tracing::{debug, info};

/// What a create-or-update call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The object was absent and has been created.
    Created,
    /// The object existed and differed from the desired state.
    Updated,
    /// The object already matched the desired state; no write was issued.
    Unchanged,
}

/// Creates `fresh` with the desired state applied, or updates the existing
/// object in place when applying the desired state changes it.
///
/// `apply` must be a pure projection of the desired state onto the object it
/// is given; it runs against a fresh object on the create path and against
/// the live object on the update path. Conflicts (409) are recovered locally
/// by re-reading once and re-applying within the same call.
pub async fn create_or_update<K, F>(
    api: &Api<K>,
    name: &str,
    fresh: K,
    apply: F,
) -> Result<(K, Outcome), PlatformError>
where
    K: Resource + Clone + Debug + DeserializeOwned + Serialize + PartialEq,
    K::DynamicType: Default,
    F: Fn(&mut K),
{
    match api.get_opt(name).await? {
        None => {
            let mut desired = fresh;
            apply(&mut desired);
            match api.create(&PostParams::default(), &desired).await {
                Ok(created) => {
                    info!("created {} {}", kind::<K>(), name);
                    Ok((created, Outcome::Created))
                }
                Err(kube::Error::Api(ae)) if ae.code == 409 => {
                    // Lost a create race; converge on the object that won.
                    let existing = api.get(name).await?;
                    update_if_changed(api, name, existing, &apply).await
                }
                Err(e) => Err(e.into()),
            }
        }
        Some(existing) => update_if_changed(api, name, existing, &apply).await,
    }
}

async fn update_if_changed<K, F>(
    api: &Api<K>,
    name: &str,
    existing: K,
    apply: &F,
) -> Result<(K, Outcome), PlatformError>
where
    K: Resource + Clone + Debug + DeserializeOwned + Serialize + PartialEq,
    K::DynamicType: Default,
    F: Fn(&mut K),
{
    let mut desired = existing.clone();
    apply(&mut desired);
    if desired == existing {
        debug!("{} {} already up to date, skipping write", kind::<K>(), name);
        return Ok((existing, Outcome::Unchanged));
    }

    match api.replace(name, &PostParams::default(), &desired).await {
        Ok(updated) => {
            info!("updated {} {}", kind::<K>(), name);
            Ok((updated, Outcome::Updated))
        }
        Err(kube::Error::Api(ae)) if ae.code == 409 => {
            // Someone wrote in between; re-read and re-apply once.
            let current = api.get(name).await?;
            let mut desired = current.clone();
            apply(&mut desired);
            if desired == current {
                return Ok((current, Outcome::Unchanged));
            }
            let updated = api.replace(name, &PostParams::default(), &desired).await?;
            info!("updated {} {} after conflict", kind::<K>(), name);
            Ok((updated, Outcome::Updated))
        }
        Err(e) => Err(e.into()),
    }
}

fn kind<K>() -> String
where
    K: Resource,
    K::DynamicType: Default,
{
    K::kind(&K::DynamicType::default()).into_owned()
}
