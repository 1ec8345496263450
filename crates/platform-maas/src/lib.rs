//! MAAS platform adapter
//!
//! Translates a `HostedCluster`/`NodePool` specification into the objects the
//! MAAS cluster-api provider consumes:
//! - the cluster-level `MaasCluster` infrastructure descriptor,
//! - a credentials secret propagated into the control-plane namespace,
//! - the provider controller's deployment spec,
//! - a content-addressed `MaasMachineTemplate` per node pool.
//!
//! Every mutating operation is an idempotent create-or-update, safe under the
//! orchestrator's at-least-once, per-cluster-serialized delivery. The
//! orchestrator selects one adapter variant per cluster via
//! [`platform::for_platform`] and drives it from its own reconcile loop;
//! there is no scheduling or retry policy in this crate.

pub mod credentials;
pub mod deployment;
pub mod error;
pub mod infra;
pub mod machine_template;
pub mod options;
pub mod platform;
pub mod upsert;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod infra_test;
#[cfg(test)]
mod machine_template_test;

pub use error::PlatformError;
pub use platform::{
    InfraResource, MaasPlatform, MachineTemplate, Platform, PlatformConfig, for_platform,
};
