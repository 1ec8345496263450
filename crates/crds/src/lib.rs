//! Metalshift CRD definitions
//!
//! Kubernetes Custom Resource Definitions for the Metalshift hosted-cluster
//! orchestrator and the MAAS CAPI provider objects it reconciles.

pub mod capi;
pub mod hosted_cluster;
pub mod maas;
pub mod node_pool;
pub mod platform;

pub use capi::*;
pub use hosted_cluster::*;
pub use maas::*;
pub use node_pool::*;
pub use platform::*;
