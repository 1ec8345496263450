//! Renders all Metalshift and MAAS provider CRD manifests as YAML.

use anyhow::Result;
use kube::CustomResourceExt;

fn main() -> Result<()> {
    let manifests = [
        crds::HostedCluster::crd(),
        crds::NodePool::crd(),
        crds::MaasCluster::crd(),
        crds::MaasMachineTemplate::crd(),
    ];

    for crd in &manifests {
        println!("---");
        print!("{}", serde_yaml::to_string(crd)?);
    }

    Ok(())
}
