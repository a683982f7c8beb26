//! Scale-set resource model.
//!
//! Only the fields listed here are part of the model. Anything else about a
//! pool (its subnet range, for instance) never reaches the digest.

use serde_json::{json, Value};

use super::render_error;
use crate::errors::Result;
use crate::model::{AgentPoolProfile, ClusterConfig, Role};
use crate::version::VersionBehavior;

const SCALE_SET_TYPE: &str = "Microsoft.Compute/virtualMachineScaleSets";
const ADMIN_USERNAME: &str = "cloud-user";
const SUBNET_ID: &str =
    "[resourceId('Microsoft.Network/virtualNetworks/subnets', 'vnet', 'default')]";
const ROUTER_BACKEND_POOL_ID: &str =
    "[resourceId('Microsoft.Network/loadBalancers/backendAddressPools', 'lb-router', 'backend')]";
const ETCD_DISK_SIZE_GB: u32 = 32;
const PUBLIC_IP_IDLE_TIMEOUT_MINUTES: u32 = 15;

pub(crate) fn scale_set_model(
    cluster: &ClusterConfig,
    pool: &AgentPoolProfile,
    behavior: &VersionBehavior,
) -> Result<Value> {
    let schema = &behavior.scale_set;
    let name = pool.scale_set_name();

    if pool.role == Role::Compute && !pool.name.is_empty() && !is_dns_label(&pool.name) {
        return Err(render_error(
            name,
            behavior,
            format!("compute pool name {:?} is not a DNS label", pool.name),
        ));
    }

    let capacity = match (pool.role, schema.pinned_master_capacity) {
        (Role::Master, Some(pinned)) => pinned,
        _ => pool.count,
    };

    let image = &cluster.vm_image;

    Ok(json!({
        "apiVersion": schema.api_version,
        "type": SCALE_SET_TYPE,
        "name": name,
        "location": cluster.location,
        "tags": schema.role_tag.then(|| json!({ "role": pool.role.as_str() })),
        "sku": {
            "name": pool.vm_size.as_str(),
            "tier": "Standard",
            "capacity": capacity,
        },
        "properties": {
            "upgradePolicy": { "mode": "Manual" },
            "overprovision": false,
            "virtualMachineProfile": {
                "osProfile": {
                    "computerNamePrefix": pool.computer_name_prefix(),
                    "adminUsername": ADMIN_USERNAME,
                    "linuxConfiguration": { "disablePasswordAuthentication": true },
                },
                "storageProfile": {
                    "imageReference": {
                        "publisher": image.publisher,
                        "offer": image.offer,
                        "sku": image.sku,
                        "version": image.version,
                    },
                    "osDisk": {
                        "createOption": "FromImage",
                        "caching": schema.os_disk_caching,
                        "managedDisk": { "storageAccountType": "Premium_LRS" },
                    },
                    "dataDisks": data_disks(pool.role),
                },
                "networkProfile": {
                    "networkInterfaceConfigurations": [{
                        "name": "nic",
                        "properties": {
                            "primary": true,
                            "enableAcceleratedNetworking":
                                schema.accelerated_networking.then_some(true),
                            "ipConfigurations": [ip_configuration(pool.role)],
                        },
                    }],
                },
            },
        },
    }))
}

fn data_disks(role: Role) -> Option<Value> {
    (role == Role::Master).then(|| {
        json!([{
            "lun": 0,
            "name": "etcd",
            "createOption": "Empty",
            "diskSizeGB": ETCD_DISK_SIZE_GB,
        }])
    })
}

fn ip_configuration(role: Role) -> Value {
    let mut properties = json!({
        "primary": true,
        "subnet": { "id": SUBNET_ID },
    });

    match role {
        Role::Master => {
            properties["publicIPAddressConfiguration"] = json!({
                "name": "ip",
                "properties": { "idleTimeoutInMinutes": PUBLIC_IP_IDLE_TIMEOUT_MINUTES },
            });
        }
        Role::Infra => {
            properties["loadBalancerBackendAddressPools"] =
                json!([{ "id": ROUTER_BACKEND_POOL_ID }]);
        }
        Role::Compute => {}
    }

    json!({ "name": "ipconfig", "properties": properties })
}

/// RFC 1123 label: 1-63 lower-case alphanumerics or `-`, alphanumeric at
/// both ends
fn is_dns_label(s: &str) -> bool {
    let bytes = s.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= 63
        && bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && bytes.first() != Some(&b'-')
        && bytes.last() != Some(&b'-')
}
