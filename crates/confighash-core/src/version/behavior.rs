use serde::Serialize;
use std::fmt;

use crate::digest::DigestAlgorithm;

/// Whether a version's digests are frozen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
    /// Shipped; digests for fixed inputs must never change
    Released,
    /// Under development; digests may still change
    Development,
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseStatus::Released => f.write_str("released"),
            ReleaseStatus::Development => f.write_str("development"),
        }
    }
}

/// What a version renders into a scale-set model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleSetSchema {
    /// Resource API version of the scale-set model
    pub api_version: &'static str,
    /// Render `enableAcceleratedNetworking` on the primary NIC
    pub accelerated_networking: bool,
    /// Master capacity fixed by the version; the pool's count is then ignored
    pub pinned_master_capacity: Option<u32>,
    /// Render the role as a resource tag
    pub role_tag: bool,
    /// Host caching mode of the OS disk
    pub os_disk_caching: &'static str,
}

/// What a version renders into the sync-pod manifest bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SyncSchema {
    /// Namespace of the monitoring workloads
    pub monitoring_namespace: &'static str,
    /// Render the AAD customer admin group into the OAuth configuration
    pub customer_admin_group: bool,
    /// Render router FQDNs into the cluster-info config map
    pub router_fqdn: bool,
    /// Resync interval passed to the sync controller
    pub sync_interval: &'static str,
}

/// Self-contained behavior descriptor of one schema version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionBehavior {
    pub version: &'static str,
    pub status: ReleaseStatus,
    pub digest_algorithm: DigestAlgorithm,
    pub scale_set: ScaleSetSchema,
    pub sync: SyncSchema,
}

impl VersionBehavior {
    pub fn is_frozen(&self) -> bool {
        self.status == ReleaseStatus::Released
    }
}

pub(crate) const V5_SCALE_SET: ScaleSetSchema = ScaleSetSchema {
    api_version: "2018-06-01",
    accelerated_networking: false,
    pinned_master_capacity: None,
    role_tag: false,
    os_disk_caching: "ReadWrite",
};

pub(crate) const V6_SCALE_SET: ScaleSetSchema = ScaleSetSchema {
    api_version: "2018-10-01",
    accelerated_networking: true,
    ..V5_SCALE_SET
};

pub(crate) const V7_SCALE_SET: ScaleSetSchema = ScaleSetSchema {
    api_version: "2019-03-01",
    pinned_master_capacity: Some(3),
    role_tag: true,
    ..V6_SCALE_SET
};

pub(crate) const V7_1_SCALE_SET: ScaleSetSchema = ScaleSetSchema {
    os_disk_caching: "ReadOnly",
    ..V7_SCALE_SET
};

pub(crate) const V8_SCALE_SET: ScaleSetSchema = ScaleSetSchema {
    api_version: "2019-07-01",
    ..V7_1_SCALE_SET
};

pub(crate) const V5_SYNC: SyncSchema = SyncSchema {
    monitoring_namespace: "openshift-azure-monitoring",
    customer_admin_group: false,
    router_fqdn: false,
    sync_interval: "3m",
};

pub(crate) const V6_SYNC: SyncSchema = SyncSchema {
    customer_admin_group: true,
    ..V5_SYNC
};

pub(crate) const V7_SYNC: SyncSchema = SyncSchema {
    router_fqdn: true,
    ..V6_SYNC
};

pub(crate) const V7_1_SYNC: SyncSchema = SyncSchema {
    sync_interval: "2m",
    ..V7_SYNC
};

pub(crate) const V8_SYNC: SyncSchema = SyncSchema {
    monitoring_namespace: "openshift-monitoring",
    ..V7_1_SYNC
};
