//! Desired state of one managed cluster for one reconcile pass.
//!
//! The model is deserialize-only: it is read from cluster descriptions and
//! handed to the hasher by reference. Hashing never looks at these structs
//! directly; it hashes what the renderer makes of them.

use confighash_core_types::Sensitive;
use serde::Deserialize;

use super::{AgentPoolProfile, ImageConfig};

/// Immutable snapshot of the desired cluster state
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Cloud resource id of the cluster
    pub id: String,

    pub location: String,

    /// Schema version selecting the rendering behavior, e.g. `v7.1`
    pub schema_version: String,

    /// Version of the cluster software shipped in the VM image
    pub image_version: String,

    pub vm_image: VmImage,

    pub images: ImageConfig,

    pub agent_pool_profiles: Vec<AgentPoolProfile>,

    pub router_profiles: Vec<RouterProfile>,

    pub auth_profile: AuthProfile,
}

impl ClusterConfig {
    /// Whether `pool` is one of this cluster's agent pool profiles
    pub fn contains_pool(&self, pool: &AgentPoolProfile) -> bool {
        self.agent_pool_profiles.iter().any(|p| p == pool)
    }

    pub fn pools_with_role(
        &self,
        role: super::Role,
    ) -> impl Iterator<Item = &AgentPoolProfile> + '_ {
        self.agent_pool_profiles
            .iter()
            .filter(move |p| p.role == role)
    }
}

/// Marketplace image the scale-set instances boot from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VmImage {
    pub publisher: String,
    pub offer: String,
    pub sku: String,
    pub version: String,
}

/// Ingress router settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouterProfile {
    pub name: String,
    pub public_subdomain: String,
    pub fqdn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthProfile {
    pub identity_providers: Vec<IdentityProvider>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityProvider {
    #[serde(default)]
    pub name: String,

    pub provider: Provider,
}

/// Identity provider backends
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum Provider {
    #[serde(rename = "AADIdentityProvider")]
    AzureAd(AadIdentityProvider),
}

impl Provider {
    /// Kind string used in rendered OAuth configuration
    pub fn kind(&self) -> &'static str {
        match self {
            Provider::AzureAd(_) => "AADIdentityProvider",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AadIdentityProvider {
    pub client_id: String,
    pub secret: Sensitive<String>,
    pub tenant_id: String,
    pub customer_admin_group_id: String,
}
