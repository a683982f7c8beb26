use confighash_core::model::{
    AadIdentityProvider, AgentPoolProfile, ClusterConfig, IdentityProvider, ImageConfig,
    Provider, Role, RouterProfile, VmSize,
};

/// The cluster the frozen digests were recorded against
///
/// Most inputs are left at their zero value so that later additions to the
/// model do not disturb the recorded digests.
#[allow(dead_code)]
pub fn fixture_cluster(schema_version: &str) -> ClusterConfig {
    ClusterConfig {
        id: "subscriptions/foo/resourceGroups/bar/providers/baz/qux/quz".to_string(),
        schema_version: schema_version.to_string(),
        image_version: "311.0.0".to_string(),
        images: ImageConfig {
            alert_manager: ":".to_string(),
            config_reloader: ":".to_string(),
            grafana: ":".to_string(),
            kube_rbac_proxy: ":".to_string(),
            kube_state_metrics: ":".to_string(),
            node_exporter: ":".to_string(),
            oauth_proxy: ":".to_string(),
            prometheus: ":".to_string(),
            prometheus_config_reloader: ":".to_string(),
            prometheus_operator: ":".to_string(),
            ..ImageConfig::default()
        },
        agent_pool_profiles: vec![
            AgentPoolProfile::new(Role::Master),
            AgentPoolProfile::new(Role::Infra),
            AgentPoolProfile::new(Role::Compute).with_vm_size(VmSize::STANDARD_D2S_V3),
        ],
        router_profiles: vec![RouterProfile::default()],
        auth_profile: confighash_core::model::AuthProfile {
            identity_providers: vec![IdentityProvider {
                name: String::new(),
                provider: Provider::AzureAd(AadIdentityProvider::default()),
            }],
        },
        ..ClusterConfig::default()
    }
}

/// The cluster's profile for `role`
#[allow(dead_code)]
pub fn pool(cluster: &ClusterConfig, role: Role) -> AgentPoolProfile {
    cluster
        .pools_with_role(role)
        .next()
        .cloned()
        .unwrap_or_else(|| panic!("fixture has no {} pool", role))
}

/// Replace the profile of `role` in `cluster`, returning the new profile
#[allow(dead_code)]
pub fn replace_pool(
    cluster: &mut ClusterConfig,
    role: Role,
    f: impl FnOnce(AgentPoolProfile) -> AgentPoolProfile,
) -> AgentPoolProfile {
    let index = cluster
        .agent_pool_profiles
        .iter()
        .position(|p| p.role == role)
        .unwrap_or_else(|| panic!("fixture has no {} pool", role));
    let updated = f(cluster.agent_pool_profiles[index].clone());
    cluster.agent_pool_profiles[index] = updated.clone();
    updated
}
