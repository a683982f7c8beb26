// Determinism, irrelevance and sensitivity of scale-set and sync-pod digests

mod common;

use common::{fixture_cluster, pool, replace_pool};
use confighash_core::model::{AgentPoolProfile, Provider, Role, VmSize};
use confighash_core::{ClusterHasher, ConfigHashError, Hasher, VersionRegistry};
use proptest::prelude::*;

fn scale_set_hex(cluster: &confighash_core::ClusterConfig, role: Role) -> String {
    ClusterHasher::new()
        .hash_scale_set(cluster, &pool(cluster, role))
        .unwrap()
        .to_hex()
}

fn sync_hex(cluster: &confighash_core::ClusterConfig) -> String {
    ClusterHasher::new().hash_sync_pod(cluster).unwrap().to_hex()
}

// ---------- determinism ----------

#[test]
fn test_repeated_calls_are_identical() {
    let hasher = ClusterHasher::new();
    let cluster = fixture_cluster("v7.1");
    let master = pool(&cluster, Role::Master);

    let first = hasher.hash_scale_set(&cluster, &master).unwrap();
    for _ in 0..10 {
        assert_eq!(hasher.hash_scale_set(&cluster, &master).unwrap(), first);
    }
}

#[test]
fn test_independent_hashers_agree() {
    let cluster = fixture_cluster("v6.0");
    let a = ClusterHasher::new().hash_cluster(&cluster).unwrap();
    let b = ClusterHasher::default().hash_cluster(&cluster.clone()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_hashing_does_not_mutate_cluster() {
    let cluster = fixture_cluster("v7.1");
    let before = cluster.clone();

    ClusterHasher::new().hash_cluster(&cluster).unwrap();

    assert_eq!(cluster, before);
}

// ---------- irrelevance ----------

#[test]
fn test_subnet_cidr_is_irrelevant() {
    for version in VersionRegistry::builtin().versions() {
        let base = fixture_cluster(version);
        let mut changed = base.clone();
        let compute = replace_pool(&mut changed, Role::Compute, |p| AgentPoolProfile {
            subnet_cidr: "10.0.0.0/24".into(),
            ..p
        });

        let hasher = ClusterHasher::new();
        assert_eq!(
            hasher.hash_scale_set(&base, &pool(&base, Role::Compute)).unwrap(),
            hasher.hash_scale_set(&changed, &compute).unwrap(),
            "{}",
            version
        );
    }
}

#[test]
fn test_master_count_is_irrelevant_when_pinned() {
    for version in ["v7.0", "v7.1", "v8.0"] {
        let base = fixture_cluster(version);
        let mut changed = base.clone();
        let master = replace_pool(&mut changed, Role::Master, |p| p.with_count(5));

        let hasher = ClusterHasher::new();
        assert_eq!(
            hasher.hash_scale_set(&base, &pool(&base, Role::Master)).unwrap(),
            hasher.hash_scale_set(&changed, &master).unwrap(),
            "{}",
            version
        );
    }
}

#[test]
fn test_master_count_is_relevant_before_pinning() {
    let base = fixture_cluster("v6.0");
    let mut changed = base.clone();
    replace_pool(&mut changed, Role::Master, |p| p.with_count(5));

    assert_ne!(scale_set_hex(&base, Role::Master), scale_set_hex(&changed, Role::Master));
}

#[test]
fn test_master_and_infra_names_are_irrelevant() {
    for role in [Role::Master, Role::Infra] {
        let base = fixture_cluster("v7.1");
        let mut changed = base.clone();
        replace_pool(&mut changed, role, |p| p.with_name("renamed"));

        assert_eq!(scale_set_hex(&base, role), scale_set_hex(&changed, role));
    }
}

#[test]
fn test_customer_admin_group_is_irrelevant_before_v6() {
    let with_group = |version: &str| {
        let mut cluster = fixture_cluster(version);
        let Provider::AzureAd(aad) = &mut cluster.auth_profile.identity_providers[0].provider;
        aad.customer_admin_group_id = "admins".into();
        cluster
    };

    for version in ["v5.1", "v5.2"] {
        assert_eq!(sync_hex(&fixture_cluster(version)), sync_hex(&with_group(version)));
    }
    for version in ["v6.0", "v7.0", "v7.1"] {
        assert_ne!(sync_hex(&fixture_cluster(version)), sync_hex(&with_group(version)));
    }
}

#[test]
fn test_router_fqdn_is_irrelevant_before_v7() {
    let with_fqdn = |version: &str| {
        let mut cluster = fixture_cluster(version);
        cluster.router_profiles[0].fqdn = "router.example.com".into();
        cluster
    };

    for version in ["v5.1", "v5.2", "v6.0"] {
        assert_eq!(sync_hex(&fixture_cluster(version)), sync_hex(&with_fqdn(version)));
    }
    for version in ["v7.0", "v7.1"] {
        assert_ne!(sync_hex(&fixture_cluster(version)), sync_hex(&with_fqdn(version)));
    }
}

#[test]
fn test_agent_pools_are_irrelevant_to_sync_pod() {
    let base = fixture_cluster("v7.1");
    let mut changed = base.clone();
    changed.agent_pool_profiles.clear();

    assert_eq!(sync_hex(&base), sync_hex(&changed));
}

#[test]
fn test_cluster_id_is_irrelevant() {
    let base = fixture_cluster("v7.1");
    let mut changed = base.clone();
    changed.id = "subscriptions/other".into();

    assert_eq!(scale_set_hex(&base, Role::Compute), scale_set_hex(&changed, Role::Compute));
    assert_eq!(sync_hex(&base), sync_hex(&changed));
}

// ---------- sensitivity ----------

#[test]
fn test_vm_size_is_relevant() {
    let base = fixture_cluster("v7.1");
    let mut changed = base.clone();
    replace_pool(&mut changed, Role::Compute, |p| p.with_vm_size(VmSize::STANDARD_D4S_V3));

    assert_ne!(scale_set_hex(&base, Role::Compute), scale_set_hex(&changed, Role::Compute));
}

#[test]
fn test_location_and_vm_image_are_relevant() {
    let base = fixture_cluster("v7.1");

    let mut moved = base.clone();
    moved.location = "eastus".into();
    assert_ne!(scale_set_hex(&base, Role::Infra), scale_set_hex(&moved, Role::Infra));

    let mut reimaged = base.clone();
    reimaged.vm_image.version = "311.43.20190101".into();
    assert_ne!(scale_set_hex(&base, Role::Infra), scale_set_hex(&reimaged, Role::Infra));
}

#[test]
fn test_every_image_reference_is_relevant() {
    let names: Vec<&'static str> = fixture_cluster("v7.1")
        .images
        .entries()
        .iter()
        .map(|(name, _)| *name)
        .collect();

    for version in VersionRegistry::builtin().versions() {
        let base = fixture_cluster(version);
        let base_hex = sync_hex(&base);

        for name in &names {
            let mut changed = base.clone();
            if let Some(slot) = changed.images.get_mut(name) {
                *slot = "registry.example.com/changed:v2".into();
            }
            assert_ne!(base_hex, sync_hex(&changed), "{} in {}", name, version);
        }
    }
}

#[test]
fn test_image_version_and_secret_are_relevant_to_sync_pod() {
    let base = fixture_cluster("v7.1");

    let mut upgraded = base.clone();
    upgraded.image_version = "311.1.0".into();
    assert_ne!(sync_hex(&base), sync_hex(&upgraded));

    let mut rotated = base.clone();
    let Provider::AzureAd(aad) = &mut rotated.auth_profile.identity_providers[0].provider;
    aad.secret = confighash_core_types::Sensitive::new("rotated".to_string());
    assert_ne!(sync_hex(&base), sync_hex(&rotated));
}

#[test]
fn test_versions_with_different_behavior_differ() {
    let hex = |version: &str| scale_set_hex(&fixture_cluster(version), Role::Master);

    assert_ne!(hex("v5.2"), hex("v6.0"));
    assert_ne!(hex("v6.0"), hex("v7.0"));
    assert_ne!(hex("v7.0"), hex("v7.1"));
    assert_ne!(hex("v7.1"), hex("v8.0"));
}

// ---------- cross-role independence ----------

#[test]
fn test_roles_never_share_a_digest() {
    for version in VersionRegistry::builtin().versions() {
        let cluster = fixture_cluster(version);
        let master = scale_set_hex(&cluster, Role::Master);
        let infra = scale_set_hex(&cluster, Role::Infra);
        let compute = scale_set_hex(&cluster, Role::Compute);

        assert_ne!(master, infra, "{}", version);
        assert_ne!(master, compute, "{}", version);
        assert_ne!(infra, compute, "{}", version);
    }
}

#[test]
fn test_role_change_only_affects_its_scale_set() {
    let base = fixture_cluster("v7.1");
    let mut changed = base.clone();
    replace_pool(&mut changed, Role::Compute, |p| p.with_count(9));

    let hasher = ClusterHasher::new();
    let before = hasher.hash_cluster(&base).unwrap();
    let after = hasher.hash_cluster(&changed).unwrap();

    assert_eq!(before.scale_sets["ss-master"], after.scale_sets["ss-master"]);
    assert_eq!(before.scale_sets["ss-infra"], after.scale_sets["ss-infra"]);
    assert_ne!(before.scale_sets["ss-compute"], after.scale_sets["ss-compute"]);
    assert_eq!(before.sync_pod, after.sync_pod);
}

// ---------- failures ----------

#[test]
fn test_unknown_version_is_rejected() {
    let hasher = ClusterHasher::new();

    for version in ["", "v4.9", "v7", "v9.0", "7.1"] {
        let cluster = fixture_cluster(version);
        let expected = Err(ConfigHashError::UnknownSchemaVersion {
            version: version.to_string(),
        });

        assert_eq!(hasher.hash_scale_set(&cluster, &pool(&cluster, Role::Master)), expected);
        assert_eq!(hasher.hash_sync_pod(&cluster), expected);
    }
}

#[test]
fn test_pool_outside_cluster_is_invalid_target() {
    let cluster = fixture_cluster("v7.1");
    let stranger = AgentPoolProfile::new(Role::Compute).with_name("gpu");

    assert!(matches!(
        ClusterHasher::new().hash_scale_set(&cluster, &stranger),
        Err(ConfigHashError::InvalidTarget { role: Role::Compute, .. })
    ));
}

#[test]
fn test_bare_role_profile_differing_from_member_is_invalid_target() {
    let cluster = fixture_cluster("v7.1");
    // The cluster's compute pool carries a VM size; a bare profile is not it.
    let bare = AgentPoolProfile::new(Role::Compute);

    assert!(matches!(
        ClusterHasher::new().hash_scale_set(&cluster, &bare),
        Err(ConfigHashError::InvalidTarget { .. })
    ));
}

#[test]
fn test_sync_pod_without_router_profile_fails() {
    let mut cluster = fixture_cluster("v7.1");
    cluster.router_profiles.clear();

    assert!(matches!(
        ClusterHasher::new().hash_sync_pod(&cluster),
        Err(ConfigHashError::Render { .. })
    ));
}

// ---------- properties ----------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_scale_set_digest_depends_only_on_rendered_inputs(
        count in 0u32..100,
        cidr in "[0-9]{1,3}\\.[0-9]{1,3}\\.0\\.0/[0-9]{2}",
        cluster_id in "[a-z/]{0,40}",
    ) {
        let mut a = fixture_cluster("v7.1");
        let pool_a = replace_pool(&mut a, Role::Compute, |p| p.with_count(count));

        let mut b = a.clone();
        b.id = cluster_id;
        let pool_b = replace_pool(&mut b, Role::Compute, |p| AgentPoolProfile {
            subnet_cidr: cidr,
            ..p
        });

        let hasher = ClusterHasher::new();
        prop_assert_eq!(
            hasher.hash_scale_set(&a, &pool_a).unwrap(),
            hasher.hash_scale_set(&b, &pool_b).unwrap()
        );
    }

    #[test]
    fn prop_distinct_counts_give_distinct_digests(a in 0u32..1000, b in 0u32..1000) {
        prop_assume!(a != b);

        let mut left = fixture_cluster("v7.1");
        let left_pool = replace_pool(&mut left, Role::Compute, |p| p.with_count(a));
        let mut right = fixture_cluster("v7.1");
        let right_pool = replace_pool(&mut right, Role::Compute, |p| p.with_count(b));

        let hasher = ClusterHasher::new();
        prop_assert_ne!(
            hasher.hash_scale_set(&left, &left_pool).unwrap(),
            hasher.hash_scale_set(&right, &right_pool).unwrap()
        );
    }

    #[test]
    fn prop_sync_digest_tracks_router_image(tag in "[a-z0-9]{1,12}") {
        let base = fixture_cluster("v7.1");
        let mut changed = base.clone();
        changed.images.router = format!("registry.example.com/router:{}", tag);

        let hasher = ClusterHasher::new();
        let changed_digest = hasher.hash_sync_pod(&changed).unwrap();
        prop_assert_ne!(hasher.hash_sync_pod(&base).unwrap(), changed_digest);
        prop_assert_eq!(hasher.hash_sync_pod(&changed).unwrap(), changed_digest);
    }
}
