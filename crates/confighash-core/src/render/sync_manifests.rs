//! Sync-pod manifest bundle.
//!
//! The bundle is a `List` whose item order is fixed: namespace, cluster
//! info, OAuth configuration, sync controller, router, then monitoring
//! workloads. Agent pool profiles are never consulted here.

use serde_json::{json, Value};

use super::{render_error, SYNC_TARGET};
use crate::errors::Result;
use crate::model::{ClusterConfig, ImageConfig, Provider};
use crate::version::VersionBehavior;

const SYSTEM_NAMESPACE: &str = "kube-system";
const ROUTER_NAMESPACE: &str = "default";

pub(crate) fn sync_bundle(cluster: &ClusterConfig, behavior: &VersionBehavior) -> Result<Value> {
    if cluster.router_profiles.is_empty() {
        return Err(render_error(SYNC_TARGET, behavior, "cluster has no router profile"));
    }
    if cluster.auth_profile.identity_providers.is_empty() {
        return Err(render_error(
            SYNC_TARGET,
            behavior,
            "cluster has no identity provider",
        ));
    }

    let schema = &behavior.sync;
    let images = &cluster.images;

    let mut items = vec![
        json!({
            "apiVersion": "v1",
            "kind": "Namespace",
            "metadata": { "name": schema.monitoring_namespace },
        }),
        cluster_info(cluster, behavior),
        oauth_config(cluster, behavior),
        workload(
            "Deployment",
            "sync",
            SYSTEM_NAMESPACE,
            vec![container(
                "sync",
                &images.sync,
                vec![format!("--interval={}", schema.sync_interval)],
            )],
        ),
        workload(
            "DaemonSet",
            "router",
            ROUTER_NAMESPACE,
            vec![container("router", &images.router, Vec::new())],
        ),
    ];
    items.extend(monitoring_workloads(images, schema.monitoring_namespace));

    Ok(json!({
        "apiVersion": "v1",
        "kind": "List",
        "items": items,
    }))
}

fn cluster_info(cluster: &ClusterConfig, behavior: &VersionBehavior) -> Value {
    let routers: Vec<Value> = cluster
        .router_profiles
        .iter()
        .map(|r| {
            json!({
                "name": r.name,
                "publicSubdomain": r.public_subdomain,
                "fqdn": behavior.sync.router_fqdn.then_some(&r.fqdn),
            })
        })
        .collect();

    json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": { "name": "cluster-info", "namespace": SYSTEM_NAMESPACE },
        "data": {
            "imageVersion": cluster.image_version,
            "routers": routers,
        },
    })
}

fn oauth_config(cluster: &ClusterConfig, behavior: &VersionBehavior) -> Value {
    let providers: Vec<Value> = cluster
        .auth_profile
        .identity_providers
        .iter()
        .map(|idp| match &idp.provider {
            Provider::AzureAd(aad) => json!({
                "name": idp.name,
                "kind": idp.provider.kind(),
                "clientId": aad.client_id,
                "clientSecret": aad.secret.expose(),
                "tenantId": aad.tenant_id,
                "customerAdminGroupId": behavior
                    .sync
                    .customer_admin_group
                    .then_some(&aad.customer_admin_group_id),
            }),
        })
        .collect();

    json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": { "name": "oauth-config", "namespace": SYSTEM_NAMESPACE },
        "stringData": { "identityProviders": providers },
    })
}

fn monitoring_workloads(images: &ImageConfig, namespace: &str) -> Vec<Value> {
    vec![
        workload(
            "Deployment",
            "prometheus-operator",
            namespace,
            vec![container(
                "prometheus-operator",
                &images.prometheus_operator,
                vec![
                    format!(
                        "--prometheus-config-reloader={}",
                        images.prometheus_config_reloader
                    ),
                    format!("--config-reloader-image={}", images.config_reloader),
                ],
            )],
        ),
        workload(
            "StatefulSet",
            "prometheus",
            namespace,
            vec![
                container("prometheus", &images.prometheus, Vec::new()),
                container("oauth-proxy", &images.oauth_proxy, Vec::new()),
            ],
        ),
        workload(
            "StatefulSet",
            "alertmanager",
            namespace,
            vec![container("alertmanager", &images.alert_manager, Vec::new())],
        ),
        workload(
            "Deployment",
            "grafana",
            namespace,
            vec![
                container("grafana", &images.grafana, Vec::new()),
                container("oauth-proxy", &images.oauth_proxy, Vec::new()),
            ],
        ),
        workload(
            "Deployment",
            "kube-state-metrics",
            namespace,
            vec![
                container("kube-state-metrics", &images.kube_state_metrics, Vec::new()),
                container("kube-rbac-proxy", &images.kube_rbac_proxy, Vec::new()),
            ],
        ),
        workload(
            "DaemonSet",
            "node-exporter",
            namespace,
            vec![
                container("node-exporter", &images.node_exporter, Vec::new()),
                container("kube-rbac-proxy", &images.kube_rbac_proxy, Vec::new()),
            ],
        ),
    ]
}

fn workload(kind: &str, name: &str, namespace: &str, containers: Vec<Value>) -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": kind,
        "metadata": { "name": name, "namespace": namespace },
        "spec": {
            "template": {
                "metadata": { "labels": { "app": name } },
                "spec": { "containers": containers },
            },
        },
    })
}

// Empty argument lists render as absent.
fn container(name: &str, image: &str, args: Vec<String>) -> Value {
    json!({
        "name": name,
        "image": image,
        "args": (!args.is_empty()).then_some(args),
    })
}
