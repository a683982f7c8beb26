use serde::{Deserialize, Serialize};

/// Container image references deployed by the sync controller
///
/// Every reference here ends up in the sync-pod manifest bundle of every
/// schema version, so changing any of them changes the sync digest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageConfig {
    pub alert_manager: String,
    pub config_reloader: String,
    pub grafana: String,
    pub kube_rbac_proxy: String,
    pub kube_state_metrics: String,
    pub node_exporter: String,
    pub oauth_proxy: String,
    pub prometheus: String,
    pub prometheus_config_reloader: String,
    pub prometheus_operator: String,
    pub router: String,
    pub sync: String,
}

impl ImageConfig {
    /// All references keyed by their serialized name, in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("alertManager", &self.alert_manager),
            ("configReloader", &self.config_reloader),
            ("grafana", &self.grafana),
            ("kubeRbacProxy", &self.kube_rbac_proxy),
            ("kubeStateMetrics", &self.kube_state_metrics),
            ("nodeExporter", &self.node_exporter),
            ("oauthProxy", &self.oauth_proxy),
            ("prometheus", &self.prometheus),
            ("prometheusConfigReloader", &self.prometheus_config_reloader),
            ("prometheusOperator", &self.prometheus_operator),
            ("router", &self.router),
            ("sync", &self.sync),
        ]
    }

    /// Mutable access by serialized name; `None` for unknown names
    pub fn get_mut(&mut self, name: &str) -> Option<&mut String> {
        let slot = match name {
            "alertManager" => &mut self.alert_manager,
            "configReloader" => &mut self.config_reloader,
            "grafana" => &mut self.grafana,
            "kubeRbacProxy" => &mut self.kube_rbac_proxy,
            "kubeStateMetrics" => &mut self.kube_state_metrics,
            "nodeExporter" => &mut self.node_exporter,
            "oauthProxy" => &mut self.oauth_proxy,
            "prometheus" => &mut self.prometheus,
            "prometheusConfigReloader" => &mut self.prometheus_config_reloader,
            "prometheusOperator" => &mut self.prometheus_operator,
            "router" => &mut self.router,
            "sync" => &mut self.sync,
            _ => return None,
        };
        Some(slot)
    }
}
