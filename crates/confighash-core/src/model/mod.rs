pub mod agent_pool;
pub mod cluster;
pub mod images;

pub use agent_pool::{AgentPoolProfile, Role, VmSize};
pub use cluster::{
    AadIdentityProvider, AuthProfile, ClusterConfig, IdentityProvider, Provider, RouterProfile,
    VmImage,
};
pub use images::ImageConfig;
