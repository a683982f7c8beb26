use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an agent pool
///
/// Each role owns its own VM scale set and its own role-specific template
/// content, so two roles never render the same scale-set model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Master,
    Infra,
    Compute,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Master, Role::Infra, Role::Compute];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Master => "master",
            Role::Infra => "infra",
            Role::Compute => "compute",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "master" => Ok(Role::Master),
            "infra" => Ok(Role::Infra),
            "compute" => Ok(Role::Compute),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Cloud VM size, e.g. `Standard_D2s_v3`
///
/// The empty string is the zero value and is rendered as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VmSize(String);

impl VmSize {
    pub const STANDARD_D2S_V3: &'static str = "Standard_D2s_v3";
    pub const STANDARD_D4S_V3: &'static str = "Standard_D4s_v3";

    pub fn new(size: impl Into<String>) -> Self {
        Self(size.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VmSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One role's desired sizing and identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPoolProfile {
    #[serde(default)]
    pub name: String,

    pub role: Role,

    #[serde(default)]
    pub count: u32,

    #[serde(default)]
    pub vm_size: VmSize,

    /// Address range of the pool's subnet; not part of any rendered model
    #[serde(default)]
    pub subnet_cidr: String,
}

impl AgentPoolProfile {
    /// A profile with the given role and every other field at its zero value
    pub fn new(role: Role) -> Self {
        Self {
            name: String::new(),
            role,
            count: 0,
            vm_size: VmSize::default(),
            subnet_cidr: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn with_vm_size(mut self, vm_size: impl Into<String>) -> Self {
        self.vm_size = VmSize::new(vm_size);
        self
    }

    /// Name of the VM scale set backing this pool
    ///
    /// Master and infra pools own a single well-known scale set; compute
    /// pools are named after the pool.
    pub fn scale_set_name(&self) -> String {
        match self.role {
            Role::Master | Role::Infra => format!("ss-{}", self.role),
            Role::Compute if self.name.is_empty() => "ss-compute".to_string(),
            Role::Compute => format!("ss-{}", self.name),
        }
    }

    /// Prefix of the computer names of the scale set's instances
    pub fn computer_name_prefix(&self) -> String {
        match self.role {
            Role::Master | Role::Infra => format!("{}-", self.role),
            Role::Compute if self.name.is_empty() => "compute-".to_string(),
            Role::Compute => format!("{}-", self.name),
        }
    }
}
