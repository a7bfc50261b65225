use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Staff role of an employee row.
///
/// Host and Bartender tips are entered directly; Busser and Server split
/// whatever pool is left after them. Anything else is a direct role too.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleName {
    Host,
    Bartender,
    Busser,
    Server,
    Other(String),
}

/// Recompute walks roles in exactly this order within a period.
pub const ROLE_ORDER: [RoleName; 4] = [
    RoleName::Host,
    RoleName::Bartender,
    RoleName::Busser,
    RoleName::Server,
];

impl RoleName {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Host" => RoleName::Host,
            "Bartender" => RoleName::Bartender,
            "Busser" => RoleName::Busser,
            "Server" => RoleName::Server,
            other => RoleName::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RoleName::Host => "Host",
            RoleName::Bartender => "Bartender",
            RoleName::Busser => "Busser",
            RoleName::Server => "Server",
            RoleName::Other(name) => name,
        }
    }

    /// Roles whose tips are direct inputs and must settle before the pool split.
    pub fn is_priority(&self) -> bool {
        matches!(self, RoleName::Host | RoleName::Bartender)
    }

    /// Roles that take a percentage of the remaining pool.
    pub fn is_pooled(&self) -> bool {
        matches!(self, RoleName::Busser | RoleName::Server)
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RoleName::from_name(s))
    }
}

impl From<String> for RoleName {
    fn from(s: String) -> Self {
        RoleName::from_name(&s)
    }
}

impl From<&str> for RoleName {
    fn from(s: &str) -> Self {
        RoleName::from_name(s)
    }
}

impl From<RoleName> for String {
    fn from(role: RoleName) -> Self {
        role.as_str().to_string()
    }
}
