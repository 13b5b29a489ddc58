use serde::{Deserialize, Serialize};

/// Role a new account signs up with.
///
/// The portal only passes it through to the identity service, which decides
/// what each role is allowed to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Donor,
    #[default]
    Receiver,
    Volunteer,
}

impl Role {
    /// All roles in the order they are offered in the selector
    pub const ALL: [Role; 3] = [Role::Donor, Role::Receiver, Role::Volunteer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Donor => "donor",
            Role::Receiver => "receiver",
            Role::Volunteer => "volunteer",
        }
    }

    /// Parse a selector value, falling back to the default role
    pub fn from_str(s: &str) -> Self {
        match s {
            "donor" => Role::Donor,
            "volunteer" => Role::Volunteer,
            _ => Role::Receiver,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::Receiver => "Receiver",
            Role::Volunteer => "Volunteer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
