use serde::{Deserialize, Serialize};

use crate::domain::models::reservation::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Guest,
    Admin,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Guest => "guest",
            ActorKind::Admin => "admin",
        }
    }
}

impl TryFrom<String> for ActorKind {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "guest" => Ok(ActorKind::Guest),
            "admin" => Ok(ActorKind::Admin),
            _ => Err(UnknownVariant { kind: "actor kind", value }),
        }
    }
}

/// Identity on whose behalf a reservation operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub kind: ActorKind,
    pub id: String,
}

impl Actor {
    pub fn guest(id: impl Into<String>) -> Self {
        Self { kind: ActorKind::Guest, id: id.into() }
    }

    pub fn admin(id: impl Into<String>) -> Self {
        Self { kind: ActorKind::Admin, id: id.into() }
    }

    pub fn is_admin(&self) -> bool {
        self.kind == ActorKind::Admin
    }
}
