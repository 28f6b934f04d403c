//! REST-domain models for the gateway.

use serde::{Deserialize, Serialize};

use crate::grpc::userhub::users as wire;

/// REST-domain user entity. A pure data carrier between the HTTP boundary
/// and the wire format; identity is the id, email doubles as the lookup
/// key on the read-by-email path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub last_name: String,
}

/// Request body for user create/update; the id comes from the registry
/// (create) or the path (update).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub email: String,
    pub name: String,
    pub last_name: String,
}

impl UserPayload {
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            email: self.email,
            name: self.name,
            last_name: self.last_name,
        }
    }
}

impl From<wire::User> for User {
    fn from(user: wire::User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            last_name: user.last_name,
        }
    }
}

impl From<&User> for wire::User {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}
