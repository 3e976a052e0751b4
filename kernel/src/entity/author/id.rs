use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct AuthorId(Uuid);

impl AuthorId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl AsRef<Uuid> for AuthorId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<AuthorId> for Uuid {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}
