use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct WishlistId(Uuid);

impl WishlistId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

impl AsRef<Uuid> for WishlistId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<WishlistId> for Uuid {
    fn from(value: WishlistId) -> Self {
        value.0
    }
}
