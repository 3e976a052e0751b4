use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WishlistStatus {
    Created,
    Borrowed,
}

impl WishlistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WishlistStatus::Created => "CREATED",
            WishlistStatus::Borrowed => "BORROWED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WishlistStatus::Borrowed)
    }
}

impl AsRef<str> for WishlistStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for WishlistStatus {
    type Err = Report<KernelError>;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CREATED" => Ok(WishlistStatus::Created),
            "BORROWED" => Ok(WishlistStatus::Borrowed),
            other => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("unknown wishlist status: {other}"))),
        }
    }
}
