use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BookCopies(i32);

impl BookCopies {
    pub fn new(copies: impl Into<i32>) -> Self {
        Self(copies.into())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub(crate) fn decremented(&self) -> Self {
        Self(self.0 - 1)
    }

    pub(crate) fn incremented(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl AsRef<i32> for BookCopies {
    fn as_ref(&self) -> &i32 {
        &self.0
    }
}

impl From<BookCopies> for i32 {
    fn from(value: BookCopies) -> Self {
        value.0
    }
}
