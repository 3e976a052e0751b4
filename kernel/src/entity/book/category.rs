#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookCategory(String);

impl BookCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }
}

impl AsRef<str> for BookCategory {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<BookCategory> for String {
    fn from(value: BookCategory) -> Self {
        value.0
    }
}
