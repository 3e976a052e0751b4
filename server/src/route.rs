mod book;
mod wishlist;

pub use self::{book::*, wishlist::*};
