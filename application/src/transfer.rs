mod book;
mod history;
mod wishlist;

pub use self::{book::*, history::*, wishlist::*};
