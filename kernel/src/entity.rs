mod author;
mod book;
mod common;
mod history;
mod user;
mod wishlist;

pub use self::{author::*, book::*, common::*, history::*, user::*, wishlist::*};
