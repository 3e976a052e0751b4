use uuid::Uuid;

use crate::controller::Intake;
use application::transfer::{
    AddWishlistBookDto, BorrowWishlistDto, GetWishlistDto, ListWishlistBooksDto,
    RemoveWishlistBookDto,
};

#[derive(Debug)]
pub struct GetRequest {
    user_id: Uuid,
}

impl GetRequest {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

#[derive(Debug)]
pub struct ListBooksRequest {
    user_id: Uuid,
}

impl ListBooksRequest {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

#[derive(Debug)]
pub struct BorrowRequest {
    user_id: Uuid,
}

impl BorrowRequest {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}

#[derive(Debug)]
pub struct AddBookRequest {
    user_id: Uuid,
    book_id: Uuid,
}

impl AddBookRequest {
    pub fn new(user_id: Uuid, book_id: Uuid) -> Self {
        Self { user_id, book_id }
    }
}

#[derive(Debug)]
pub struct RemoveBookRequest {
    user_id: Uuid,
    book_id: Uuid,
}

impl RemoveBookRequest {
    pub fn new(user_id: Uuid, book_id: Uuid) -> Self {
        Self { user_id, book_id }
    }
}

pub struct Transformer;

impl Intake<GetRequest> for Transformer {
    type To = GetWishlistDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetWishlistDto {
            user_id: input.user_id,
        }
    }
}

impl Intake<ListBooksRequest> for Transformer {
    type To = ListWishlistBooksDto;
    fn emit(&self, input: ListBooksRequest) -> Self::To {
        ListWishlistBooksDto {
            user_id: input.user_id,
        }
    }
}

impl Intake<BorrowRequest> for Transformer {
    type To = BorrowWishlistDto;
    fn emit(&self, input: BorrowRequest) -> Self::To {
        BorrowWishlistDto {
            user_id: input.user_id,
        }
    }
}

impl Intake<AddBookRequest> for Transformer {
    type To = AddWishlistBookDto;
    fn emit(&self, input: AddBookRequest) -> Self::To {
        AddWishlistBookDto {
            user_id: input.user_id,
            book_id: input.book_id,
        }
    }
}

impl Intake<RemoveBookRequest> for Transformer {
    type To = RemoveWishlistBookDto;
    fn emit(&self, input: RemoveBookRequest) -> Self::To {
        RemoveWishlistBookDto {
            user_id: input.user_id,
            book_id: input.book_id,
        }
    }
}
