use serde::Deserialize;
use uuid::Uuid;

use crate::controller::Intake;
use application::transfer::{CreateBookDto, GetBookDto, GetBookHistoryDto, UpdateBookDto};

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    title: String,
    category: String,
    author_id: Uuid,
    copies: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    title: Option<String>,
    category: Option<String>,
    author_id: Option<Uuid>,
    copies: Option<i32>,
}

#[derive(Debug)]
pub struct GetRequest {
    id: Uuid,
}

impl GetRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

#[derive(Debug)]
pub struct GetHistoryRequest {
    id: Uuid,
}

impl GetHistoryRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

pub struct Transformer;

impl Intake<(Uuid, CreateRequest)> for Transformer {
    type To = CreateBookDto;
    fn emit(&self, input: (Uuid, CreateRequest)) -> Self::To {
        let (editor_id, input) = input;
        CreateBookDto {
            title: input.title,
            category: input.category,
            author_id: input.author_id,
            copies: input.copies,
            editor_id,
        }
    }
}

impl Intake<(Uuid, Uuid, UpdateRequest)> for Transformer {
    type To = UpdateBookDto;
    fn emit(&self, input: (Uuid, Uuid, UpdateRequest)) -> Self::To {
        let (id, editor_id, input) = input;
        UpdateBookDto {
            id,
            title: input.title,
            category: input.category,
            author_id: input.author_id,
            copies: input.copies,
            editor_id,
        }
    }
}

impl Intake<GetRequest> for Transformer {
    type To = GetBookDto;
    fn emit(&self, input: GetRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<GetHistoryRequest> for Transformer {
    type To = GetBookHistoryDto;
    fn emit(&self, input: GetHistoryRequest) -> Self::To {
        GetBookHistoryDto { book_id: input.id }
    }
}
