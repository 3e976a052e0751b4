use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::controller::Exhaust;
use application::transfer::{BookDto, BookHistoryDto};

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    id: Uuid,
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: Uuid,
    title: String,
    category: String,
    author_id: Uuid,
    copies: i32,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            category: value.category,
            author_id: value.author_id,
            copies: value.copies,
        }
    }
}

impl IntoResponse for BookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    book_id: Uuid,
    title: String,
    category: String,
    author_id: Uuid,
    copies: i32,
    editor_id: Uuid,
    recorded_at: OffsetDateTime,
}

impl From<BookHistoryDto> for HistoryResponse {
    fn from(value: BookHistoryDto) -> Self {
        Self {
            book_id: value.book_id,
            title: value.title,
            category: value.category,
            author_id: value.author_id,
            copies: value.copies,
            editor_id: value.editor_id,
            recorded_at: value.recorded_at,
        }
    }
}

pub struct Presenter;

impl Exhaust<Uuid> for Presenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse { id: input }
    }
}

impl Exhaust<Option<BookDto>> for Presenter {
    type To = Option<BookResponse>;
    fn emit(&self, input: Option<BookDto>) -> Self::To {
        input.map(BookResponse::from)
    }
}

impl Exhaust<BookDto> for Presenter {
    type To = BookResponse;
    fn emit(&self, input: BookDto) -> Self::To {
        BookResponse::from(input)
    }
}

pub struct HistoryPresenter;

impl Exhaust<Vec<BookHistoryDto>> for HistoryPresenter {
    type To = Json<Vec<HistoryResponse>>;
    fn emit(&self, input: Vec<BookHistoryDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(HistoryResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}
