use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::controller::Exhaust;
use crate::route::book::response::BookResponse;
use application::transfer::{BookDto, WishlistDto};

#[derive(Debug, Serialize)]
pub struct WishlistResponse {
    id: Uuid,
    user_id: Uuid,
    status: String,
    books: Vec<Uuid>,
    created_at: OffsetDateTime,
}

impl From<WishlistDto> for WishlistResponse {
    fn from(value: WishlistDto) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            status: value.status,
            books: value.books,
            created_at: value.created_at,
        }
    }
}

impl IntoResponse for WishlistResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<WishlistDto> for Presenter {
    type To = WishlistResponse;
    fn emit(&self, input: WishlistDto) -> Self::To {
        WishlistResponse::from(input)
    }
}

pub struct BookListPresenter;

impl Exhaust<Vec<BookDto>> for BookListPresenter {
    type To = Json<Vec<BookResponse>>;
    fn emit(&self, input: Vec<BookDto>) -> Self::To {
        Json(
            input
                .into_iter()
                .map(BookResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}
