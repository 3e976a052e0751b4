mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::identity::Identity;
use crate::route::wishlist::request::{
    AddBookRequest, BorrowRequest, GetRequest, ListBooksRequest, RemoveBookRequest, Transformer,
};
use crate::route::wishlist::response::{BookListPresenter, Presenter};
use application::service::{
    AddWishlistBookService, BorrowWishlistService, GetWishlistService, ListWishlistBooksService,
    RemoveWishlistBookService,
};
use axum::extract::{Path, State};
use axum::routing::{delete, get, post};
use axum::Router;
use uuid::Uuid;

pub trait WishlistRouter {
    fn route_wishlist(self) -> Self;
}

impl WishlistRouter for Router<AppModule> {
    fn route_wishlist(self) -> Self {
        self.route(
            "/wishlist",
            get(
                |State(handler): State<AppModule>, Identity(user): Identity| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetRequest::new(user))
                        .handle(|dto| async move {
                            handler.pgpool().get_or_create_active(dto).await
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/wishlist/add/:book_id",
            post(
                |State(handler): State<AppModule>,
                 Identity(user): Identity,
                 Path(book_id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(AddBookRequest::new(user, book_id))
                        .handle(|dto| async move { handler.pgpool().add_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/wishlist/remove/:book_id",
            delete(
                |State(handler): State<AppModule>,
                 Identity(user): Identity,
                 Path(book_id): Path<Uuid>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(RemoveBookRequest::new(user, book_id))
                        .handle(|dto| async move { handler.pgpool().remove_book(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/wishlist/borrow",
            post(
                |State(handler): State<AppModule>, Identity(user): Identity| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(BorrowRequest::new(user))
                        .handle(|dto| async move { handler.pgpool().borrow_all(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/wishlist/books",
            get(
                |State(handler): State<AppModule>, Identity(user): Identity| async move {
                    Controller::new(Transformer, BookListPresenter)
                        .intake(ListBooksRequest::new(user))
                        .handle(|dto| async move { handler.pgpool().list_books(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
