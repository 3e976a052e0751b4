use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookHistoryQuery, BookQuery, DependOnBookHistoryQuery, DependOnBookQuery,
    DependOnWishlistQuery, WishlistQuery,
};
use kernel::interface::update::{
    BookHistoryModifier, BookModifier, DependOnBookHistoryModifier, DependOnBookModifier,
    DependOnWishlistModifier, WishlistModifier,
};
use kernel::prelude::entity::{
    AuthorId, Book, BookCategory, BookCopies, BookHistoryEntry, BookId, BookTitle, UserId,
    Wishlist, WishlistId, WishlistStatus,
};
use kernel::KernelError;

#[derive(Default)]
struct MemoryState {
    books: HashMap<Uuid, Book>,
    wishlists: HashMap<Uuid, Wishlist>,
    history: Vec<BookHistoryEntry>,
}

enum Undo {
    PutBook(Uuid, Option<Book>),
    PutWishlist(Uuid, Option<Wishlist>),
    TruncateHistory(usize),
}

/// Transactional double over a shared store. Mutations apply to the live
/// state under the lock (the check-and-decrement of a reservation included)
/// and every one records its inverse; `roll_back` replays the inverses, the
/// compensating path a storage layer without native rollback would take.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_book(&self, title: &str, copies: i32) -> Uuid {
        let id = Uuid::new_v4();
        let book = Book::new(
            BookId::new(id),
            BookTitle::new(title.to_string()),
            BookCategory::new("general".to_string()),
            AuthorId::new(Uuid::new_v4()),
            BookCopies::new(copies),
        );
        self.lock().books.insert(id, book);
        id
    }

    pub fn copies_of(&self, id: Uuid) -> i32 {
        *self
            .lock()
            .books
            .get(&id)
            .expect("book not seeded")
            .copies()
            .as_ref()
    }

    pub fn wishlists_of(&self, user_id: Uuid) -> Vec<Wishlist> {
        self.lock()
            .wishlists
            .values()
            .filter(|wishlist| wishlist.user_id().as_ref() == &user_id)
            .cloned()
            .collect()
    }

    pub fn history_len(&self, book_id: Uuid) -> usize {
        self.lock()
            .history
            .iter()
            .filter(|entry| entry.book_id().as_ref() == &book_id)
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().expect("memory store poisoned")
    }
}

pub struct InMemoryTransaction {
    state: Arc<Mutex<MemoryState>>,
    undo: Vec<Undo>,
}

#[async_trait::async_trait]
impl DatabaseConnection<InMemoryTransaction> for InMemoryDatabase {
    async fn transact(&self) -> error_stack::Result<InMemoryTransaction, KernelError> {
        Ok(InMemoryTransaction {
            state: Arc::clone(&self.state),
            undo: Vec::new(),
        })
    }
}

#[async_trait::async_trait]
impl Transaction for InMemoryTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(mut self) -> error_stack::Result<(), KernelError> {
        let mut state = self.state.lock().expect("memory store poisoned");
        for undo in self.undo.drain(..).rev() {
            match undo {
                Undo::PutBook(id, Some(book)) => {
                    state.books.insert(id, book);
                }
                Undo::PutBook(id, None) => {
                    state.books.remove(&id);
                }
                Undo::PutWishlist(id, Some(wishlist)) => {
                    state.wishlists.insert(id, wishlist);
                }
                Undo::PutWishlist(id, None) => {
                    state.wishlists.remove(&id);
                }
                Undo::TruncateHistory(len) => {
                    state.history.truncate(len);
                }
            }
        }
        Ok(())
    }
}

pub struct InMemoryBookRepository;

#[async_trait::async_trait]
impl BookQuery<InMemoryTransaction> for InMemoryBookRepository {
    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let state = con.state.lock().expect("memory store poisoned");
        Ok(state.books.get(id.as_ref()).cloned())
    }
}

#[async_trait::async_trait]
impl BookModifier<InMemoryTransaction> for InMemoryBookRepository {
    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        let id = *book.id().as_ref();
        let previous = state.books.insert(id, book.clone());
        con.undo.push(Undo::PutBook(id, previous));
        Ok(())
    }

    async fn update(
        &self,
        con: &mut InMemoryTransaction,
        book: &Book,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        let id = *book.id().as_ref();
        let previous = state.books.insert(id, book.clone());
        con.undo.push(Undo::PutBook(id, previous));
        Ok(())
    }

    async fn reserve(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Book, KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        let previous = state
            .books
            .get(id.as_ref())
            .cloned()
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        let reserved = previous.clone().reserve()?;
        state.books.insert(*id.as_ref(), reserved.clone());
        con.undo.push(Undo::PutBook(*id.as_ref(), Some(previous)));
        Ok(reserved)
    }

    async fn release(
        &self,
        con: &mut InMemoryTransaction,
        id: &BookId,
    ) -> error_stack::Result<Book, KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        let previous = state
            .books
            .get(id.as_ref())
            .cloned()
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        let released = previous.clone().release();
        state.books.insert(*id.as_ref(), released.clone());
        con.undo.push(Undo::PutBook(*id.as_ref(), Some(previous)));
        Ok(released)
    }
}

pub struct InMemoryWishlistRepository;

#[async_trait::async_trait]
impl WishlistQuery<InMemoryTransaction> for InMemoryWishlistRepository {
    async fn find_by_id(
        &self,
        con: &mut InMemoryTransaction,
        id: &WishlistId,
    ) -> error_stack::Result<Option<Wishlist>, KernelError> {
        let state = con.state.lock().expect("memory store poisoned");
        Ok(state.wishlists.get(id.as_ref()).cloned())
    }

    async fn find_active_by_user(
        &self,
        con: &mut InMemoryTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Option<Wishlist>, KernelError> {
        let state = con.state.lock().expect("memory store poisoned");
        Ok(state
            .wishlists
            .values()
            .find(|wishlist| {
                wishlist.user_id() == user_id && wishlist.status() == &WishlistStatus::Created
            })
            .cloned())
    }
}

#[async_trait::async_trait]
impl WishlistModifier<InMemoryTransaction> for InMemoryWishlistRepository {
    async fn create(
        &self,
        con: &mut InMemoryTransaction,
        wishlist: &Wishlist,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        // mirrors the partial unique index: a second active insert is skipped
        let has_active = state.wishlists.values().any(|stored| {
            stored.user_id() == wishlist.user_id() && stored.status() == &WishlistStatus::Created
        });
        if has_active {
            return Ok(());
        }
        let id = *wishlist.id().as_ref();
        let previous = state.wishlists.insert(id, wishlist.clone());
        con.undo.push(Undo::PutWishlist(id, previous));
        Ok(())
    }

    async fn add_book(
        &self,
        con: &mut InMemoryTransaction,
        id: &WishlistId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        let previous = state
            .wishlists
            .get(id.as_ref())
            .cloned()
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        let mut updated = previous.clone();
        if updated.add_book(book_id.clone())? {
            state.wishlists.insert(*id.as_ref(), updated);
            con.undo.push(Undo::PutWishlist(*id.as_ref(), Some(previous)));
        }
        Ok(())
    }

    async fn remove_book(
        &self,
        con: &mut InMemoryTransaction,
        id: &WishlistId,
        book_id: &BookId,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        let previous = state
            .wishlists
            .get(id.as_ref())
            .cloned()
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        let mut updated = previous.clone();
        if updated.remove_book(book_id)? {
            state.wishlists.insert(*id.as_ref(), updated);
            con.undo.push(Undo::PutWishlist(*id.as_ref(), Some(previous)));
        }
        Ok(())
    }

    async fn clear_books(
        &self,
        con: &mut InMemoryTransaction,
        id: &WishlistId,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        let previous = state
            .wishlists
            .get(id.as_ref())
            .cloned()
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        let destruct = previous.clone().into_destruct();
        let updated = Wishlist::new(
            destruct.id,
            destruct.user_id,
            Vec::new(),
            destruct.status,
            destruct.created_at,
        );
        state.wishlists.insert(*id.as_ref(), updated);
        con.undo.push(Undo::PutWishlist(*id.as_ref(), Some(previous)));
        Ok(())
    }

    async fn update_status(
        &self,
        con: &mut InMemoryTransaction,
        id: &WishlistId,
        status: &WishlistStatus,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        let previous = state
            .wishlists
            .get(id.as_ref())
            .cloned()
            .ok_or_else(|| Report::new(KernelError::NotFound))?;
        let destruct = previous.clone().into_destruct();
        let updated = Wishlist::new(
            destruct.id,
            destruct.user_id,
            destruct.books,
            *status,
            destruct.created_at,
        );
        state.wishlists.insert(*id.as_ref(), updated);
        con.undo.push(Undo::PutWishlist(*id.as_ref(), Some(previous)));
        Ok(())
    }
}

pub struct InMemoryBookHistoryRepository;

#[async_trait::async_trait]
impl BookHistoryQuery<InMemoryTransaction> for InMemoryBookHistoryRepository {
    async fn find_by_book_id(
        &self,
        con: &mut InMemoryTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<BookHistoryEntry>, KernelError> {
        let state = con.state.lock().expect("memory store poisoned");
        let mut entries: Vec<BookHistoryEntry> = state
            .history
            .iter()
            .filter(|entry| entry.book_id() == book_id)
            .cloned()
            .collect();
        entries.reverse();
        Ok(entries)
    }
}

#[async_trait::async_trait]
impl BookHistoryModifier<InMemoryTransaction> for InMemoryBookHistoryRepository {
    async fn record(
        &self,
        con: &mut InMemoryTransaction,
        entry: &BookHistoryEntry,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().expect("memory store poisoned");
        con.undo.push(Undo::TruncateHistory(state.history.len()));
        state.history.push(entry.clone());
        Ok(())
    }
}

impl DependOnBookQuery<InMemoryTransaction> for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &InMemoryBookRepository
    }
}

impl DependOnBookModifier<InMemoryTransaction> for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &InMemoryBookRepository
    }
}

impl DependOnWishlistQuery<InMemoryTransaction> for InMemoryDatabase {
    type WishlistQuery = InMemoryWishlistRepository;
    fn wishlist_query(&self) -> &Self::WishlistQuery {
        &InMemoryWishlistRepository
    }
}

impl DependOnWishlistModifier<InMemoryTransaction> for InMemoryDatabase {
    type WishlistModifier = InMemoryWishlistRepository;
    fn wishlist_modifier(&self) -> &Self::WishlistModifier {
        &InMemoryWishlistRepository
    }
}

impl DependOnBookHistoryQuery<InMemoryTransaction> for InMemoryDatabase {
    type BookHistoryQuery = InMemoryBookHistoryRepository;
    fn book_history_query(&self) -> &Self::BookHistoryQuery {
        &InMemoryBookHistoryRepository
    }
}

impl DependOnBookHistoryModifier<InMemoryTransaction> for InMemoryDatabase {
    type BookHistoryModifier = InMemoryBookHistoryRepository;
    fn book_history_modifier(&self) -> &Self::BookHistoryModifier {
        &InMemoryBookHistoryRepository
    }
}
