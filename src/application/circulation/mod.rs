mod circulation_service;
mod errors;
mod review_session;

pub use circulation_service::{
    ServiceDependencies, add_book, borrow_book, compose_review_message, get_book_by_isbn,
    notify_user_with_book_reviews, register_user, return_book,
};
pub use errors::{CirculationError, InvalidField, Result};
