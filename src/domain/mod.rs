pub mod book;
pub mod errors;
pub mod user;
pub mod validation;

pub use book::Book;
pub use errors::*;
pub use user::User;
