//! Row types for the curate store

mod contributor;
mod list;
mod user;

pub use contributor::ContributorEntity;
pub use list::ListEntity;
pub use user::UserEntity;
