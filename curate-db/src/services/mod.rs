//! Domain services for list and contributor management

mod contributor_service;
mod list_service;

pub use contributor_service::ContributorService;
pub use list_service::{ListService, ListUpdate, NewList};
