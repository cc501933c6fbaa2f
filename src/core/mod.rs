//! Core module containing the records, errors and store trait of the API

pub mod entity;
pub mod error;
pub mod query;
pub mod service;

pub use entity::{Comment, Entity, NewComment, NewPost, NewUser, Post, User};
pub use error::{BlogError, BlogResult};
pub use query::{Searchable, TextQuery, filter_by_query};
pub use service::BlogStore;
