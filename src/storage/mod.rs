//! Storage implementations for the blog store

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryBlogStore;
