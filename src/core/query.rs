//! Free-text filtering for collection queries
//!
//! `userCollection`, `postCollection` and `comments` all accept an optional
//! `query` argument. An absent or empty query selects everything; otherwise
//! a record is kept when one of its searchable fields contains the query,
//! ignoring case.

use crate::core::entity::{Comment, Post, User};

/// A normalized, non-empty search needle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    /// Build a query, returning `None` for an empty string
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        Some(Self {
            needle: raw.to_lowercase(),
        })
    }

    /// Build a query from an optional GraphQL argument
    pub fn from_arg(arg: Option<&str>) -> Option<Self> {
        arg.and_then(Self::new)
    }

    /// Case-insensitive substring test
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

/// Records that can be filtered by a [`TextQuery`]
pub trait Searchable {
    fn matches_query(&self, query: &TextQuery) -> bool;
}

impl Searchable for User {
    fn matches_query(&self, query: &TextQuery) -> bool {
        query.matches(&self.name)
    }
}

impl Searchable for Post {
    fn matches_query(&self, query: &TextQuery) -> bool {
        query.matches(&self.title) || query.matches(&self.body)
    }
}

impl Searchable for Comment {
    fn matches_query(&self, query: &TextQuery) -> bool {
        query.matches(&self.text)
    }
}

/// Keep the records matching `query`, or all of them when there is none
pub fn filter_by_query<T: Searchable>(items: Vec<T>, query: Option<&TextQuery>) -> Vec<T> {
    match query {
        Some(query) => items
            .into_iter()
            .filter(|item| item.matches_query(query))
            .collect(),
        None => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: name.to_string(),
            name: name.to_string(),
            email: format!("{}@mail.com", name),
            age: None,
        }
    }

    #[test]
    fn test_empty_query_is_none() {
        assert!(TextQuery::new("").is_none());
        assert!(TextQuery::from_arg(None).is_none());
        assert!(TextQuery::from_arg(Some("")).is_none());
    }

    #[test]
    fn test_matches_ignores_case() {
        let query = TextQuery::new("HeLgA").unwrap();
        assert!(query.matches("Helga"));
        assert!(query.matches("xxhelgaxx"));
        assert!(!query.matches("Helg"));
    }

    #[test]
    fn test_post_matches_title_or_body() {
        let post = Post {
            id: "1".to_string(),
            title: "Merinding Disko".to_string(),
            body: "Suatu hari...".to_string(),
            published: true,
            author_id: "2".to_string(),
        };

        assert!(post.matches_query(&TextQuery::new("disko").unwrap()));
        assert!(post.matches_query(&TextQuery::new("SUATU").unwrap()));
        assert!(!post.matches_query(&TextQuery::new("setan").unwrap()));
    }

    #[test]
    fn test_filter_by_query() {
        let users = vec![user("Willybroddus"), user("Helga"), user("Alphandito")];

        let all = filter_by_query(users.clone(), None);
        assert_eq!(all.len(), 3);

        let query = TextQuery::new("l").unwrap();
        let filtered = filter_by_query(users, Some(&query));
        let names: Vec<_> = filtered.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Willybroddus", "Helga", "Alphandito"]);
    }

    #[test]
    fn test_filter_by_query_no_match() {
        let query = TextQuery::new("zzz").unwrap();
        assert!(filter_by_query(vec![user("Helga")], Some(&query)).is_empty());
    }
}
