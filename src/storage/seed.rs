//! Fixed mock records loaded into the store at startup

use crate::core::entity::{Comment, Post, User};

fn user(id: &str, name: &str, email: &str, age: i32) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        age: Some(age),
    }
}

fn post(id: &str, title: &str, published: bool, author: &str) -> Post {
    Post {
        id: id.to_string(),
        title: title.to_string(),
        body: "Suatu hari...".to_string(),
        published,
        author_id: author.to_string(),
    }
}

fn comment(id: &str, text: &str, author: &str, post: &str) -> Comment {
    Comment {
        id: id.to_string(),
        text: text.to_string(),
        author_id: author.to_string(),
        post_id: post.to_string(),
    }
}

/// Seed users
pub fn users() -> Vec<User> {
    vec![
        user("1", "Willybroddus", "willy@mail.com", 22),
        user("2", "Helga", "helga@mail.com", 23),
        user("3", "Alphandito", "alphandito@mail.com", 24),
        user("4", "Sitanggang", "sitanggang@mail.com", 25),
    ]
}

/// Seed posts; post "3" is unpublished
pub fn posts() -> Vec<Post> {
    vec![
        post("1", "Merinding Disko", true, "2"),
        post("2", "Setan Alas", true, "3"),
        post("3", "Love me like you do", false, "1"),
    ]
}

/// Seed comments
pub fn comments() -> Vec<Comment> {
    vec![
        comment("1", "Nice pic", "1", "1"),
        comment("2", "Pap dong", "2", "3"),
        comment("3", "Peninggi badan", "1", "3"),
        comment("4", "Apa ini?", "4", "2"),
    ]
}
