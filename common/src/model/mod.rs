pub mod admin;
pub mod api_key;
pub mod banned_word;
pub mod comment;
pub mod document;
pub mod stats;
pub mod translation;
