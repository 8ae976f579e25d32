pub mod admins;
pub mod banned_words;
pub mod comments;
pub mod documents;
pub mod public;
pub mod translations;
