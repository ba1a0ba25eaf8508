pub mod badge;
pub mod blog_post;
pub mod challenge;
pub mod island;
pub mod user;
pub mod visit;
