pub mod admin_blog;
pub mod admin_challenges;
pub mod admin_islands;
pub mod admin_users;
pub mod auth;
pub mod badges;
pub mod blog;
pub mod challenges;
pub mod islands;
pub mod users;
pub mod visits;
