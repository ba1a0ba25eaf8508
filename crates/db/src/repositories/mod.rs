mod badge_repo;
mod blog_post_repo;
mod challenge_repo;
mod island_repo;
mod user_repo;
mod visit_repo;

pub use badge_repo::BadgeRepo;
pub use blog_post_repo::BlogPostRepo;
pub use challenge_repo::ChallengeRepo;
pub use island_repo::IslandRepo;
pub use user_repo::UserRepo;
pub use visit_repo::VisitRepo;
