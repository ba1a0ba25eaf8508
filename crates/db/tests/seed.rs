//! Integration tests for startup seeding.

use sqlx::PgPool;

use atoll_db::repositories::{
    BadgeRepo, BlogPostRepo, ChallengeRepo, IslandRepo, UserRepo,
};
use atoll_db::seed::{self, SeedPasswords, ADMIN_USER_EMAIL, TEST_USER_EMAIL};

fn passwords() -> SeedPasswords {
    // Seeding only stores digests; any opaque string works here.
    SeedPasswords {
        test_user_hash: "$argon2id$fake-test-hash".to_string(),
        admin_user_hash: "$argon2id$fake-admin-hash".to_string(),
    }
}

#[sqlx::test]
async fn seed_populates_empty_database(pool: PgPool) {
    seed::run(&pool, &passwords()).await.unwrap();

    assert_eq!(IslandRepo::count(&pool).await.unwrap(), 6);
    assert_eq!(BadgeRepo::count(&pool).await.unwrap(), 3);
    assert_eq!(ChallengeRepo::count(&pool).await.unwrap(), 2);
    assert_eq!(BlogPostRepo::count(&pool).await.unwrap(), 3);

    let test_user = UserRepo::find_by_email(&pool, TEST_USER_EMAIL)
        .await
        .unwrap()
        .expect("test user should exist");
    assert!(!test_user.is_admin);

    let admin = UserRepo::find_by_email(&pool, ADMIN_USER_EMAIL)
        .await
        .unwrap()
        .expect("admin user should exist");
    assert!(admin.is_admin);
}

#[sqlx::test]
async fn seed_is_idempotent(pool: PgPool) {
    seed::run(&pool, &passwords()).await.unwrap();
    seed::run(&pool, &passwords()).await.unwrap();

    assert_eq!(IslandRepo::count(&pool).await.unwrap(), 6);
    assert_eq!(BadgeRepo::count(&pool).await.unwrap(), 3);
    assert_eq!(ChallengeRepo::count(&pool).await.unwrap(), 2);
    assert_eq!(BlogPostRepo::count(&pool).await.unwrap(), 3);
}

#[sqlx::test]
async fn seed_skips_non_empty_collections(pool: PgPool) {
    seed::run(&pool, &passwords()).await.unwrap();

    // Dropping one island must not trigger a re-seed of the collection.
    let islands = IslandRepo::list(&pool, 10, 0).await.unwrap();
    IslandRepo::delete(&pool, islands[0].id).await.unwrap();

    seed::run(&pool, &passwords()).await.unwrap();
    assert_eq!(IslandRepo::count(&pool).await.unwrap(), 5);
}
