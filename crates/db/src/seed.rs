//! Idempotent startup seeding.
//!
//! Each step is insert-if-absent: sample datasets only land in empty tables,
//! and the two well-known accounts are matched by email. Re-running on every
//! boot never duplicates anything.

use sqlx::PgPool;

use atoll_core::rules::{ChallengeReward, ProgressRule};

use crate::models::badge::CreateBadge;
use crate::models::blog_post::CreateBlogPost;
use crate::models::challenge::CreateChallenge;
use crate::models::island::CreateIsland;
use crate::models::user::CreateUser;
use crate::repositories::{BadgeRepo, BlogPostRepo, ChallengeRepo, IslandRepo, UserRepo};

/// Email of the seeded non-admin account.
pub const TEST_USER_EMAIL: &str = "test@example.com";
/// Email of the seeded admin account.
pub const ADMIN_USER_EMAIL: &str = "admin@example.com";

/// Pre-hashed passwords for the two seeded accounts.
///
/// Hashing lives in the API crate; the seed routine only ever sees digests.
#[derive(Debug)]
pub struct SeedPasswords {
    pub test_user_hash: String,
    pub admin_user_hash: String,
}

/// Populate empty collections with sample data and ensure the well-known
/// test and admin accounts exist.
pub async fn run(pool: &PgPool, passwords: &SeedPasswords) -> Result<(), sqlx::Error> {
    if IslandRepo::count(pool).await? == 0 {
        for island in sample_islands() {
            IslandRepo::create(pool, &island).await?;
        }
        tracing::info!("Seeded islands collection with sample data");
    }

    if BadgeRepo::count(pool).await? == 0 {
        for badge in sample_badges() {
            BadgeRepo::create(pool, &badge).await?;
        }
        tracing::info!("Seeded badges collection with sample data");
    }

    if ChallengeRepo::count(pool).await? == 0 {
        for challenge in sample_challenges() {
            ChallengeRepo::create(pool, &challenge).await?;
        }
        tracing::info!("Seeded challenges collection with sample data");
    }

    if BlogPostRepo::count(pool).await? == 0 {
        for post in sample_blog_posts() {
            BlogPostRepo::create(pool, &post).await?;
        }
        tracing::info!("Seeded blog posts collection with sample data");
    }

    if UserRepo::find_by_email(pool, TEST_USER_EMAIL).await?.is_none() {
        UserRepo::create(
            pool,
            &CreateUser {
                email: TEST_USER_EMAIL.to_string(),
                name: Some("Test User".to_string()),
                password_hash: passwords.test_user_hash.clone(),
                is_admin: false,
            },
        )
        .await?;
        tracing::info!(email = TEST_USER_EMAIL, "Created seed test user");
    }

    if UserRepo::find_by_email(pool, ADMIN_USER_EMAIL).await?.is_none() {
        UserRepo::create(
            pool,
            &CreateUser {
                email: ADMIN_USER_EMAIL.to_string(),
                name: Some("Administrator".to_string()),
                password_hash: passwords.admin_user_hash.clone(),
                is_admin: true,
            },
        )
        .await?;
        tracing::info!(email = ADMIN_USER_EMAIL, "Created seed admin user");
    }

    Ok(())
}

fn sample_islands() -> Vec<CreateIsland> {
    vec![
        CreateIsland {
            name: "Maafushi".into(),
            atoll: "Kaafu".into(),
            latitude: 3.9428,
            longitude: 73.5377,
            island_type: "inhabited".into(),
            population: Some(3025),
            description: Some("Popular local island known for budget-friendly tourism".into()),
            tags: vec!["budget".into(), "local".into(), "water sports".into()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1573843981242-273fef20a9a5?w=800".into(),
            ],
            size_km2: Some(0.83),
            amenities: vec!["hotels".into(), "restaurants".into(), "dive shops".into()],
            water_activities: vec!["snorkeling".into(), "diving".into(), "jet skiing".into()],
            transfer_options: vec!["speedboat".into()],
        },
        CreateIsland {
            name: "Baros".into(),
            atoll: "North Male".into(),
            latitude: 4.2833,
            longitude: 73.4167,
            island_type: "resort".into(),
            population: None,
            description: Some("Luxury 5-star resort island with over-water villas".into()),
            tags: vec!["luxury".into(), "honeymoon".into(), "private".into()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1514282401047-d79a71a590e8?w=800".into(),
            ],
            size_km2: Some(0.25),
            amenities: vec![
                "spa".into(),
                "fine dining".into(),
                "water villas".into(),
                "PADI dive center".into(),
            ],
            water_activities: vec![
                "snorkeling".into(),
                "diving".into(),
                "sailing".into(),
                "windsurfing".into(),
            ],
            transfer_options: vec!["speedboat".into()],
        },
        CreateIsland {
            name: "Baa Atoll".into(),
            atoll: "Baa".into(),
            latitude: 5.1708,
            longitude: 73.0664,
            island_type: "uninhabited".into(),
            population: Some(0),
            description: Some(
                "UNESCO Biosphere Reserve known for manta rays and whale sharks".into(),
            ),
            tags: vec!["nature".into(), "marine life".into(), "conservation".into()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1586861710684-b4e36ae77c4a?w=800".into(),
            ],
            size_km2: None,
            amenities: vec![],
            water_activities: vec!["snorkeling".into(), "diving".into()],
            transfer_options: vec!["boat tour".into()],
        },
        CreateIsland {
            name: "Hulhumale".into(),
            atoll: "Kaafu".into(),
            latitude: 4.2167,
            longitude: 73.55,
            island_type: "inhabited".into(),
            population: Some(50000),
            description: Some(
                "Artificial island near Male airport, with beaches and local life".into(),
            ),
            tags: vec!["urban".into(), "transit".into(), "local".into()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1557639712-220c45613b61?w=800".into(),
            ],
            size_km2: Some(4.0),
            amenities: vec![
                "hotels".into(),
                "restaurants".into(),
                "shops".into(),
                "mosque".into(),
            ],
            water_activities: vec!["swimming".into(), "watersports".into()],
            transfer_options: vec!["bus".into(), "taxi".into(), "ferry".into()],
        },
        CreateIsland {
            name: "Soneva Fushi".into(),
            atoll: "Baa".into(),
            latitude: 5.1167,
            longitude: 73.0667,
            island_type: "resort".into(),
            population: None,
            description: Some("Eco-luxury resort with private villas and pristine beaches".into()),
            tags: vec!["luxury".into(), "eco".into(), "private".into()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1541480205551-0e742d656ad5?w=800".into(),
            ],
            size_km2: Some(1.4),
            amenities: vec![
                "private pool villas".into(),
                "observatory".into(),
                "spa".into(),
                "outdoor cinema".into(),
            ],
            water_activities: vec![
                "snorkeling".into(),
                "diving".into(),
                "surfing".into(),
                "dolphin cruises".into(),
            ],
            transfer_options: vec!["seaplane".into()],
        },
        CreateIsland {
            name: "Dhigurah".into(),
            atoll: "Alif Dhaal".into(),
            latitude: 3.5167,
            longitude: 72.9333,
            island_type: "inhabited".into(),
            population: Some(600),
            description: Some(
                "Long island known for whale shark sightings and bikini beach".into(),
            ),
            tags: vec!["whale sharks".into(), "local".into(), "beach".into()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1621696372074-fee6fe9f5bc9?w=800".into(),
            ],
            size_km2: Some(3.0),
            amenities: vec!["guesthouses".into(), "cafes".into(), "dive shops".into()],
            water_activities: vec![
                "snorkeling".into(),
                "diving".into(),
                "whale shark excursions".into(),
            ],
            transfer_options: vec!["speedboat".into(), "public ferry".into()],
        },
    ]
}

fn sample_badges() -> Vec<CreateBadge> {
    vec![
        CreateBadge {
            name: "Island Novice".into(),
            description: "Visited your first island in the Maldives".into(),
            image_url: Some("https://img.icons8.com/color/58/island-on-water.png".into()),
            criteria: ProgressRule::VisitCountAtLeast { count: 1 },
        },
        CreateBadge {
            name: "Island Explorer".into(),
            description: "Visited 5 different islands".into(),
            image_url: Some("https://img.icons8.com/fluency/48/sea-waves.png".into()),
            criteria: ProgressRule::VisitCountAtLeast { count: 5 },
        },
        CreateBadge {
            name: "Luxury Connoisseur".into(),
            description: "Visited 3 resort islands".into(),
            image_url: Some("https://img.icons8.com/color/48/beach-umbrella.png".into()),
            criteria: ProgressRule::IslandTypeCountAtLeast {
                island_type: "resort".into(),
                count: 3,
            },
        },
    ]
}

fn sample_challenges() -> Vec<CreateChallenge> {
    vec![
        CreateChallenge {
            name: "Kaafu Atoll Explorer".into(),
            description: "Visit 3 islands in Kaafu Atoll".into(),
            objective: ProgressRule::AtollCountAtLeast {
                atoll: "Kaafu".into(),
                count: 3,
            },
            duration_days: 90,
            reward: ChallengeReward {
                badge: Some("Kaafu Expert".into()),
                points: 500,
            },
            is_active: true,
        },
        CreateChallenge {
            name: "Local Island Experience".into(),
            description: "Visit 5 inhabited islands to experience local Maldivian culture".into(),
            objective: ProgressRule::IslandTypeCountAtLeast {
                island_type: "inhabited".into(),
                count: 5,
            },
            duration_days: 180,
            reward: ChallengeReward {
                badge: Some("Cultural Immersion".into()),
                points: 750,
            },
            is_active: true,
        },
    ]
}

fn sample_blog_posts() -> Vec<CreateBlogPost> {
    vec![
        CreateBlogPost {
            title: "Getting Around the Atolls: Ferries, Speedboats and Seaplanes".into(),
            slug: "getting-around-the-atolls".into(),
            content: "The Maldives stretches across 26 atolls, and picking the right \
                      transfer makes or breaks a trip. Public ferries are the cheapest \
                      way between inhabited islands, speedboats cover the central atolls \
                      in under two hours, and seaplanes open up the remote resorts in \
                      Baa and beyond. This guide compares cost, comfort and booking \
                      lead times for each option."
                .into(),
            summary: "A practical comparison of ferry, speedboat and seaplane transfers."
                .into(),
            author: "Island Tracker Team".into(),
            featured_image: Some(
                "https://images.unsplash.com/photo-1578922746465-3a80a228f223?w=800".into(),
            ),
            tags: vec!["transport".into(), "planning".into()],
            category: "travel-tips".into(),
            is_published: true,
            is_featured: true,
        },
        CreateBlogPost {
            title: "Budget Guide: Local Islands Done Right".into(),
            slug: "budget-guide-local-islands".into(),
            content: "Guesthouse tourism changed everything. Islands like Maafushi and \
                      Dhigurah let you experience the Maldives on a fraction of a resort \
                      budget: bikini beaches, home-cooked mas huni breakfasts, and dive \
                      shops that charge half of what the resorts do. Here is what to \
                      know about local norms, cash, and picking a guesthouse."
                .into(),
            summary: "How to plan a local-island trip without resort prices.".into(),
            author: "Island Tracker Team".into(),
            featured_image: None,
            tags: vec!["budget".into(), "local".into(), "planning".into()],
            category: "travel-tips".into(),
            is_published: true,
            is_featured: false,
        },
        CreateBlogPost {
            title: "Why Baa Atoll Is a UNESCO Biosphere Reserve".into(),
            slug: "baa-atoll-unesco-biosphere".into(),
            content: "Hanifaru Bay in Baa Atoll hosts one of the largest known manta ray \
                      aggregations on the planet. Between June and November, plankton \
                      blooms pull in hundreds of mantas and the occasional whale shark. \
                      We look at the science behind the aggregation and the rules that \
                      keep the bay protected."
                .into(),
            summary: "The marine science behind the Maldives' most famous protected bay."
                .into(),
            author: "Island Tracker Team".into(),
            featured_image: Some(
                "https://images.unsplash.com/photo-1586861710684-b4e36ae77c4a?w=800".into(),
            ),
            tags: vec!["nature".into(), "marine life".into(), "conservation".into()],
            category: "nature".into(),
            is_published: true,
            is_featured: false,
        },
    ]
}
