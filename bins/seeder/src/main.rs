//! Database seeder for SeminarHub development and testing.
//!
//! Seeds the category vocabulary and two demo users, and prints a dev JWT
//! for each user so the API can be exercised without the identity provider.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use seminarhub_db::entities::{categories, users};
use seminarhub_shared::{JwtConfig, JwtService};

/// Demo organizer ID (consistent for all seeds)
const DEMO_ORGANIZER_ID: &str = "00000000-0000-0000-0000-000000000001";
/// Demo participant ID (consistent for all seeds)
const DEMO_PARTICIPANT_ID: &str = "00000000-0000-0000-0000-000000000002";

const CATEGORY_NAMES: [&str; 5] = [
    "Technology",
    "Business",
    "Science",
    "Arts and Culture",
    "Health and Wellness",
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = seminarhub_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding categories...");
    seed_categories(&db).await;

    println!("Seeding demo users...");
    seed_user(&db, demo_organizer_id(), "ada", "ada@seminarhub.dev").await;
    seed_user(&db, demo_participant_id(), "grace", "grace@seminarhub.dev").await;

    print_dev_tokens();

    println!("Seeding complete!");
}

fn demo_organizer_id() -> Uuid {
    Uuid::parse_str(DEMO_ORGANIZER_ID).unwrap()
}

fn demo_participant_id() -> Uuid {
    Uuid::parse_str(DEMO_PARTICIPANT_ID).unwrap()
}

/// Seeds the shared category vocabulary.
async fn seed_categories(db: &DatabaseConnection) {
    let mut inserted = 0;

    for name in CATEGORY_NAMES {
        let exists = categories::Entity::find()
            .filter(categories::Column::Name.eq(name))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some();

        if exists {
            continue;
        }

        let category = categories::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        if let Err(e) = category.insert(db).await {
            eprintln!("Failed to insert category {name}: {e}");
        } else {
            inserted += 1;
        }
    }

    println!("  Inserted {inserted} categories");
}

/// Seeds a demo user mirroring what the identity provider would supply.
async fn seed_user(db: &DatabaseConnection, id: Uuid, username: &str, email: &str) {
    if users::Entity::find_by_id(id)
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  User {username} already exists, skipping...");
        return;
    }

    let user = users::ActiveModel {
        id: Set(id),
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        created_at: Set(Utc::now().into()),
    };

    if let Err(e) = user.insert(db).await {
        eprintln!("Failed to insert user {username}: {e}");
    } else {
        println!("  Created user: {username}");
    }
}

/// Prints dev tokens signed with the configured (or default) secret.
fn print_dev_tokens() {
    let secret = std::env::var("SEMINARHUB__JWT__SECRET")
        .unwrap_or_else(|_| JwtConfig::default().secret);
    let jwt_service = JwtService::new(JwtConfig {
        secret,
        ..JwtConfig::default()
    });

    for (id, username) in [
        (demo_organizer_id(), "ada"),
        (demo_participant_id(), "grace"),
    ] {
        match jwt_service.generate_token(id, username) {
            Ok(token) => println!("  Dev token for {username}: {token}"),
            Err(e) => eprintln!("Failed to generate token for {username}: {e}"),
        }
    }
}
