//! Database-backed seeder tests. Run with a disposable Postgres instance:
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/octofit_test cargo test -- --ignored
//! ```

mod common;

use octofit::database::{
    connect::{connect_database, run_migrations},
    seed::seed_sample_data,
};
use octofit::models::{activity, leaderboard, team, user, workout};
use sea_orm::{DatabaseConnection, EntityTrait};

use common::{database_available, db_test_config};

async fn seeded_db() -> DatabaseConnection {
    let db = connect_database(db_test_config())
        .await
        .expect("Failed to connect to test database");
    run_migrations(&db).await.expect("Failed to run migrations");
    seed_sample_data(&db).await.expect("Failed to seed");

    db
}

async fn counts(db: &DatabaseConnection) -> (usize, usize, usize, usize, usize) {
    (
        team::Entity::find().all(db).await.unwrap().len(),
        user::Entity::find().all(db).await.unwrap().len(),
        workout::Entity::find().all(db).await.unwrap().len(),
        activity::Entity::find().all(db).await.unwrap().len(),
        leaderboard::Entity::find().all(db).await.unwrap().len(),
    )
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn seeder_creates_documented_counts() {
    if !database_available() {
        eprintln!("Skipping: DATABASE_URL not set");
        return;
    }

    let db = seeded_db().await;

    assert_eq!(counts(&db).await, (2, 4, 2, 4, 2));

    let teams = team::Entity::find().all(&db).await.unwrap();
    let mut names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
    names.sort();
    assert_eq!(names, ["DC", "Marvel"]);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn seeding_twice_leaves_same_counts() {
    if !database_available() {
        eprintln!("Skipping: DATABASE_URL not set");
        return;
    }

    let db = seeded_db().await;
    seed_sample_data(&db).await.expect("Failed to reseed");

    assert_eq!(counts(&db).await, (2, 4, 2, 4, 2));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn seeded_rows_reference_each_other() {
    if !database_available() {
        eprintln!("Skipping: DATABASE_URL not set");
        return;
    }

    let db = seeded_db().await;

    let teams = team::Entity::find().all(&db).await.unwrap();
    let users = user::Entity::find().all(&db).await.unwrap();
    let activities = activity::Entity::find().all(&db).await.unwrap();
    let entries = leaderboard::Entity::find().all(&db).await.unwrap();

    for user in &users {
        assert!(teams.iter().any(|t| t.id == user.team_id));
    }
    for activity in &activities {
        assert!(users.iter().any(|u| u.id == activity.user_id));
    }
    for entry in &entries {
        assert!(teams.iter().any(|t| t.id == entry.team_id));
    }
}
