use sea_orm::{prelude::Date, DatabaseConnection, DbErr};
use tracing::info;

use crate::{
    models::workout::Difficulty,
    repos::{
        activities::ActivitiesRepo, leaderboard::LeaderboardRepo, teams::TeamsRepo,
        users::UsersRepo, workouts::WorkoutsRepo,
    },
};

/// Wipe and repopulate the database with the fixed sample dataset.
///
/// Deletion order respects the foreign keys: activities and leaderboard
/// rows reference users/teams, users reference teams.
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let teams_repo = TeamsRepo::new(db.clone());
    let users_repo = UsersRepo::new(db.clone());
    let workouts_repo = WorkoutsRepo::new(db.clone());
    let activities_repo = ActivitiesRepo::new(db.clone());
    let leaderboard_repo = LeaderboardRepo::new(db.clone());

    activities_repo.delete_all().await?;
    leaderboard_repo.delete_all().await?;
    users_repo.delete_all().await?;
    teams_repo.delete_all().await?;
    workouts_repo.delete_all().await?;

    let marvel = teams_repo.create("Marvel".to_string()).await?;
    let dc = teams_repo.create("DC".to_string()).await?;

    let spiderman = users_repo
        .create(
            "Spider-Man".to_string(),
            "spiderman@marvel.com".to_string(),
            marvel.id.clone(),
        )
        .await?;
    let ironman = users_repo
        .create(
            "Iron Man".to_string(),
            "ironman@marvel.com".to_string(),
            marvel.id.clone(),
        )
        .await?;
    let wonderwoman = users_repo
        .create(
            "Wonder Woman".to_string(),
            "wonderwoman@dc.com".to_string(),
            dc.id.clone(),
        )
        .await?;
    let batman = users_repo
        .create(
            "Batman".to_string(),
            "batman@dc.com".to_string(),
            dc.id.clone(),
        )
        .await?;

    workouts_repo
        .create(
            "Super Strength".to_string(),
            "Strength training for heroes".to_string(),
            Difficulty::Hard,
        )
        .await?;
    workouts_repo
        .create(
            "Agility Training".to_string(),
            "Agility and speed drills".to_string(),
            Difficulty::Medium,
        )
        .await?;

    activities_repo
        .create(spiderman.id, "Running".to_string(), 30, 300, date(2025, 11, 1))
        .await?;
    activities_repo
        .create(ironman.id, "Weight Lifting".to_string(), 45, 500, date(2025, 11, 2))
        .await?;
    activities_repo
        .create(wonderwoman.id, "Yoga".to_string(), 60, 200, date(2025, 11, 3))
        .await?;
    activities_repo
        .create(batman.id, "Martial Arts".to_string(), 40, 350, date(2025, 11, 4))
        .await?;

    leaderboard_repo.create(marvel.id, 800).await?;
    leaderboard_repo.create(dc.id, 750).await?;

    info!("octofit database populated with sample data");

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd_opt(year, month, day).expect("valid literal date")
}
