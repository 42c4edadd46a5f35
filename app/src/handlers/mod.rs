pub mod activities;
pub mod api_root;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;
