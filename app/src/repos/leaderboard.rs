use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    models::leaderboard::{ActiveModel, Entity as LeaderboardEntity, Model as LeaderboardEntry},
    utils::crypto::generate_uuid,
};

pub struct LeaderboardRepo {
    db: DatabaseConnection,
}

impl LeaderboardRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, team_id: String, points: i32) -> Result<LeaderboardEntry, DbErr> {
        let entry_model = ActiveModel {
            id: Set(generate_uuid()),
            team_id: Set(team_id),
            points: Set(points),
        };

        let entry = entry_model.insert(&self.db).await?;

        Ok(entry)
    }

    pub async fn get(&self, entry_id: String) -> Result<LeaderboardEntry, DbErr> {
        let entry = LeaderboardEntity::find_by_id(entry_id).one(&self.db).await?;

        match entry {
            Some(e) => Ok(e),
            None => Err(DbErr::RecordNotFound(
                "Leaderboard entry was not found".to_string(),
            )),
        }
    }

    pub async fn list(&self) -> Result<Vec<LeaderboardEntry>, DbErr> {
        let entries = LeaderboardEntity::find().all(&self.db).await?;

        Ok(entries)
    }

    pub async fn update(
        &self,
        entry_id: String,
        team_id: String,
        points: i32,
    ) -> Result<LeaderboardEntry, DbErr> {
        let entry = LeaderboardEntity::find_by_id(&entry_id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(
                "Leaderboard entry was not found".to_string(),
            ))?;

        let mut entry: ActiveModel = entry.into();
        entry.team_id = Set(team_id);
        entry.points = Set(points);
        let updated_entry = entry.update(&self.db).await?;

        Ok(updated_entry)
    }

    pub async fn delete(&self, entry_id: String) -> Result<(), DbErr> {
        LeaderboardEntity::delete_by_id(entry_id).exec(&self.db).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), DbErr> {
        LeaderboardEntity::delete_many().exec(&self.db).await?;

        Ok(())
    }
}
