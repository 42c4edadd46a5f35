use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    models::team::{ActiveModel, Entity as TeamEntity, Model as Team},
    utils::crypto::generate_uuid,
};

pub struct TeamsRepo {
    db: DatabaseConnection,
}

impl TeamsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String) -> Result<Team, DbErr> {
        let team_model = ActiveModel {
            id: Set(generate_uuid()),
            name: Set(name),
        };

        let team = team_model.insert(&self.db).await?;

        Ok(team)
    }

    pub async fn get(&self, team_id: String) -> Result<Team, DbErr> {
        let team = TeamEntity::find_by_id(team_id).one(&self.db).await?;

        match team {
            Some(t) => Ok(t),
            None => Err(DbErr::RecordNotFound("Team was not found".to_string())),
        }
    }

    pub async fn list(&self) -> Result<Vec<Team>, DbErr> {
        let teams = TeamEntity::find().all(&self.db).await?;

        Ok(teams)
    }

    pub async fn update(&self, team_id: String, name: String) -> Result<Team, DbErr> {
        let team = TeamEntity::find_by_id(&team_id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound("Team was not found".to_string()))?;

        let mut team: ActiveModel = team.into();
        team.name = Set(name);
        let updated_team = team.update(&self.db).await?;

        Ok(updated_team)
    }

    pub async fn delete(&self, team_id: String) -> Result<(), DbErr> {
        TeamEntity::delete_by_id(team_id).exec(&self.db).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), DbErr> {
        TeamEntity::delete_many().exec(&self.db).await?;

        Ok(())
    }
}
