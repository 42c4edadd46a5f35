use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    models::user::{ActiveModel, Entity as UserEntity, Model as User},
    utils::crypto::generate_uuid,
};

pub struct UsersRepo {
    db: DatabaseConnection,
}

impl UsersRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, email: String, team_id: String) -> Result<User, DbErr> {
        let user_model = ActiveModel {
            id: Set(generate_uuid()),
            name: Set(name),
            email: Set(email),
            team_id: Set(team_id),
        };

        let user = user_model.insert(&self.db).await?;

        Ok(user)
    }

    pub async fn get(&self, user_id: String) -> Result<User, DbErr> {
        let user = UserEntity::find_by_id(user_id).one(&self.db).await?;

        match user {
            Some(u) => Ok(u),
            None => Err(DbErr::RecordNotFound("User was not found".to_string())),
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, DbErr> {
        let users = UserEntity::find().all(&self.db).await?;

        Ok(users)
    }

    pub async fn update(
        &self,
        user_id: String,
        name: String,
        email: String,
        team_id: String,
    ) -> Result<User, DbErr> {
        let user = UserEntity::find_by_id(&user_id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound("User was not found".to_string()))?;

        let mut user: ActiveModel = user.into();
        user.name = Set(name);
        user.email = Set(email);
        user.team_id = Set(team_id);
        let updated_user = user.update(&self.db).await?;

        Ok(updated_user)
    }

    pub async fn delete(&self, user_id: String) -> Result<(), DbErr> {
        UserEntity::delete_by_id(user_id).exec(&self.db).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), DbErr> {
        UserEntity::delete_many().exec(&self.db).await?;

        Ok(())
    }
}
