use sea_orm::{
    prelude::Date, ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait,
};

use crate::{
    models::activity::{ActiveModel, Entity as ActivityEntity, Model as Activity},
    utils::crypto::generate_uuid,
};

pub struct ActivitiesRepo {
    db: DatabaseConnection,
}

impl ActivitiesRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: String,
        activity_type: String,
        duration: i32,
        calories: i32,
        date: Date,
    ) -> Result<Activity, DbErr> {
        let activity_model = ActiveModel {
            id: Set(generate_uuid()),
            user_id: Set(user_id),
            activity_type: Set(activity_type),
            duration: Set(duration),
            calories: Set(calories),
            date: Set(date),
        };

        let activity = activity_model.insert(&self.db).await?;

        Ok(activity)
    }

    pub async fn get(&self, activity_id: String) -> Result<Activity, DbErr> {
        let activity = ActivityEntity::find_by_id(activity_id).one(&self.db).await?;

        match activity {
            Some(a) => Ok(a),
            None => Err(DbErr::RecordNotFound("Activity was not found".to_string())),
        }
    }

    pub async fn list(&self) -> Result<Vec<Activity>, DbErr> {
        let activities = ActivityEntity::find().all(&self.db).await?;

        Ok(activities)
    }

    pub async fn update(
        &self,
        activity_id: String,
        user_id: String,
        activity_type: String,
        duration: i32,
        calories: i32,
        date: Date,
    ) -> Result<Activity, DbErr> {
        let activity = ActivityEntity::find_by_id(&activity_id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound("Activity was not found".to_string()))?;

        let mut activity: ActiveModel = activity.into();
        activity.user_id = Set(user_id);
        activity.activity_type = Set(activity_type);
        activity.duration = Set(duration);
        activity.calories = Set(calories);
        activity.date = Set(date);
        let updated_activity = activity.update(&self.db).await?;

        Ok(updated_activity)
    }

    pub async fn delete(&self, activity_id: String) -> Result<(), DbErr> {
        ActivityEntity::delete_by_id(activity_id).exec(&self.db).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), DbErr> {
        ActivityEntity::delete_many().exec(&self.db).await?;

        Ok(())
    }
}
