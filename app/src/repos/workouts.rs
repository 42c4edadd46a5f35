use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait};

use crate::{
    models::workout::{ActiveModel, Difficulty, Entity as WorkoutEntity, Model as Workout},
    utils::crypto::generate_uuid,
};

pub struct WorkoutsRepo {
    db: DatabaseConnection,
}

impl WorkoutsRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        description: String,
        difficulty: Difficulty,
    ) -> Result<Workout, DbErr> {
        let workout_model = ActiveModel {
            id: Set(generate_uuid()),
            name: Set(name),
            description: Set(description),
            difficulty: Set(difficulty),
        };

        let workout = workout_model.insert(&self.db).await?;

        Ok(workout)
    }

    pub async fn get(&self, workout_id: String) -> Result<Workout, DbErr> {
        let workout = WorkoutEntity::find_by_id(workout_id).one(&self.db).await?;

        match workout {
            Some(w) => Ok(w),
            None => Err(DbErr::RecordNotFound("Workout was not found".to_string())),
        }
    }

    pub async fn list(&self) -> Result<Vec<Workout>, DbErr> {
        let workouts = WorkoutEntity::find().all(&self.db).await?;

        Ok(workouts)
    }

    pub async fn update(
        &self,
        workout_id: String,
        name: String,
        description: String,
        difficulty: Difficulty,
    ) -> Result<Workout, DbErr> {
        let workout = WorkoutEntity::find_by_id(&workout_id)
            .one(&self.db)
            .await?
            .ok_or(DbErr::RecordNotFound("Workout was not found".to_string()))?;

        let mut workout: ActiveModel = workout.into();
        workout.name = Set(name);
        workout.description = Set(description);
        workout.difficulty = Set(difficulty);
        let updated_workout = workout.update(&self.db).await?;

        Ok(updated_workout)
    }

    pub async fn delete(&self, workout_id: String) -> Result<(), DbErr> {
        WorkoutEntity::delete_by_id(workout_id).exec(&self.db).await?;

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), DbErr> {
        WorkoutEntity::delete_many().exec(&self.db).await?;

        Ok(())
    }
}
