use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // teams
        manager
            .create_table(
                Table::create()
                    .table("teams")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("name"))
                    .to_owned(),
            )
            .await?;

        // users
        manager
            .create_table(
                Table::create()
                    .table("users")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("name"))
                    .col(string("email"))
                    .col(string("team_id"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_teams")
                            .from("users", "team_id")
                            .to("teams", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // workouts
        manager
            .create_table(
                Table::create()
                    .table("workouts")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("name"))
                    .col(string("description"))
                    .col(string("difficulty"))
                    .to_owned(),
            )
            .await?;

        // activities
        manager
            .create_table(
                Table::create()
                    .table("activities")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("user_id"))
                    .col(string("activity_type"))
                    .col(integer("duration"))
                    .col(integer("calories"))
                    .col(date("date"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activities_users")
                            .from("activities", "user_id")
                            .to("users", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // leaderboard
        manager
            .create_table(
                Table::create()
                    .table("leaderboard")
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string("team_id"))
                    .col(integer("points"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leaderboard_teams")
                            .from("leaderboard", "team_id")
                            .to("teams", "id")
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table("activities").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("leaderboard").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("users").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("teams").to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table("workouts").to_owned())
            .await?;

        Ok(())
    }
}
