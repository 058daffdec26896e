use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610170002_create_reviews"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("reviews"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("course_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("user_id")).string_len(16).not_null())
                    .col(
                        ColumnDef::new(Alias::new("difficulty"))
                            .integer()
                            .not_null()
                            .check(Expr::col(Alias::new("difficulty")).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(Alias::new("recommend"))
                            .integer()
                            .not_null()
                            .check(Expr::col(Alias::new("recommend")).between(1, 5)),
                    )
                    .col(
                        ColumnDef::new(Alias::new("attendance_required"))
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Alias::new("assessment"))
                            .string()
                            .not_null()
                            .default("none"),
                    )
                    .col(
                        ColumnDef::new(Alias::new("comment"))
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Alias::new("state"))
                            .string()
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(ColumnDef::new(Alias::new("withdrawn_at")).timestamp().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("reviews"), Alias::new("course_id"))
                            .to(Alias::new("courses"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One current row per (course, user); `state` says whether it is visible.
        manager
            .create_index(
                Index::create()
                    .name("uq_reviews_course_user")
                    .table(Alias::new("reviews"))
                    .col(Alias::new("course_id"))
                    .col(Alias::new("user_id"))
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_course_state_created")
                    .table(Alias::new("reviews"))
                    .col(Alias::new("course_id"))
                    .col(Alias::new("state"))
                    .col(Alias::new("created_at"))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("reviews")).to_owned())
            .await
    }
}
