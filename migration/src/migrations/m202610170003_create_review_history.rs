use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610170003_create_review_history"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Append-only: rows are inserted when a withdrawn review is superseded, never updated.
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("review_history"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("review_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("course_id"))
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("user_id")).string_len(16).not_null())
                    .col(ColumnDef::new(Alias::new("difficulty")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("recommend")).integer().not_null())
                    .col(
                        ColumnDef::new(Alias::new("attendance_required"))
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Alias::new("assessment")).string().not_null())
                    .col(ColumnDef::new(Alias::new("comment")).text().not_null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null())
                    .col(ColumnDef::new(Alias::new("withdrawn_at")).timestamp().null())
                    .col(
                        ColumnDef::new(Alias::new("superseded_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("review_history"), Alias::new("course_id"))
                            .to(Alias::new("courses"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_history_course_user")
                    .table(Alias::new("review_history"))
                    .col(Alias::new("course_id"))
                    .col(Alias::new("user_id"))
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("review_history")).to_owned())
            .await
    }
}
