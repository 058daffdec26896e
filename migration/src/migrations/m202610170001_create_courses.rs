use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202610170001_create_courses"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("courses"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Alias::new("code"))
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    // Major area, e.g. "Foundations", "Urban Planning".
                    .col(ColumnDef::new(Alias::new("area")).string().not_null())
                    // Standard enrolment year (1-4).
                    .col(ColumnDef::new(Alias::new("year")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("semester")).string().not_null())
                    // Weekly slot, e.g. "Mon1", "Tue2-3".
                    .col(ColumnDef::new(Alias::new("schedule")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("credits"))
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(Alias::new("syllabus_url")).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("courses")).to_owned())
            .await
    }
}
