use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, QueryOrder, TryInsertResult};
use serde::{Deserialize, Serialize};

/// A catalogue entry in the `courses` table.
///
/// Courses are created by the seeder only; the server never edits or deletes them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique course code, e.g. `SES101`.
    #[sea_orm(unique)]
    pub code: String,
    pub title: String,
    /// Major area the course belongs to.
    pub area: String,
    /// Standard enrolment year.
    pub year: i32,
    pub semester: String,
    /// Weekly timetable slot.
    pub schedule: String,
    pub credits: f64,
    pub syllabus_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts a course and returns the stored row.
    #[allow(clippy::too_many_arguments)]
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        code: &str,
        title: &str,
        area: &str,
        year: i32,
        semester: &str,
        schedule: &str,
        credits: f64,
        syllabus_url: Option<&str>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            code: Set(code.to_owned()),
            title: Set(title.to_owned()),
            area: Set(area.to_owned()),
            year: Set(year),
            semester: Set(semester.to_owned()),
            schedule: Set(schedule.to_owned()),
            credits: Set(credits),
            syllabus_url: Set(syllabus_url.map(str::to_owned)),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Inserts a course unless one with the same code already exists.
    ///
    /// Returns `true` when a row was written.
    pub async fn insert_if_absent<C: ConnectionTrait>(
        db: &C,
        course: ActiveModel,
    ) -> Result<bool, DbErr> {
        let result = Entity::insert(course)
            .on_conflict(OnConflict::column(Column::Code).do_nothing().to_owned())
            .do_nothing()
            .exec(db)
            .await?;

        Ok(matches!(result, TryInsertResult::Inserted(_)))
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Every course, ordered by code.
    pub async fn all_by_code<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Code).all(db).await
    }
}
