use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The current review of one pseudonymous user for one course.
///
/// `(course_id, user_id)` is unique, so the table never holds more than one row
/// per pair. Whether that row is visible is decided by `state`; a withdrawn row
/// keeps its content until a fresh review supersedes it, at which point the old
/// content is copied into `review_history`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    /// Pseudonymous identifier derived from the reviewer's display name.
    pub user_id: String,
    /// How hard it is to pass, 1-5.
    pub difficulty: i32,
    /// How strongly the reviewer recommends the course, 1-5.
    pub recommend: i32,
    pub attendance_required: bool,
    /// Free-form grading tag, e.g. "exam", "report", "both", "none".
    pub assessment: String,
    pub comment: String,
    pub state: ReviewState,
    pub created_at: DateTime<Utc>,
    pub withdrawn_at: Option<DateTime<Utc>>,
}

/// Lifecycle of a review row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReviewState {
    #[sea_orm(string_value = "active")]
    Active,

    #[sea_orm(string_value = "withdrawn")]
    Withdrawn,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The user-supplied part of a review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewContent {
    pub difficulty: i32,
    pub recommend: i32,
    pub attendance_required: bool,
    pub assessment: String,
    pub comment: String,
}

impl ReviewContent {
    fn apply(self, active: &mut ActiveModel, now: DateTime<Utc>) {
        active.difficulty = Set(self.difficulty);
        active.recommend = Set(self.recommend);
        active.attendance_required = Set(self.attendance_required);
        active.assessment = Set(self.assessment);
        active.comment = Set(self.comment);
        active.state = Set(ReviewState::Active);
        active.created_at = Set(now);
        active.withdrawn_at = Set(None);
    }
}

impl Model {
    pub fn is_active(&self) -> bool {
        self.state == ReviewState::Active
    }

    /// The current row for `(course_id, user_id)`, active or withdrawn.
    pub async fn find_current<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        user_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .one(db)
            .await
    }

    /// Inserts a new active review.
    ///
    /// Fails with a unique-constraint violation if the pair already has a row.
    pub async fn insert_active<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        user_id: &str,
        content: ReviewContent,
        now: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let mut active = ActiveModel {
            course_id: Set(course_id),
            user_id: Set(user_id.to_owned()),
            ..Default::default()
        };
        content.apply(&mut active, now);
        active.insert(db).await
    }

    /// Overwrites a withdrawn row with fresh content and makes it active.
    ///
    /// Only touches the row while it is still withdrawn; returns the number of
    /// rows changed (0 means someone else reactivated it first).
    pub async fn reactivate<C: ConnectionTrait>(
        db: &C,
        id: i64,
        content: ReviewContent,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let mut patch = ActiveModel {
            ..Default::default()
        };
        content.apply(&mut patch, now);

        let result = Entity::update_many()
            .set(patch)
            .filter(Column::Id.eq(id))
            .filter(Column::State.eq(ReviewState::Withdrawn))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Withdraws the active review of `(course_id, user_id)` in one statement.
    ///
    /// Returns the number of rows changed (0 when there was no active review).
    pub async fn withdraw<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let patch = ActiveModel {
            state: Set(ReviewState::Withdrawn),
            withdrawn_at: Set(Some(now)),
            ..Default::default()
        };

        let result = Entity::update_many()
            .set(patch)
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::State.eq(ReviewState::Active))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Active reviews of a course, newest first, optionally with a recommendation floor.
    pub fn active_for_course(course_id: i64, min_recommend: Option<i32>) -> Select<Entity> {
        let mut query = Entity::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::State.eq(ReviewState::Active));

        if let Some(min) = min_recommend {
            query = query.filter(Column::Recommend.gte(min));
        }

        query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
    }
}
