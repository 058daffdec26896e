use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

/// Append-only log of withdrawn reviews that were later superseded.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "review_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Row in `reviews` this content used to live in.
    pub review_id: i64,
    pub course_id: i64,
    pub user_id: String,
    pub difficulty: i32,
    pub recommend: i32,
    pub attendance_required: bool,
    pub assessment: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub withdrawn_at: Option<DateTime<Utc>>,
    pub superseded_at: DateTime<Utc>,
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

impl Model {
    /// Copies a withdrawn review into the log before its row is reused.
    pub async fn record_superseded<C: ConnectionTrait>(
        db: &C,
        review: &super::review::Model,
        now: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            review_id: Set(review.id),
            course_id: Set(review.course_id),
            user_id: Set(review.user_id.clone()),
            difficulty: Set(review.difficulty),
            recommend: Set(review.recommend),
            attendance_required: Set(review.attendance_required),
            assessment: Set(review.assessment.clone()),
            comment: Set(review.comment.clone()),
            created_at: Set(review.created_at),
            withdrawn_at: Set(review.withdrawn_at),
            superseded_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
