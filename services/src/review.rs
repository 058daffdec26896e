use crate::course::{Course, CourseService};
use crate::identity::make_user_id;
use crate::pagination::{PER_PAGE, Pagination};
use crate::service::AppError;
use chrono::Utc;
use db::models::review::{Entity, ReviewContent};
use db::models::review_history::Model as ReviewHistory;
use log::info;
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QuerySelect, TransactionTrait,
};
use serde::Serialize;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

pub use db::models::review::{Model as Review, ReviewState};

pub const RATING_MIN: i32 = 1;
pub const RATING_MAX: i32 = 5;

/// Suggested values for the free-form assessment tag.
pub const ASSESSMENT_KINDS: [&str; 4] = ["exam", "report", "both", "none"];

pub const DEFAULT_ASSESSMENT: &str = "none";

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::from("Name is required")));
    }
    Ok(())
}

/// A submitted review form.
///
/// Ratings are `None` when the field was missing or not an integer. Presence
/// and range are checked separately, so `Some(0)` is reported as out of range
/// rather than missing.
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateReview {
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    #[validate(
        required(message = "Difficulty is required"),
        range(min = 1, max = 5, message = "Difficulty must be between 1 and 5")
    )]
    pub difficulty: Option<i32>,

    #[validate(
        required(message = "Recommendation is required"),
        range(min = 1, max = 5, message = "Recommendation must be between 1 and 5")
    )]
    pub recommend: Option<i32>,

    pub attendance_required: bool,
    pub assessment: Option<String>,
    pub comment: String,
}

impl CreateReview {
    /// Validates the form and splits it into the reviewer id and the stored content.
    fn into_parts(self) -> Result<(String, ReviewContent), AppError> {
        self.validate()?;

        let (Some(difficulty), Some(recommend)) = (self.difficulty, self.recommend) else {
            return Err(AppError::Validation("Ratings are required".into()));
        };

        let assessment = self
            .assessment
            .map(|a| a.trim().to_owned())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_ASSESSMENT.to_owned());

        let content = ReviewContent {
            difficulty,
            recommend,
            attendance_required: self.attendance_required,
            assessment,
            comment: self.comment.trim().to_owned(),
        };

        Ok((make_user_id(&self.name), content))
    }
}

/// One page of a course's active reviews.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewPage {
    pub course: Course,
    pub reviews: Vec<Review>,
    pub pagination: Pagination,
    /// The recommendation floor that was applied, if any.
    pub min_recommend: Option<i32>,
}

pub struct ReviewService;

impl ReviewService {
    /// Stores a new active review for the reviewer named in `params`.
    ///
    /// A withdrawn review of the same reviewer is copied into the history log and
    /// its row reused; both writes share one transaction. Fails with
    /// `DuplicateReview` if an active review already exists, including when a
    /// concurrent add for the same reviewer wins the race.
    pub async fn add<C>(db: &C, course_id: i64, params: CreateReview) -> Result<Review, AppError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        CourseService::get(db, course_id).await?;
        let (user_id, content) = params.into_parts()?;
        let now = Utc::now();

        let txn = db.begin().await?;

        let review = match Review::find_current(&txn, course_id, &user_id).await? {
            Some(current) if current.is_active() => return Err(AppError::DuplicateReview),
            Some(withdrawn) => {
                ReviewHistory::record_superseded(&txn, &withdrawn, now).await?;

                if Review::reactivate(&txn, withdrawn.id, content, now).await? == 0 {
                    return Err(AppError::DuplicateReview);
                }

                Entity::find_by_id(withdrawn.id)
                    .one(&txn)
                    .await?
                    .ok_or_else(|| {
                        DbErr::RecordNotFound(format!("Review {} vanished", withdrawn.id))
                    })?
            }
            None => Review::insert_active(&txn, course_id, &user_id, content, now)
                .await
                .map_err(AppError::from_write)?,
        };

        txn.commit().await?;

        info!("Review {} added to course {} by {}", review.id, course_id, user_id);
        Ok(review)
    }

    /// Withdraws the reviewer's active review on a course.
    pub async fn cancel<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        name: &str,
    ) -> Result<(), AppError> {
        CourseService::get(db, course_id).await?;
        validate_name(name).map_err(|_| AppError::Validation("Name is required".into()))?;

        let user_id = make_user_id(name);
        if Review::withdraw(db, course_id, &user_id, Utc::now()).await? == 0 {
            return Err(AppError::NoActiveReview);
        }

        info!("Review on course {} withdrawn by {}", course_id, user_id);
        Ok(())
    }

    /// Active reviews of a course, newest first, `PER_PAGE` at a time.
    ///
    /// A `min_recommend` of zero is treated as no filter.
    pub async fn list_active<C: ConnectionTrait>(
        db: &C,
        course_id: i64,
        page: u64,
        min_recommend: Option<i32>,
    ) -> Result<ReviewPage, AppError> {
        let course = CourseService::get(db, course_id).await?;
        let min_recommend = min_recommend.filter(|min| *min != 0);

        let query = Review::active_for_course(course_id, min_recommend);
        let total = query.clone().count(db).await?;
        let pagination = Pagination::new(page, PER_PAGE, total);

        let reviews = query
            .offset(pagination.offset())
            .limit(pagination.limit())
            .all(db)
            .await?;

        Ok(ReviewPage {
            course,
            reviews,
            pagination,
            min_recommend,
        })
    }
}
