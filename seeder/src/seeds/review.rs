use crate::seed::Seeder;
use fake::{Fake, faker::name::en::Name};
use sea_orm::DatabaseConnection;
use services::course::CourseService;
use services::review::{ASSESSMENT_KINDS, CreateReview, RATING_MAX, RATING_MIN, ReviewService};
use services::service::AppError;
use std::pin::Pin;

const COMMENTS: [&str; 6] = [
    "",
    "Clear lectures and fair grading.",
    "Heavy weekly readings.",
    "The final report takes a lot of time.",
    "Worth taking early.",
    "Attendance is checked every week.",
];

/// Random demo reviews from fake reviewers on every course.
pub struct ReviewSeeder {
    pub per_course: usize,
}

fn random_review() -> CreateReview {
    let rating = || fastrand::i32(RATING_MIN..=RATING_MAX);

    CreateReview {
        name: Name().fake(),
        difficulty: Some(rating()),
        recommend: Some(rating()),
        attendance_required: fastrand::bool(),
        assessment: Some(ASSESSMENT_KINDS[fastrand::usize(..ASSESSMENT_KINDS.len())].to_string()),
        comment: COMMENTS[fastrand::usize(..COMMENTS.len())].to_string(),
    }
}

impl Seeder for ReviewSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<usize, AppError>> + Send + 'a>> {
        Box::pin(async move {
            let mut inserted = 0;
            for course in CourseService::list_all(db).await? {
                for _ in 0..self.per_course {
                    match ReviewService::add(db, course.id, random_review()).await {
                        Ok(_) => inserted += 1,
                        // Fake names repeat, and reruns meet their own reviews.
                        Err(AppError::DuplicateReview) => {}
                        Err(err) => return Err(err),
                    }
                }
            }
            Ok(inserted)
        })
    }
}
