use crate::seed::Seeder;
use sea_orm::DatabaseConnection;
use services::course::{CourseService, CreateCourse};
use services::service::AppError;
use std::pin::Pin;

/// The sample catalogue. Seeding is keyed on the course code, so reruns skip
/// courses that already exist.
pub struct CourseSeeder;

fn sample_courses() -> Vec<CreateCourse> {
    let course = |code: &str, title: &str, area: &str, year: i32, semester: &str, schedule: &str| {
        CreateCourse {
            code: code.to_string(),
            title: title.to_string(),
            area: area.to_string(),
            year,
            semester: semester.to_string(),
            schedule: schedule.to_string(),
            credits: 2.0,
            syllabus_url: None,
        }
    };

    vec![
        course("SES101", "Introduction to Socio-Economics", "Foundations", 1, "Spring", "Mon1"),
        course(
            "ENG201",
            "Fundamentals of Management Engineering",
            "Management Engineering",
            2,
            "Spring",
            "Tue2-3",
        ),
        course("URP301", "Urban Planning Theory", "Urban Planning", 3, "Fall", "Wed4"),
        course("STAT220", "Introduction to Statistics", "Foundations", 2, "Spring", "Thu3"),
    ]
}

impl Seeder for CourseSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<usize, AppError>> + Send + 'a>> {
        Box::pin(async move {
            let mut inserted = 0;
            for course in sample_courses() {
                if CourseService::create_if_absent(db, course).await? {
                    inserted += 1;
                }
            }
            Ok(inserted)
        })
    }
}
