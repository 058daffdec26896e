use crate::service::{AppError, ToActiveModel};
use db::models::course::{ActiveModel, Column, Entity};
use log::debug;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::Serialize;

pub use db::models::course::Model as Course;

#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub code: String,
    pub title: String,
    pub area: String,
    pub year: i32,
    pub semester: String,
    pub schedule: String,
    pub credits: f64,
    pub syllabus_url: Option<String>,
}

impl ToActiveModel<Entity> for CreateCourse {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        if self.code.trim().is_empty() {
            return Err(AppError::Validation("Course code is required".into()));
        }

        Ok(ActiveModel {
            code: Set(self.code.trim().to_owned()),
            title: Set(self.title),
            area: Set(self.area),
            year: Set(self.year),
            semester: Set(self.semester),
            schedule: Set(self.schedule),
            credits: Set(self.credits),
            syllabus_url: Set(self.syllabus_url),
            ..Default::default()
        })
    }
}

/// Catalogue search filters, all optional and combined with AND.
///
/// `code`, `title` and `schedule` match substrings; `area`, `year` and
/// `semester` must match exactly. Absent filters are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CourseSearch {
    pub code: Option<String>,
    pub title: Option<String>,
    pub area: Option<String>,
    pub year: Option<i32>,
    pub semester: Option<String>,
    pub schedule: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl CourseSearch {
    /// Trims every text filter and drops the blank ones.
    pub fn normalized(self) -> Self {
        Self {
            code: non_blank(self.code),
            title: non_blank(self.title),
            area: non_blank(self.area),
            year: self.year,
            semester: non_blank(self.semester),
            schedule: non_blank(self.schedule),
        }
    }

    /// `true` when no filter is set, i.e. the search matches the whole catalogue.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(code) = &self.code {
            condition = condition.add(Column::Code.contains(code));
        }
        if let Some(title) = &self.title {
            condition = condition.add(Column::Title.contains(title));
        }
        if let Some(area) = &self.area {
            condition = condition.add(Column::Area.eq(area.as_str()));
        }
        if let Some(year) = self.year {
            condition = condition.add(Column::Year.eq(year));
        }
        if let Some(semester) = &self.semester {
            condition = condition.add(Column::Semester.eq(semester.as_str()));
        }
        if let Some(schedule) = &self.schedule {
            condition = condition.add(Column::Schedule.contains(schedule));
        }

        condition
    }
}

pub struct CourseService;

impl CourseService {
    /// Every course, ordered by code.
    pub async fn list_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Course>, AppError> {
        Ok(Course::all_by_code(db).await?)
    }

    /// Looks up a course or fails with `CourseNotFound`.
    pub async fn get<C: ConnectionTrait>(db: &C, course_id: i64) -> Result<Course, AppError> {
        Course::find_by_id(db, course_id)
            .await?
            .ok_or(AppError::CourseNotFound(course_id))
    }

    /// Courses matching `search`, ordered by code. Not paginated.
    pub async fn search<C: ConnectionTrait>(
        db: &C,
        search: &CourseSearch,
    ) -> Result<Vec<Course>, AppError> {
        if search.is_empty() {
            return Self::list_all(db).await;
        }

        debug!("course search: {:?}", search);

        let courses = Entity::find()
            .filter(search.condition())
            .order_by_asc(Column::Code)
            .all(db)
            .await?;

        Ok(courses)
    }

    /// Inserts a course unless its code is already taken. Returns `true` if inserted.
    pub async fn create_if_absent<C: ConnectionTrait>(
        db: &C,
        params: CreateCourse,
    ) -> Result<bool, AppError> {
        let active = params.into_active_model()?;
        Ok(Course::insert_if_absent(db, active).await?)
    }
}
