//! Display-ready projections of catalog payloads.

use lms_content::{excerpt, render_content};
use serde::Serialize;

use crate::model::{Course, Lesson, ResourceId};

/// A lesson with its body rendered to HTML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LessonView {
    pub id: ResourceId,
    pub title: String,
    pub html: String,
}

impl LessonView {
    /// Render the lesson body chosen by [`Lesson::body_text`].
    #[must_use]
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            html: render_content(lesson.body_text()),
        }
    }
}

/// One row of a course listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub id: ResourceId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Plain-text preview of the description.
    pub excerpt: String,
    pub lesson_count: usize,
}

impl CourseSummary {
    /// Summarize a course, previewing at most `max_len` characters of its
    /// description.
    #[must_use]
    pub fn from_course(course: &Course, max_len: usize) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            status: course.status_label().map(str::to_owned),
            excerpt: excerpt(course.description.as_str(), max_len),
            lesson_count: course.lesson_total(),
        }
    }
}

/// A course page: rendered description followed by its lessons in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseView {
    pub id: ResourceId,
    pub title: String,
    pub description_html: String,
    pub lessons: Vec<LessonView>,
}

impl CourseView {
    #[must_use]
    pub fn from_course(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            description_html: render_content(course.description.as_str()),
            lessons: course
                .ordered_lessons()
                .into_iter()
                .map(LessonView::from_lesson)
                .collect(),
        }
    }
}
