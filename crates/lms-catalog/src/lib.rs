//! Course catalog payloads.
//!
//! Typed views of the JSON the learning platform API returns for courses and
//! lessons, and display projections that run bodies through `lms-content`:
//!
//! - [`Course`], [`Lesson`]: API payloads
//! - [`Listing`]: bare array or paginated envelope
//! - [`LessonView`], [`CourseView`], [`CourseSummary`]: rendered output
//!
//! # Example
//!
//! ```
//! use lms_catalog::{CourseSummary, parse_courses};
//!
//! let json = r#"[{"id": 1, "title": "DSA", "description": "Data <b>structures</b>"}]"#;
//! let courses = parse_courses(json).unwrap();
//! let summary = CourseSummary::from_course(&courses[0], 120);
//! assert_eq!(summary.excerpt, "Data structures");
//! ```

mod listing;
mod model;
mod view;

pub use listing::{Listing, Page, Pagination};
pub use model::{Course, CourseStatus, Lesson, ResourceId, UnknownStatus};
pub use view::{CourseSummary, CourseView, LessonView};

/// Catalog payload error.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Payload is not valid JSON or does not match the expected shape.
    #[error("Invalid {kind} payload: {source}")]
    Json {
        /// What was being parsed (e.g., "course").
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse a single course, with or without embedded lessons.
pub fn parse_course(json: &str) -> Result<Course, CatalogError> {
    parse(json, "course")
}

/// Parse a single lesson.
pub fn parse_lesson(json: &str) -> Result<Lesson, CatalogError> {
    parse(json, "lesson")
}

/// Parse a course list response, paginated or not.
pub fn parse_courses(json: &str) -> Result<Vec<Course>, CatalogError> {
    let listing: Listing<Course> = parse(json, "course listing")?;
    if let Some(pagination) = listing.pagination() {
        tracing::debug!(
            count = pagination.count,
            total_pages = pagination.total_pages,
            "Parsed paginated course listing"
        );
    }
    Ok(listing.into_items())
}

fn parse<T: serde::de::DeserializeOwned>(json: &str, kind: &'static str) -> Result<T, CatalogError> {
    serde_json::from_str(json).map_err(|source| CatalogError::Json { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_course_detail() {
        let json = r##"{
            "id": 1,
            "title": "Introduction to DSA",
            "description": "Overview of Data Structures and Algorithms",
            "creator": 5,
            "creator_username": "ada",
            "status": 3,
            "status_name": "Published",
            "created_at": "2025-01-01T00:00:00Z",
            "lesson_count": 1,
            "lessons": [
                {"id": 10, "title": "Arrays", "content": "# Arrays", "order": 1, "transcript": ""}
            ]
        }"##;
        let course = parse_course(json).unwrap();
        assert_eq!(course.status, Some(CourseStatus::Published));
        assert_eq!(course.status_label(), Some("Published"));
        assert_eq!(course.lessons.len(), 1);
        assert_eq!(course.lessons[0].body_text(), "# Arrays");
    }

    #[test]
    fn test_parse_lesson_with_string_id() {
        let lesson = parse_lesson(r#"{"id": "2", "title": "Lists", "body": "text"}"#).unwrap();
        assert_eq!(lesson.id, ResourceId::Text("2".to_owned()));
        assert_eq!(lesson.body_text(), "text");
    }

    #[test]
    fn test_parse_courses_paginated() {
        let json = r#"{
            "pagination": {"count": 1, "total_pages": 1, "next": null, "previous": null},
            "results": [{"id": 1, "title": "DSA"}]
        }"#;
        let courses = parse_courses(json).unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].description, "");
    }

    #[test]
    fn test_parse_error_names_kind() {
        let err = parse_lesson("{").unwrap_err();
        assert!(err.to_string().starts_with("Invalid lesson payload:"));
    }

    #[test]
    fn test_parse_courses_reports_unknown_status() {
        let err = parse_courses(r#"[{"id": 1, "title": "x", "status": 8}]"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid course listing payload:"));
        assert!(err.to_string().contains("unknown course status code 8"));
    }

    #[test]
    fn test_parse_courses_reports_missing_field() {
        let err = parse_courses(r#"{"results": [{"id": 1}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"));
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let err = parse_course(r#"{"id": 1, "title": "x", "status": 8}"#).unwrap_err();
        assert!(err.to_string().contains("unknown course status code 8"));
    }
}
