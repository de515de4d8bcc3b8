//! Course and lesson payloads as served by the REST API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a course or lesson.
///
/// The API uses integer keys, but fixtures and some proxies hand out strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Review state of a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CourseStatus {
    Draft,
    PendingReview,
    Published,
    Rejected,
}

impl CourseStatus {
    /// Human-readable name shown in listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::PendingReview => "Pending Review",
            Self::Published => "Published",
            Self::Rejected => "Rejected",
        }
    }
}

/// Status code outside the known range.
#[derive(Debug, thiserror::Error)]
#[error("unknown course status code {0}")]
pub struct UnknownStatus(pub u8);

impl TryFrom<u8> for CourseStatus {
    type Error = UnknownStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Draft),
            2 => Ok(Self::PendingReview),
            3 => Ok(Self::Published),
            4 => Ok(Self::Rejected),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl From<CourseStatus> for u8 {
    fn from(status: CourseStatus) -> Self {
        match status {
            CourseStatus::Draft => 1,
            CourseStatus::PendingReview => 2,
            CourseStatus::Published => 3,
            CourseStatus::Rejected => 4,
        }
    }
}

/// A single lesson within a course.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: ResourceId,
    pub title: String,
    /// Primary body field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Legacy body field, consulted when `content` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Position within the course, assigned server-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

impl Lesson {
    /// Body text to display: `content`, then `body`, then empty.
    ///
    /// Empty strings count as missing.
    #[must_use]
    pub fn body_text(&self) -> &str {
        [self.content.as_deref(), self.body.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.is_empty())
            .unwrap_or("")
    }
}

/// A course, optionally with its lessons embedded (detail payloads).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
    /// Server-provided status label; preferred over [`CourseStatus::label`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Lessons in display order. Lessons without an order go last, otherwise
    /// payload order is kept.
    #[must_use]
    pub fn ordered_lessons(&self) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self.lessons.iter().collect();
        lessons.sort_by_key(|lesson| (lesson.order.is_none(), lesson.order));
        lessons
    }

    /// Status label, from the server when present.
    #[must_use]
    pub fn status_label(&self) -> Option<&str> {
        self.status_name
            .as_deref()
            .or_else(|| self.status.map(CourseStatus::label))
    }

    /// Number of lessons, from the server when present.
    #[must_use]
    pub fn lesson_total(&self) -> usize {
        self.lesson_count.unwrap_or(self.lessons.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lesson(id: u64, order: Option<u32>) -> Lesson {
        Lesson {
            id: ResourceId::Number(id),
            title: format!("Lesson {id}"),
            content: None,
            body: None,
            summary: None,
            order,
            transcript: None,
        }
    }

    #[test]
    fn test_resource_id_display() {
        assert_eq!(ResourceId::Number(7).to_string(), "7");
        assert_eq!(ResourceId::Text("abc".to_owned()).to_string(), "abc");
    }

    #[test]
    fn test_resource_id_accepts_number_or_string() {
        let n: ResourceId = serde_json::from_str("12").unwrap();
        let s: ResourceId = serde_json::from_str(r#""12""#).unwrap();
        assert_eq!(n, ResourceId::Number(12));
        assert_eq!(s, ResourceId::Text("12".to_owned()));
    }

    #[test]
    fn test_course_status_codes() {
        let status: CourseStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, CourseStatus::PendingReview);
        assert_eq!(status.label(), "Pending Review");
        assert_eq!(serde_json::to_string(&CourseStatus::Published).unwrap(), "3");
    }

    #[test]
    fn test_course_status_unknown_code_rejected() {
        assert!(serde_json::from_str::<CourseStatus>("9").is_err());
    }

    #[test]
    fn test_body_text_prefers_content() {
        let mut l = lesson(1, None);
        l.content = Some("primary".to_owned());
        l.body = Some("legacy".to_owned());
        assert_eq!(l.body_text(), "primary");
    }

    #[test]
    fn test_body_text_falls_back_on_empty_content() {
        let mut l = lesson(1, None);
        l.content = Some(String::new());
        l.body = Some("legacy".to_owned());
        assert_eq!(l.body_text(), "legacy");
    }

    #[test]
    fn test_body_text_missing() {
        assert_eq!(lesson(1, None).body_text(), "");
    }

    #[test]
    fn test_ordered_lessons() {
        let course = Course {
            id: ResourceId::Number(1),
            title: "DSA".to_owned(),
            description: String::new(),
            creator_username: None,
            status: None,
            status_name: None,
            lesson_count: None,
            lessons: vec![lesson(1, None), lesson(2, Some(3)), lesson(3, Some(1)), lesson(4, None)],
        };
        let ids: Vec<String> = course
            .ordered_lessons()
            .iter()
            .map(|l| l.id.to_string())
            .collect();
        assert_eq!(ids, ["3", "2", "1", "4"]);
        assert_eq!(course.lesson_total(), 4);
        assert_eq!(course.status_label(), None);
    }
}
