//! CLI command implementations.

pub(crate) mod catalog;
pub(crate) mod content;

pub(crate) use catalog::{CourseArgs, CoursesArgs, LessonArgs};
pub(crate) use content::{ExcerptArgs, RenderArgs};
