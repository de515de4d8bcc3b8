//! `lms lesson`, `lms course` and `lms courses` command implementations.

use std::path::{Path, PathBuf};

use clap::Args;
use lms_catalog::{
    CourseSummary, CourseView, LessonView, parse_course, parse_courses, parse_lesson,
};
use lms_config::{CliSettings, Config};

use crate::error::CliError;
use crate::input::read_input;
use crate::output::Output;

/// Arguments for the lesson command.
#[derive(Args)]
pub(crate) struct LessonArgs {
    /// Lesson JSON payload (default: stdin).
    file: Option<PathBuf>,
}

impl LessonArgs {
    /// Execute the lesson command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let html = lesson_html(&read_input(self.file.as_deref())?)?;
        Output::new().emit(&html)
    }
}

/// Arguments for the course command.
#[derive(Args)]
pub(crate) struct CourseArgs {
    /// Course detail JSON payload (default: stdin).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover lms.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print compact JSON.
    #[arg(long)]
    compact: bool,
}

impl CourseArgs {
    /// Execute the course command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref(), None, self.compact)?;
        let course = parse_course(&read_input(self.file.as_deref())?)?;
        let view = CourseView::from_course(&course);
        tracing::debug!(course = %view.id, lessons = view.lessons.len(), "Rendered course");
        Output::new().emit_json(&view, config.output.pretty)
    }
}

/// Arguments for the courses command.
#[derive(Args)]
pub(crate) struct CoursesArgs {
    /// Course listing JSON, bare array or paginated (default: stdin).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover lms.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum description preview length (overrides config).
    #[arg(short, long)]
    max_len: Option<usize>,

    /// Print compact JSON.
    #[arg(long)]
    compact: bool,
}

impl CoursesArgs {
    /// Execute the courses command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref(), self.max_len, self.compact)?;
        let summaries =
            course_summaries(&read_input(self.file.as_deref())?, config.excerpt.max_len)?;
        Output::new().emit_json(&summaries, config.output.pretty)
    }
}

fn load_config(
    config_path: Option<&Path>,
    max_len: Option<usize>,
    compact: bool,
) -> Result<Config, CliError> {
    let settings = CliSettings {
        max_len,
        pretty: compact.then_some(false),
    };
    Ok(Config::load(config_path, Some(&settings))?)
}

/// Rendered HTML for a lesson payload.
fn lesson_html(json: &str) -> Result<String, CliError> {
    let lesson = parse_lesson(json)?;
    Ok(LessonView::from_lesson(&lesson).html)
}

/// Listing summaries for a course listing payload.
fn course_summaries(json: &str, max_len: usize) -> Result<Vec<CourseSummary>, CliError> {
    let courses = parse_courses(json)?;
    tracing::debug!(count = courses.len(), "Summarizing courses");
    Ok(courses
        .iter()
        .map(|course| CourseSummary::from_course(course, max_len))
        .collect())
}
