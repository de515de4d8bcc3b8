//! LMS CLI - course content tools.
//!
//! Provides commands for:
//! - `render`: Render lesson markup to HTML
//! - `excerpt`: Build a plain-text preview
//! - `lesson`: Render a lesson JSON payload
//! - `course`: Render a course detail payload with its lessons
//! - `courses`: Summarize a course listing

mod commands;
mod error;
mod input;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CourseArgs, CoursesArgs, ExcerptArgs, LessonArgs, RenderArgs};
use output::Output;

/// LMS - course content tools.
#[derive(Parser)]
#[command(name = "lms", version, about)]
struct Cli {
    /// Enable verbose output (debug logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render markup (file or stdin) to HTML.
    Render(RenderArgs),
    /// Print a plain-text preview of content.
    Excerpt(ExcerptArgs),
    /// Render the body of a lesson JSON payload.
    Lesson(LessonArgs),
    /// Render a course detail JSON payload.
    Course(CourseArgs),
    /// Summarize a course listing as JSON.
    Courses(CoursesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Excerpt(args) => args.execute(),
        Commands::Lesson(args) => args.execute(),
        Commands::Course(args) => args.execute(),
        Commands::Courses(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
