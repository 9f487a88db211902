//! Sanctum course viewer entry point.
//!
//! Loads the course named by `COURSE_PATH`, validates it, and prints one
//! lesson's widget tree as JSON on stdout. Logs go to stderr.

use std::error::Error;

use sanctum_content::application::loader::load_course;
use sanctum_viewer::config::ViewerConfig;
use sanctum_viewer::page::{build_page, check_content};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!("Starting Sanctum course viewer");

    // Read configuration from environment.
    let config = ViewerConfig::from_env()?;

    let course = load_course(&config.course_path)?;
    check_content(&course, config.strict)?;

    let page = build_page(&course, config.lesson_id.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
