//! Render de páginas
//!
//! Convierte la página del shell en texto para terminal o en JSON.

pub mod text;

use crate::config::OutputFormat;
use crate::dto::ShellPage;
use crate::utils::errors::AppResult;

pub fn render(page: &ShellPage, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(page.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(page)?),
    }
}
