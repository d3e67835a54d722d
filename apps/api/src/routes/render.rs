//! Axum route handlers for the Render API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::{PersonalInfo, ResumeData};
use crate::render::{standalone_page, to_html};
use crate::state::AppState;
use crate::templates::{ResumeTemplate, Section};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Wrap the fragment in a full HTML document.
    #[serde(default)]
    pub standalone: bool,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub template: &'static str,
    pub visible_sections: Vec<Section>,
    pub html: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    Json(TemplateListResponse {
        templates: state.templates.names(),
    })
}

/// POST /api/v1/render/:template
///
/// Renders the posted resume record and returns the HTML fragment,
/// or a full page when `?standalone=true`.
pub async fn handle_render(
    State(state): State<AppState>,
    Path(name): Path<String>,
    query: Result<Query<RenderQuery>, QueryRejection>,
    body: Result<Json<ResumeData>, JsonRejection>,
) -> Result<Html<String>, AppError> {
    let template = lookup(&state, &name)?;
    let Query(query) = query.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let data = decode(body)?;

    let tree = template.render(&data);
    let html = if query.standalone {
        standalone_page(&page_title(&data.personal_info), &tree)
    } else {
        to_html(&tree)
    };

    debug!(
        template = template.name(),
        standalone = query.standalone,
        bytes = html.len(),
        "Rendered resume"
    );
    Ok(Html(html))
}

/// POST /api/v1/render/:template/preview
///
/// Same rendering as `handle_render`, plus the list of sections the layout shows.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<ResumeData>, JsonRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    let template = lookup(&state, &name)?;
    let data = decode(body)?;

    let visible_sections = template.visible_sections(&data);
    let html = to_html(&template.render(&data));

    debug!(
        template = template.name(),
        sections = visible_sections.len(),
        "Rendered resume preview"
    );
    Ok(Json(PreviewResponse {
        template: template.name(),
        visible_sections,
        html,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn lookup<'a>(state: &'a AppState, name: &str) -> Result<&'a dyn ResumeTemplate, AppError> {
    state.templates.get(name).ok_or_else(|| {
        AppError::NotFound(format!(
            "Template '{name}' not found (available: {})",
            state.templates.names().join(", ")
        ))
    })
}

fn decode(body: Result<Json<ResumeData>, JsonRejection>) -> Result<ResumeData, AppError> {
    body.map(|Json(data)| data).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::Validation(rejection.body_text())
        }
    })
}

/// "First Last - Resume", or just "Resume" when no name was given.
fn page_title(info: &PersonalInfo) -> String {
    let name = info.full_name();
    let name = name.trim();
    if name.is_empty() {
        "Resume".to_string()
    } else {
        format!("{name} - Resume")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        let mut info = PersonalInfo {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            ..Default::default()
        };
        assert_eq!(page_title(&info), "Jane Doe - Resume");

        info.last_name.clear();
        assert_eq!(page_title(&info), "Jane - Resume");

        info.first_name.clear();
        assert_eq!(page_title(&info), "Resume");
    }
}
