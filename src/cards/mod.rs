mod catalog;

use axum::{Json, debug_handler, extract::{Path, Query}, routing::get, Router};
use serde::{Deserialize, Serialize};

use crate::AppState;

pub use catalog::{CATALOG, FANCY_FONTS};

pub const OWNER_FONT: &str = "\"Inter\", \"Segoe UI\", Arial, sans-serif";

const IMAGE_OVERLAY: &str = "linear-gradient(120deg,rgba(0,0,0,0.25),rgba(0,0,0,0.15))";

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "css", rename_all = "camelCase")]
pub enum Background {
    Solid(&'static str),
    Gradient(&'static str),
    Pattern(&'static str),
    Image(&'static str),
}

#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub background: Background,
    pub text_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<&'static str>,
}

impl TemplateSpec {
    pub fn overlay(&self) -> Option<&'static str> {
        matches!(self.background, Background::Image(_)).then_some(IMAGE_OVERLAY)
    }
}

// Total for any input. Stored ids are never validated against the catalog,
// so an id that matches nothing degrades to the default entry.
pub fn resolve(template_id: &str) -> &'static TemplateSpec {
    CATALOG
        .iter()
        .find(|template| template.id == template_id)
        .unwrap_or(&CATALOG[0])
}

// Public-view cosmetic rule: the font is keyed off the id length, not the
// catalog entry, so every visitor sees the same face for the same card.
pub fn public_font(template_id: &str) -> &'static str {
    FANCY_FONTS[(template_id.chars().count() * 3) % FANCY_FONTS.len()]
}

pub fn context_font(template_id: &str, public_view: bool) -> &'static str {
    if public_view {
        public_font(template_id)
    } else {
        OWNER_FONT
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTarget {
    pub content: String,
    pub template_id: String,
    pub spec: &'static TemplateSpec,
    pub font_family: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<&'static str>,
}

pub fn render_target(content: &str, template_id: &str, public_view: bool) -> RenderTarget {
    let spec = resolve(template_id);

    RenderTarget {
        content: content.to_owned(),
        template_id: template_id.to_owned(),
        spec,
        font_family: context_font(template_id, public_view),
        overlay: spec.overlay(),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_templates))
        .route("/{id}", get(template))
}

#[debug_handler]
async fn list_templates() -> Json<&'static [TemplateSpec]> {
    Json(&CATALOG[..])
}

#[derive(Deserialize)]
pub(crate) struct TemplateQuery {
    #[serde(default)]
    pub(crate) public: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TemplateView {
    spec: &'static TemplateSpec,
    font_family: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlay: Option<&'static str>,
}

#[debug_handler]
async fn template(
    Path(id): Path<String>,
    Query(TemplateQuery { public }): Query<TemplateQuery>,
) -> Json<TemplateView> {
    let spec = resolve(&id);

    Json(TemplateView {
        spec,
        font_family: context_font(&id, public),
        overlay: spec.overlay(),
    })
}
