//! Server-side HTML views.
//!
//! Templates are compiled into the binary and parsed once at startup.
//! Autoescaping is on for every `.html` template.

use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, Html, IntoResponse, Response};
use enrollment_core::flash::Flash;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::AppResult;
use crate::middleware::flash::{consumed_flash_cookie, IncomingFlash};
use crate::state::AppState;

pub const PORTAL: &str = "portal.html";
pub const REGISTRATION: &str = "registration.html";
pub const RESULT: &str = "result.html";
pub const ADMIN: &str = "admin.html";
pub const MESSAGE: &str = "message.html";

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../templates/base.html")),
    (PORTAL, include_str!("../templates/portal.html")),
    (REGISTRATION, include_str!("../templates/registration.html")),
    (RESULT, include_str!("../templates/result.html")),
    (ADMIN, include_str!("../templates/admin.html")),
    (MESSAGE, include_str!("../templates/message.html")),
];

/// Parse every embedded template.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())?;
    Ok(tera)
}

#[derive(Debug, Serialize)]
struct FlashView {
    message: &'static str,
    is_error: bool,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        FlashView {
            message: flash.message(),
            is_error: flash.is_error(),
        }
    }
}

/// Render `template` with `context`, showing and consuming any pending flash.
pub fn render_page(
    state: &AppState,
    template: &str,
    mut context: Context,
    flash: IncomingFlash,
) -> AppResult<Response> {
    if let Some(flash) = flash.0 {
        context.insert("flash", &FlashView::from(flash));
    }

    let html = state.templates.render(template, &context)?;

    Ok(match flash.0 {
        Some(_) => (AppendHeaders([(SET_COOKIE, consumed_flash_cookie())]), Html(html)).into_response(),
        None => Html(html).into_response(),
    })
}

/// Standalone title + message page.
pub fn render_message(state: &AppState, title: &str, message: &str) -> AppResult<Html<String>> {
    let mut context = Context::new();
    context.insert("title", title);
    context.insert("message", message);
    Ok(Html(state.templates.render(MESSAGE, &context)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_templates_parse() {
        let tera = build_templates().expect("templates should parse");
        let names: Vec<_> = tera.get_template_names().collect();
        assert_eq!(names.len(), TEMPLATES.len());
    }

    #[test]
    fn portal_renders_flash() {
        let tera = build_templates().unwrap();
        let mut context = Context::new();
        context.insert("flash", &FlashView::from(Flash::WrongPassword));
        let html = tera.render(PORTAL, &context).unwrap();
        assert!(html.contains("Senha incorreta."));
        assert!(html.contains("alert-error"));
    }

    #[test]
    fn portal_renders_without_flash() {
        let tera = build_templates().unwrap();
        let html = tera.render(PORTAL, &Context::new()).unwrap();
        assert!(!html.contains("class=\"alert"));
    }

    #[test]
    fn message_page_escapes_input() {
        let tera = build_templates().unwrap();
        let mut context = Context::new();
        context.insert("title", "Aviso");
        context.insert("message", "<script>alert(1)</script>");
        let html = tera.render(MESSAGE, &context).unwrap();
        assert!(!html.contains("<script>alert(1)"));
    }
}
