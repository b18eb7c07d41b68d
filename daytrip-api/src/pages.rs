use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use daytrip_core::search::fallback_trip_date;
use serde_json::json;

use crate::error::AppError;
use crate::render;
use crate::search::today;
use crate::state::AppState;

/// Informational pages with fixed copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPage {
    HowItWorks,
    Pricing,
    Faq,
    About,
    Contact,
}

impl InfoPage {
    pub fn title(self) -> &'static str {
        match self {
            InfoPage::HowItWorks => "How it works",
            InfoPage::Pricing => "Pricing",
            InfoPage::Faq => "FAQ",
            InfoPage::About => "About",
            InfoPage::Contact => "Contact",
        }
    }

    fn body(self, brand_name: &str, email: &str) -> String {
        match self {
            InfoPage::HowItWorks => format!(
                "    <h1>How it works</h1>\n\
                 <ol>\n\
                 <li>Tell us where you start, where you want to spend the day and when.</li>\n\
                 <li>{name} pairs a morning outbound with an evening return on the same date.</li>\n\
                 <li>Filter by arrival and departure windows or a price ceiling, then book with the airline.</li>\n\
                 </ol>",
                name = render::escape(brand_name),
            ),
            InfoPage::Pricing => "    <h1>Pricing</h1>\n\
                 <p>Searching is free. Fares shown are the round-trip total per traveller; \
                 the airline's checkout is the final word on price.</p>"
                .to_string(),
            InfoPage::Faq => "    <h1>Frequently asked questions</h1>\n\
                 <h2>What counts as a morning arrival?</h2>\n\
                 <p>An outbound flight that lands by late morning local time.</p>\n\
                 <h2>What counts as an evening departure?</h2>\n\
                 <p>A return flight leaving from late afternoon onwards.</p>\n\
                 <h2>Can I book here?</h2>\n\
                 <p>No. Each result links out to a flight search where you can book.</p>"
                .to_string(),
            InfoPage::About => format!(
                "    <h1>About {name}</h1>\n\
                 <p>{name} is for people who want a whole day somewhere else and their own bed at night.</p>",
                name = render::escape(brand_name),
            ),
            InfoPage::Contact => format!(
                "    <h1>Contact</h1>\n\
                 <p>Questions, bugs or route ideas: <a href=\"mailto:{email}\">{email}</a></p>",
                email = render::escape(email),
            ),
        }
    }

    pub fn render(self, state: &AppState) -> Html<String> {
        let body = self.body(&state.brand.name, &state.brand.email);
        Html(render::layout(&state.brand, self.title(), &body))
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/how-it-works", get(|State(state): State<AppState>| async move { InfoPage::HowItWorks.render(&state) }))
        .route("/pricing", get(|State(state): State<AppState>| async move { InfoPage::Pricing.render(&state) }))
        .route("/faq", get(|State(state): State<AppState>| async move { InfoPage::Faq.render(&state) }))
        .route("/about", get(|State(state): State<AppState>| async move { InfoPage::About.render(&state) }))
        .route("/contact", get(|State(state): State<AppState>| async move { InfoPage::Contact.render(&state) }))
        .route("/healthz", get(health))
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render::index_page(&state.brand, fallback_trip_date(today())))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// JSON 404 under `/api`, the HTML page everywhere else.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return AppError::NotFoundError(format!("No route for {}", uri.path())).into_response();
    }
    (StatusCode::NOT_FOUND, Html(render::not_found_page(&state.brand))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::BrandConfig;
    use daytrip_core::SearchConfig;

    #[test]
    fn test_info_pages_carry_brand() {
        let state = AppState::new(
            SearchConfig::default(),
            BrandConfig { email: "team@example.com".to_string(), ..Default::default() },
        );

        let Html(contact) = InfoPage::Contact.render(&state);
        assert!(contact.contains("mailto:team@example.com"));

        let Html(about) = InfoPage::About.render(&state);
        assert!(about.contains("About Daytrippr"));

        for page in [InfoPage::HowItWorks, InfoPage::Pricing, InfoPage::Faq] {
            let Html(html) = page.render(&state);
            assert!(html.contains(&format!("<title>{} · Daytrippr</title>", page.title())));
        }
    }
}
