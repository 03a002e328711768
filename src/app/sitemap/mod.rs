use askama::Template;
use axum::{extract::State, response::IntoResponse, routing::get, Router};

use super::AppState;

/// Page sections listed in the sitemap: fragment, change frequency and priority.
const SECTIONS: [(&str, &str, &str); 7] = [
    ("", "weekly", "1.0"),
    ("#about", "monthly", "0.8"),
    ("#skills", "monthly", "0.9"),
    ("#experience", "monthly", "0.9"),
    ("#projects", "weekly", "0.9"),
    ("#education", "monthly", "0.7"),
    ("#contact", "monthly", "0.8"),
];

pub fn router() -> Router<AppState> {
    Router::new().route("/sitemap.xml", get(sitemap))
}

struct SitemapEntry {
    loc: String,
    change_frequency: &'static str,
    priority: &'static str,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate {
    entries: Vec<SitemapEntry>,
    last_modified: String,
}

fn entries(base_url: &str) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');

    SECTIONS
        .iter()
        .map(|&(fragment, change_frequency, priority)| SitemapEntry {
            loc: if fragment.is_empty() {
                base_url.to_owned()
            } else {
                format!("{}/{}", base_url, fragment)
            },
            change_frequency,
            priority,
        })
        .collect()
}

#[tracing::instrument(name = "Sitemap", skip(state))]
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    SitemapTemplate {
        entries: entries(&state.base_url),
        last_modified: chrono::Utc::now().format("%Y-%m-%d").to_string(),
    }
}
