//! GET /: the chat page.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serves the embedded single-page chat UI. Independent of answerer health.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn page_posts_to_ask() {
        let Html(body) = home().await;
        assert!(body.contains("<html"));
        assert!(body.contains("/ask"));
        assert!(body.contains("\"message\""));
    }
}
