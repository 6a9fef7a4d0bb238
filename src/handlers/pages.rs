use axum::response::Html;

static INDEX_HTML: &str = include_str!("../web/index.html");

// GET / and GET /reservas
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
