//! Static landing page

use axum::{response::Html, routing::get, Router};

/// GET /
async fn home() -> Html<&'static str> {
    Html("<h1>User orders</h1>")
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(home))
}
