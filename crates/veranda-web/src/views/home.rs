//! Home page view.

use axum::response::Html;

/// Render the landing page.
pub(crate) async fn hello_world() -> Html<&'static str> {
    Html("<body><h1>Hello World!</h1></body>")
}
