use axum::response::Html;

/// Landing page body served at `/`.
pub const WELCOME_HTML: &str =
    "<h3>Welcome to the Game Backlog!</h3><a href=\"backlog\">Open Game Backlog</a><br>";

/// File name of the backlog UI inside the static directory.
pub const BACKLOG_PAGE: &str = "game-CRUD.html";

/// GET /
pub async fn welcome() -> Html<&'static str> {
    Html(WELCOME_HTML)
}
