use axum::routing::get;
use axum::Router;

use crate::handlers::address;
use crate::state::AppState;

/// Routes mounted at `/addresses`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(address::list).post(address::create))
        .route(
            "/{id}",
            get(address::get_by_id)
                .put(address::update)
                .delete(address::delete),
        )
}
