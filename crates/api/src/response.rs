//! The `{ "data": ... }` success envelope.
//!
//! Handlers either wrap a plain record with [`DataResponse::new`] or, for
//! resources that carry personal data, go through [`DataResponse::render`] /
//! [`DataResponse::render_all`] so the payload is projected by its view before
//! it is wrapped. Either way the result is returned directly as a response.

use axum::response::{IntoResponse, Response};
use axum::Json;
use campus_core::view::{ViewRecord, ViewSpec};
use serde::Serialize;

use crate::error::AppResult;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl DataResponse<ViewRecord> {
    /// Project one entity through `view`.
    pub fn render<E: Serialize>(view: &ViewSpec, entity: &E) -> AppResult<Self> {
        Ok(Self::new(view.render(entity)?))
    }
}

impl DataResponse<Vec<ViewRecord>> {
    /// Project every entity through `view`, keeping their order.
    pub fn render_all<E: Serialize>(view: &ViewSpec, entities: &[E]) -> AppResult<Self> {
        Ok(Self::new(view.render_all(entities)?))
    }
}

impl<T: Serialize> IntoResponse for DataResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
