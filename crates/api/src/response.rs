//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; catalogue pages add
//! a `meta` block carrying the page title and category selection.

use serde::Serialize;

use crate::meta::PageMeta;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Catalogue response envelope: `{ "meta": ..., "data": ... }`.
#[derive(Debug, Serialize)]
pub struct MetaResponse<T: Serialize> {
    pub meta: PageMeta,
    pub data: T,
}
