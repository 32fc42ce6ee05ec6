//! Output adapters. They only format a [`crate::model::CatalogReport`];
//! no unlock logic lives here.
pub mod json;
pub mod text;
