//! Use-case services over the catalogs.

pub mod catalog_service;
pub mod comparison;
