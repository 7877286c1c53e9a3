//! Infrastructure adapters: database storage, cache and image files

pub mod cache;
pub mod images;
pub mod storage;
