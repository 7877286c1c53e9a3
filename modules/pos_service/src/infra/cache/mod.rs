//! Cache adapters

pub mod moka;

pub use self::moka::MokaCacheLayer;
