//! Storefront host: configuration, effect execution and the single-owner event loop.
pub mod platform;
