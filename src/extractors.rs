//! Custom extractors.

/// The application state as an axum extractor.
///
/// Handlers take this instead of spelling out `axum::extract::State<crate::State>`, which would
/// clash with the `State` name itself.
pub type AppState = axum::extract::State<crate::State>;
