/// State management module
///
/// This module handles all application state, including:
/// - The user records fetched from the directory API (data.rs)
/// - Filter state and the pure derived-view computation (view.rs)

pub mod data;
pub mod view;
