//! Application layer for kui-settings.
//!
//! Knows *what* the rest of the console needs from the bound settings and
//! produces it from a [`kui_core::UiSettings`] without touching files, sockets
//! or the environment.

pub mod render;

pub use render::{render, render_json, render_properties, OutputFormat};
