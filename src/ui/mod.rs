//! Console presentation: capability detection, styling, event rendering.

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod text;
pub mod theme;
