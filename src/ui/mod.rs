//! Terminal adapter: the interaction controller, the ratatui renderer, and
//! the event loop that ties view descriptions to the screen.

mod app;
mod render;
mod theme;

pub use app::{run, App, FocusRegion};
pub use theme::Theme;
