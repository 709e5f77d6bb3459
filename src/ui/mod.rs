// Terminal UI module using ratatui

mod app;
mod detail;
mod widgets;

pub use app::{Action, App, Tab};
pub use detail::DetailView;
