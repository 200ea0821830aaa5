//! Widgets for the grid viewer.

pub mod grid_view;
pub mod help_menu;
pub mod interactive_widget;
pub mod status_bar;
pub mod theme;

pub use crossterm::event::KeyEvent;
pub use interactive_widget::InteractiveStatefulWidget;
