//! Minimal panel widgets
//!
//! Just enough UI for the scanner's settings strip: a [`Panel`] that
//! stacks a [`Button`] and a [`Toggle`] under a title bar. Widgets take
//! raw mouse positions and turn them into app-level edges; drawing goes
//! through the plinth_render canvas.

mod button;
mod panel;
mod toggle;
mod widget;

pub use button::Button;
pub use panel::Panel;
pub use toggle::Toggle;
pub use widget::Widget;
