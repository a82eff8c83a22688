//! plinth - interactive-installation demo apps and toolkit
//!
//! Two small demo applications built on the plinth crates:
//!
//! - `pulse` - a pulsing-circle sketch with mouse/keyboard reactive
//!   background color
//! - `scanner` - a 12-cell system dashboard polling coarse host info
//!   (audio, graphics adapter, CPU/RAM, internet reachability) on a
//!   timer
//!
//! The shared toolkit lives in the workspace crates: `plinth_math`
//! (screen-space primitives and the grid layout), `plinth_render`
//! (wgpu context + immediate-mode 2D canvas), `plinth_probe` (host
//! probes and the background scan worker), and `plinth_ui` (panel
//! widgets).

pub mod config;

pub use config::AppConfig;
