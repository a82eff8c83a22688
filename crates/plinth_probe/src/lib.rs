//! Host probing for the system-scanner dashboard
//!
//! Each probe produces a short list of human-readable status lines,
//! always starting with its category label and ending with a `Status:`
//! line. The slower reads (sysinfo, the TCP reachability check) run on
//! a dedicated [`worker::ProbeWorker`] thread; the render thread only
//! polls for finished [`report::ScanUpdate`]s.
//!
//! ## Key Components
//!
//! - [`mask::ScanMask`] - which sections a scan request covers
//! - [`report::SystemReport`] - the merged per-section line lists
//! - [`audio`] / [`cpu`] / [`graphics`] / [`network`] - the probes
//! - [`worker::ProbeWorker`] - background thread + channels
//! - [`timer::ScanTimer`] - interval timer driving auto-refresh

pub mod audio;
pub mod cpu;
pub mod graphics;
pub mod mask;
pub mod network;
pub mod report;
pub mod timer;
pub mod worker;

pub use graphics::GraphicsSnapshot;
pub use mask::ScanMask;
pub use network::{NetworkStatus, ProbeTarget};
pub use report::{ScanUpdate, SystemReport};
pub use timer::ScanTimer;
pub use worker::ProbeWorker;
