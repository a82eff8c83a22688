//! Graphics adapter probe
//!
//! The adapter and monitor readings are main-thread data (the renderer
//! and winit own them), so the app captures a [`GraphicsSnapshot`] once
//! at startup and hands it to the worker with each scan request; the
//! worker only formats it.

/// Adapter and display info captured on the main thread
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphicsSnapshot {
    /// Adapter name, e.g. "NVIDIA GeForce RTX 3070"
    pub renderer: String,
    /// Graphics backend, e.g. "Vulkan"
    pub backend: String,
    /// Driver description; may be empty on some platforms
    pub driver: String,
    /// Current monitor resolution in physical pixels
    pub screen: Option<(u32, u32)>,
}

/// Format a snapshot into dashboard lines
///
/// The list starts with the `Graphics:` label and ends with a
/// `Status:` line. Empty readings fall back to placeholders.
pub fn report(snapshot: &GraphicsSnapshot) -> Vec<String> {
    let mut lines = vec!["Graphics:".to_string()];

    if snapshot.renderer.is_empty() {
        lines.push("Renderer: Unknown".to_string());
    } else {
        lines.push(format!("Renderer: {}", snapshot.renderer));
    }

    if !snapshot.backend.is_empty() {
        lines.push(format!("Backend: {}", snapshot.backend));
    }
    if !snapshot.driver.is_empty() {
        lines.push(format!("Driver: {}", snapshot.driver));
    }

    match snapshot.screen {
        Some((w, h)) => lines.push(format!("Screen: {}x{}", w, h)),
        None => lines.push("Screen: Unknown".to_string()),
    }

    lines.push("Status: Active".to_string());
    lines
}
