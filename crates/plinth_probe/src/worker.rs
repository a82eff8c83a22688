//! Background probe worker
//!
//! The worker owns a dedicated thread that runs the requested probes
//! and sends a [`ScanUpdate`] back over a channel. Requests and polls
//! are both non-blocking, so the render thread never waits on sysinfo
//! or the TCP reachability check.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

use crate::graphics::{self, GraphicsSnapshot};
use crate::mask::ScanMask;
use crate::network::{self, ProbeTarget};
use crate::report::ScanUpdate;
use crate::{audio, cpu};

/// Request for one scan pass
struct ScanRequest {
    mask: ScanMask,
    /// Main-thread adapter/monitor data for the graphics section
    graphics: Option<GraphicsSnapshot>,
}

/// Background worker thread running the probes
///
/// Use [`request`](ProbeWorker::request) to submit a scan and
/// [`poll`](ProbeWorker::poll) or [`poll_all`](ProbeWorker::poll_all)
/// from the frame loop to collect finished updates. If the worker
/// thread dies, requests and polls degrade to no-ops.
pub struct ProbeWorker {
    sender: Sender<ScanRequest>,
    receiver: Receiver<ScanUpdate>,
}

impl ProbeWorker {
    /// Spawn the worker thread
    ///
    /// The reachability target is fixed for the worker's lifetime.
    pub fn new(target: ProbeTarget) -> Self {
        let (request_tx, request_rx) = channel::<ScanRequest>();
        let (result_tx, result_rx) = channel::<ScanUpdate>();

        let builder = thread::Builder::new().name("probe-worker".to_string());
        let spawned = builder.spawn(move || {
            // Worker loop: run probes until the request channel closes
            while let Ok(request) = request_rx.recv() {
                let update = run_scan(&request, &target);
                // If the receiver is dropped, we stop
                if result_tx.send(update).is_err() {
                    break;
                }
            }
        });
        if let Err(e) = spawned {
            log::warn!("Failed to spawn probe worker: {}", e);
        }

        Self {
            sender: request_tx,
            receiver: result_rx,
        }
    }

    /// Submit a scan request (non-blocking)
    ///
    /// `graphics` is required for the GRAPHICS section; without a
    /// snapshot that section is skipped.
    pub fn request(&self, mask: ScanMask, graphics: Option<GraphicsSnapshot>) {
        let request = ScanRequest { mask, graphics };
        if self.sender.send(request).is_err() {
            log::warn!("Probe worker is gone; scan request dropped");
        }
    }

    /// Check for a finished scan (non-blocking)
    pub fn poll(&self) -> Option<ScanUpdate> {
        match self.receiver.try_recv() {
            Ok(update) => Some(update),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Collect all finished scans (non-blocking)
    pub fn poll_all(&self) -> Vec<ScanUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = self.receiver.try_recv() {
            updates.push(update);
        }
        updates
    }
}

impl Default for ProbeWorker {
    fn default() -> Self {
        Self::new(ProbeTarget::default())
    }
}

/// Run the probes a request asks for
fn run_scan(request: &ScanRequest, target: &ProbeTarget) -> ScanUpdate {
    let mut update = ScanUpdate::default();
    if request.mask.contains(ScanMask::AUDIO) {
        update.audio = Some(audio::scan());
    }
    if request.mask.contains(ScanMask::GRAPHICS) {
        if let Some(snapshot) = &request.graphics {
            update.graphics = Some(graphics::report(snapshot));
        }
    }
    if request.mask.contains(ScanMask::CPU) {
        update.cpu = Some(cpu::scan());
    }
    if request.mask.contains(ScanMask::NETWORK) {
        update.network = Some(network::check(target));
    }
    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn unreachable_target() -> ProbeTarget {
        ProbeTarget {
            host: "host.invalid".to_string(),
            port: 80,
            timeout: Duration::from_millis(200),
        }
    }

    #[test]
    fn test_poll_returns_none_when_empty() {
        let worker = ProbeWorker::new(unreachable_target());
        assert!(worker.poll().is_none());
        assert!(worker.poll_all().is_empty());
    }

    #[test]
    fn test_cpu_only_scan() {
        let worker = ProbeWorker::new(unreachable_target());
        worker.request(ScanMask::CPU, None);

        // Wait a bit for the worker to process
        std::thread::sleep(Duration::from_millis(500));

        let update = worker.poll().expect("scan should have finished");
        assert!(update.cpu.is_some());
        assert!(update.audio.is_none());
        assert!(update.graphics.is_none());
        assert!(update.network.is_none());
        assert_eq!(update.cpu.unwrap()[0], "CPU Info:");
    }

    #[test]
    fn test_graphics_needs_snapshot() {
        let worker = ProbeWorker::new(unreachable_target());
        worker.request(ScanMask::GRAPHICS, None);
        std::thread::sleep(Duration::from_millis(300));

        let update = worker.poll().expect("scan should have finished");
        // No snapshot, no graphics section
        assert!(update.graphics.is_none());
    }

    #[test]
    fn test_full_scan_with_snapshot() {
        let worker = ProbeWorker::new(unreachable_target());
        let snapshot = GraphicsSnapshot {
            renderer: "Test GPU".to_string(),
            backend: "Vulkan".to_string(),
            driver: String::new(),
            screen: Some((800, 600)),
        };
        worker.request(ScanMask::ALL, Some(snapshot));

        // The network probe may take up to its timeout
        std::thread::sleep(Duration::from_millis(800));

        let update = worker.poll().expect("scan should have finished");
        assert!(update.is_full());
        let network = update.network.unwrap();
        assert!(!network.connected);
    }

    #[test]
    fn test_multiple_requests_all_answered() {
        let worker = ProbeWorker::new(unreachable_target());
        worker.request(ScanMask::CPU, None);
        worker.request(ScanMask::AUDIO, None);
        worker.request(ScanMask::CPU, None);

        std::thread::sleep(Duration::from_millis(800));

        let updates = worker.poll_all();
        assert_eq!(updates.len(), 3);
    }
}
