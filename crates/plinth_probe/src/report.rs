//! Merged scan results

use crate::network::NetworkStatus;

/// The latest reading for every dashboard section
///
/// Section lists are only ever replaced wholesale by a finished scan;
/// a populated list always starts with its category label.
#[derive(Clone, Debug, Default)]
pub struct SystemReport {
    pub audio: Vec<String>,
    pub graphics: Vec<String>,
    pub cpu: Vec<String>,
    pub network: Vec<String>,
    pub internet_connected: bool,
}

impl SystemReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sections a finished scan covered
    pub fn apply(&mut self, update: ScanUpdate) {
        if let Some(audio) = update.audio {
            self.audio = audio;
        }
        if let Some(graphics) = update.graphics {
            self.graphics = graphics;
        }
        if let Some(cpu) = update.cpu {
            self.cpu = cpu;
        }
        if let Some(network) = update.network {
            self.network = network.lines;
            self.internet_connected = network.connected;
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "audio: {} lines, graphics: {} lines, cpu: {} lines, network: {} lines, internet: {}",
            self.audio.len(),
            self.graphics.len(),
            self.cpu.len(),
            self.network.len(),
            if self.internet_connected { "connected" } else { "offline" },
        )
    }
}

/// Result of one scan request; only the requested sections are present
#[derive(Clone, Debug, Default)]
pub struct ScanUpdate {
    pub audio: Option<Vec<String>>,
    pub graphics: Option<Vec<String>>,
    pub cpu: Option<Vec<String>>,
    pub network: Option<NetworkStatus>,
}

impl ScanUpdate {
    /// True when every section was scanned
    pub fn is_full(&self) -> bool {
        self.audio.is_some()
            && self.graphics.is_some()
            && self.cpu.is_some()
            && self.network.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_only_present_sections() {
        let mut report = SystemReport::new();
        report.audio = vec!["Audio Devices:".into(), "Status: Ready".into()];
        report.cpu = vec!["CPU Info:".into()];

        let update = ScanUpdate {
            cpu: Some(vec!["CPU Info:".into(), "Cores: 8".into()]),
            ..Default::default()
        };
        report.apply(update);

        // CPU replaced wholesale, audio untouched
        assert_eq!(report.cpu.len(), 2);
        assert_eq!(report.audio.len(), 2);
    }

    #[test]
    fn test_apply_network_sets_connected_flag() {
        let mut report = SystemReport::new();
        let update = ScanUpdate {
            network: Some(NetworkStatus {
                lines: vec!["Network:".into(), "Status: Online".into()],
                connected: true,
                local_addr: None,
            }),
            ..Default::default()
        };
        report.apply(update);
        assert!(report.internet_connected);
        assert_eq!(report.network[0], "Network:");
    }

    #[test]
    fn test_is_full() {
        assert!(!ScanUpdate::default().is_full());
        let full = ScanUpdate {
            audio: Some(vec![]),
            graphics: Some(vec![]),
            cpu: Some(vec![]),
            network: Some(NetworkStatus::default()),
        };
        assert!(full.is_full());
    }
}
