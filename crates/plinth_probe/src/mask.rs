//! Scan section selection

use bitflags::bitflags;

bitflags! {
    /// Which dashboard sections a scan request covers
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ScanMask: u8 {
        const AUDIO    = 1 << 0;
        const GRAPHICS = 1 << 1;
        const CPU      = 1 << 2;
        const NETWORK  = 1 << 3;
        const ALL = Self::AUDIO.bits()
            | Self::GRAPHICS.bits()
            | Self::CPU.bits()
            | Self::NETWORK.bits();
    }
}
