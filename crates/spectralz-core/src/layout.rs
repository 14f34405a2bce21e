use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ChannelLayout;

/// Main input/output bus configuration negotiated with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusesLayout {
    pub main_input: ChannelLayout,
    pub main_output: ChannelLayout,
}

impl BusesLayout {
    pub fn new(main_input: ChannelLayout, main_output: ChannelLayout) -> Self {
        Self {
            main_input,
            main_output,
        }
    }

    pub fn mono() -> Self {
        Self::new(ChannelLayout::Mono, ChannelLayout::Mono)
    }

    pub fn stereo() -> Self {
        Self::new(ChannelLayout::Stereo, ChannelLayout::Stereo)
    }

    /// Builds a layout from host channel counts where `None` marks a missing bus.
    pub fn from_channel_counts(input: Option<u32>, output: Option<u32>) -> Self {
        let map = |count: Option<u32>| {
            count
                .map(ChannelLayout::from_channel_count)
                .unwrap_or(ChannelLayout::Disabled)
        };
        Self::new(map(input), map(output))
    }

    pub fn total_input_channels(&self) -> usize {
        self.main_input.channels()
    }

    pub fn total_output_channels(&self) -> usize {
        self.main_output.channels()
    }
}

impl Default for BusesLayout {
    fn default() -> Self {
        Self::stereo()
    }
}

impl fmt::Display for BusesLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.main_input, self.main_output)
    }
}

/// Accepts matching mono or stereo layouts and rejects everything else.
pub fn is_buses_layout_supported(layout: &BusesLayout) -> bool {
    if !matches!(
        layout.main_output,
        ChannelLayout::Mono | ChannelLayout::Stereo
    ) {
        return false;
    }

    layout.main_output == layout.main_input
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unsupported bus layout {input:?} -> {output:?}")]
    Unsupported {
        input: ChannelLayout,
        output: ChannelLayout,
    },
}

impl LayoutError {
    pub fn unsupported(layout: &BusesLayout) -> Self {
        LayoutError::Unsupported {
            input: layout.main_input,
            output: layout.main_output,
        }
    }
}
