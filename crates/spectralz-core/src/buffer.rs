use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Channel configuration of a single audio bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelLayout {
    Disabled,
    Mono,
    Stereo,
    Surround51,
    Discrete(u8),
}

impl ChannelLayout {
    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Disabled => 0,
            ChannelLayout::Mono => 1,
            ChannelLayout::Stereo => 2,
            ChannelLayout::Surround51 => 6,
            ChannelLayout::Discrete(channels) => *channels as usize,
        }
    }

    /// Maps a raw channel count reported by a host onto a named layout.
    pub fn from_channel_count(count: u32) -> Self {
        match count {
            0 => ChannelLayout::Disabled,
            1 => ChannelLayout::Mono,
            2 => ChannelLayout::Stereo,
            6 => ChannelLayout::Surround51,
            other => ChannelLayout::Discrete(other.min(u8::MAX as u32) as u8),
        }
    }
}

/// Configuration handed to a processor before playback starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferConfig {
    pub sample_rate: f32,
    pub max_block_size: usize,
    pub layout: ChannelLayout,
}

#[derive(Debug, Error, PartialEq)]
pub enum BufferConfigError {
    #[error("sample rate {0} is not a positive finite value")]
    InvalidSampleRate(f32),
    #[error("maximum block size must be non-zero")]
    EmptyBlock,
}

impl BufferConfig {
    pub fn new(sample_rate: f32, max_block_size: usize, layout: ChannelLayout) -> Self {
        Self {
            sample_rate,
            max_block_size,
            layout,
        }
    }

    pub fn validate(&self) -> Result<(), BufferConfigError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(BufferConfigError::InvalidSampleRate(self.sample_rate));
        }
        if self.max_block_size == 0 {
            return Err(BufferConfigError::EmptyBlock);
        }
        Ok(())
    }
}

/// Mutable view over a block of non-interleaved audio.
///
/// Both owned buffers and host-provided channel slices implement this so the
/// processor never needs to know where the samples live.
pub trait ChannelBuffer {
    fn num_channels(&self) -> usize;
    fn num_samples(&self) -> usize;
    fn channel_mut(&mut self, index: usize) -> Option<&mut [f32]>;

    fn clear_channel(&mut self, index: usize) {
        if let Some(channel) = self.channel_mut(index) {
            channel.fill(0.0);
        }
    }
}

/// Non-interleaved audio buffer owning its samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Builds a buffer from per-channel sample vectors, padding shorter
    /// channels with silence so every channel has the same length.
    pub fn from_channels(mut channels: Vec<Vec<f32>>) -> Self {
        let len = channels.iter().map(Vec::len).max().unwrap_or(0);
        for channel in &mut channels {
            channel.resize(len, 0.0);
        }
        Self { channels }
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }
}

impl ChannelBuffer for AudioBuffer {
    fn num_channels(&self) -> usize {
        self.channels.len()
    }

    fn num_samples(&self) -> usize {
        self.channels
            .first()
            .map(|channel| channel.len())
            .unwrap_or_default()
    }

    fn channel_mut(&mut self, index: usize) -> Option<&mut [f32]> {
        self.channels.get_mut(index).map(Vec::as_mut_slice)
    }
}

/// Wraps channel slices borrowed from a plug-in host.
pub struct ChannelSlices<'a, 'b> {
    channels: &'a mut [&'b mut [f32]],
}

impl<'a, 'b> ChannelSlices<'a, 'b> {
    pub fn new(channels: &'a mut [&'b mut [f32]]) -> Self {
        Self { channels }
    }
}

impl ChannelBuffer for ChannelSlices<'_, '_> {
    fn num_channels(&self) -> usize {
        self.channels.len()
    }

    fn num_samples(&self) -> usize {
        self.channels
            .first()
            .map(|channel| channel.len())
            .unwrap_or_default()
    }

    fn channel_mut(&mut self, index: usize) -> Option<&mut [f32]> {
        self.channels.get_mut(index).map(|channel| &mut **channel)
    }
}
