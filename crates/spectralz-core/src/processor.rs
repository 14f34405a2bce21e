use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::BufferConfigError;
use crate::denormals::ScopedNoDenormals;
use crate::layout::{is_buses_layout_supported, BusesLayout, LayoutError};
use crate::state;
use crate::{BufferConfig, ChannelBuffer, SplashEditor};

pub const PLUGIN_ID: &str = "com.spectralz.spectralz";
pub const PLUGIN_NAME: &str = "Spectralz";
pub const PLUGIN_VENDOR: &str = "Spectralz";
pub const PLUGIN_DESCRIPTION: &str = "AI-Powered Spectral Audio Editor";

/// Metadata describing a plug-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub id: String,
    pub name: String,
    pub vendor: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            vendor: vendor.into(),
            version: None,
            description: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn spectralz() -> Self {
        Self::new(PLUGIN_ID, PLUGIN_NAME, PLUGIN_VENDOR)
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_description(PLUGIN_DESCRIPTION)
    }
}

impl fmt::Display for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.vendor)
    }
}

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("invalid processing configuration: {0}")]
    InvalidConfig(#[from] BufferConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Contract between the host adapter and an audio processor.
///
/// Defaults describe a plain audio effect: no MIDI, no tail, a single unnamed
/// program and an editor.
pub trait AudioProcessor: Send {
    fn descriptor(&self) -> &PluginDescriptor;

    fn prepare_to_play(&mut self, config: &BufferConfig) -> Result<(), ProcessorError>;

    fn release_resources(&mut self);

    fn is_buses_layout_supported(&self, layout: &BusesLayout) -> bool;

    fn process_block(&mut self, buffer: &mut dyn ChannelBuffer);

    fn accepts_midi(&self) -> bool {
        false
    }

    fn produces_midi(&self) -> bool {
        false
    }

    fn is_midi_effect(&self) -> bool {
        false
    }

    fn tail_length_seconds(&self) -> f64 {
        0.0
    }

    fn num_programs(&self) -> usize {
        1
    }

    fn current_program(&self) -> usize {
        0
    }

    fn set_current_program(&mut self, _index: usize) {}

    fn program_name(&self, _index: usize) -> String {
        String::new()
    }

    fn change_program_name(&mut self, _index: usize, _name: &str) {}

    fn has_editor(&self) -> bool {
        true
    }

    fn state_information(&self, dest: &mut Vec<u8>);

    fn set_state_information(&mut self, data: &[u8]);
}

/// Converts a tail length in seconds to whole samples at `sample_rate`.
pub fn tail_samples(tail_seconds: f64, sample_rate: f32) -> u32 {
    if tail_seconds <= 0.0 || !tail_seconds.is_finite() {
        return 0;
    }
    (tail_seconds * sample_rate as f64).ceil().min(u32::MAX as f64) as u32
}

/// Zeroes output channels that have no matching input so they never carry
/// stale host memory.
pub fn clear_extra_output_channels(
    buffer: &mut dyn ChannelBuffer,
    total_inputs: usize,
    total_outputs: usize,
) {
    for channel in total_inputs..total_outputs {
        buffer.clear_channel(channel);
    }
}

/// The Spectralz processor. Audio passes through untouched.
#[derive(Debug)]
pub struct SpectralzProcessor {
    descriptor: Arc<PluginDescriptor>,
    layout: BusesLayout,
    config: Option<BufferConfig>,
}

impl SpectralzProcessor {
    pub fn new() -> Self {
        Self {
            descriptor: Arc::new(PluginDescriptor::spectralz()),
            layout: BusesLayout::default(),
            config: None,
        }
    }

    pub fn buses_layout(&self) -> BusesLayout {
        self.layout
    }

    /// Adopts `layout` if it passes validation; the previous layout is kept otherwise.
    pub fn set_buses_layout(&mut self, layout: BusesLayout) -> Result<(), LayoutError> {
        if !self.is_buses_layout_supported(&layout) {
            tracing::warn!(%layout, "rejected bus layout");
            return Err(LayoutError::unsupported(&layout));
        }
        tracing::debug!(%layout, "bus layout accepted");
        self.layout = layout;
        Ok(())
    }

    pub fn total_num_input_channels(&self) -> usize {
        self.layout.total_input_channels()
    }

    pub fn total_num_output_channels(&self) -> usize {
        self.layout.total_output_channels()
    }

    pub fn is_prepared(&self) -> bool {
        self.config.is_some()
    }

    pub fn buffer_config(&self) -> Option<&BufferConfig> {
        self.config.as_ref()
    }

    pub fn create_editor(&self) -> SplashEditor {
        SplashEditor::new(Arc::clone(&self.descriptor))
    }

    pub fn shared_descriptor(&self) -> Arc<PluginDescriptor> {
        Arc::clone(&self.descriptor)
    }
}

impl Default for SpectralzProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioProcessor for SpectralzProcessor {
    fn descriptor(&self) -> &PluginDescriptor {
        &self.descriptor
    }

    fn prepare_to_play(&mut self, config: &BufferConfig) -> Result<(), ProcessorError> {
        config.validate()?;
        tracing::info!(
            sample_rate = config.sample_rate,
            max_block_size = config.max_block_size,
            layout = %self.layout,
            "preparing {}",
            self.descriptor
        );
        self.config = Some(config.clone());
        Ok(())
    }

    fn release_resources(&mut self) {
        if self.config.take().is_some() {
            tracing::debug!("released processing resources");
        }
    }

    fn is_buses_layout_supported(&self, layout: &BusesLayout) -> bool {
        is_buses_layout_supported(layout)
    }

    fn process_block(&mut self, buffer: &mut dyn ChannelBuffer) {
        let _no_denormals = ScopedNoDenormals::new();

        clear_extra_output_channels(
            buffer,
            self.total_num_input_channels(),
            self.total_num_output_channels(),
        );
    }

    fn set_current_program(&mut self, index: usize) {
        if index >= self.num_programs() {
            tracing::debug!(index, "ignoring out of range program index");
        }
    }

    fn state_information(&self, dest: &mut Vec<u8>) {
        state::save_state(dest);
    }

    fn set_state_information(&mut self, data: &[u8]) {
        state::load_state(data);
    }
}
