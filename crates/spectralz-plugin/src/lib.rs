//! Spectralz – AI-powered spectral audio editor, exported as CLAP and VST3.
//! - Mono or stereo effect with matching input/output layouts
//! - Audio passes through untouched; the spectral engine is not wired in yet
//! - Splash-screen EGUI editor via nih-plug
//!
//! All host-independent behaviour lives in `spectralz-core`; this crate only
//! adapts it to the nih-plug wrapper.

use nih_plug::prelude::*;
use std::num::NonZeroU32;
use std::sync::Arc;

use spectralz_core::prelude::*;
use spectralz_core::{logging, tail_samples};

#[cfg(feature = "editor")]
mod ui;

const STEREO: Option<NonZeroU32> = NonZeroU32::new(2);
const MONO: Option<NonZeroU32> = NonZeroU32::new(1);

/// Spectralz exposes no automatable parameters yet and persists nothing.
#[derive(Params, Default)]
pub struct SpectralzParams {}

pub struct Spectralz {
    params: Arc<SpectralzParams>,
    processor: SpectralzProcessor,
    sample_rate: f32,
}

impl Default for Spectralz {
    fn default() -> Self {
        Self {
            params: Arc::new(SpectralzParams::default()),
            processor: SpectralzProcessor::new(),
            sample_rate: 44100.0,
        }
    }
}

impl Plugin for Spectralz {
    const NAME: &'static str = spectralz_core::processor::PLUGIN_NAME;
    const VENDOR: &'static str = spectralz_core::processor::PLUGIN_VENDOR;
    const URL: &'static str = env!("CARGO_PKG_HOMEPAGE");
    const EMAIL: &'static str = "";

    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    // The first entry is the default layout offered to hosts.
    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[
        AudioIOLayout {
            main_input_channels: STEREO,
            main_output_channels: STEREO,
            ..AudioIOLayout::const_default()
        },
        AudioIOLayout {
            main_input_channels: MONO,
            main_output_channels: MONO,
            ..AudioIOLayout::const_default()
        },
    ];

    const MIDI_INPUT: MidiConfig = MidiConfig::None;
    const MIDI_OUTPUT: MidiConfig = MidiConfig::None;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    #[cfg(feature = "editor")]
    fn editor(&mut self, _async_executor: AsyncExecutor<Self>) -> Option<Box<dyn Editor>> {
        if !self.processor.has_editor() {
            return None;
        }
        ui::editor(self.processor.create_editor())
    }

    fn initialize(
        &mut self,
        audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        init_logging();

        let layout = buses_layout(audio_io_layout);
        if let Err(err) = self.processor.set_buses_layout(layout) {
            nih_log!("{}", err);
            return false;
        }

        let config = spectralz_core::BufferConfig::new(
            buffer_config.sample_rate,
            buffer_config.max_buffer_size as usize,
            layout.main_output,
        );
        match self.processor.prepare_to_play(&config) {
            Ok(()) => {
                self.sample_rate = buffer_config.sample_rate;
                true
            }
            Err(err) => {
                nih_log!("failed to prepare Spectralz: {}", err);
                false
            }
        }
    }

    fn deactivate(&mut self) {
        self.processor.release_resources();
    }

    fn process(
        &mut self,
        buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        _context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        let mut channels = ChannelSlices::new(buffer.as_slice());
        self.processor.process_block(&mut channels);

        match tail_samples(self.processor.tail_length_seconds(), self.sample_rate) {
            0 => ProcessStatus::Normal,
            samples => ProcessStatus::Tail(samples),
        }
    }
}

/// Reads the user config and installs the subscriber on first activation.
fn init_logging() {
    logging::init(|| {
        SpectralzConfig::load().unwrap_or_else(|err| {
            nih_log!("Spectralz config unreadable, using defaults: {:#}", err);
            SpectralzConfig::default()
        })
    });
}

fn buses_layout(audio_io_layout: &AudioIOLayout) -> BusesLayout {
    BusesLayout::from_channel_counts(
        audio_io_layout.main_input_channels.map(NonZeroU32::get),
        audio_io_layout.main_output_channels.map(NonZeroU32::get),
    )
}

impl ClapPlugin for Spectralz {
    const CLAP_ID: &'static str = spectralz_core::processor::PLUGIN_ID;
    const CLAP_DESCRIPTION: Option<&'static str> =
        Some(spectralz_core::processor::PLUGIN_DESCRIPTION);
    const CLAP_MANUAL_URL: Option<&'static str> = None;
    const CLAP_SUPPORT_URL: Option<&'static str> = None;
    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Analyzer,
        ClapFeature::Stereo,
        ClapFeature::Mono,
    ];
}

impl Vst3Plugin for Spectralz {
    const VST3_CLASS_ID: [u8; 16] = *b"SpectralzSpecEdt";
    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Analyzer];
}

nih_export_clap!(Spectralz);
nih_export_vst3!(Spectralz);
