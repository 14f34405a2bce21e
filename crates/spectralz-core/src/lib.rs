//! Spectralz core
//! ==============
//!
//! Host-independent model of the Spectralz plug-in: channel layouts and
//! buffers, the [`AudioProcessor`] contract and its pass-through
//! implementation, the splash-screen editor model, state hooks, and the
//! config and logging setup shared by every plug-in format.

pub mod buffer;
pub mod config;
pub mod denormals;
pub mod editor;
pub mod layout;
pub mod logging;
pub mod processor;
pub mod state;

pub use buffer::{
    AudioBuffer, BufferConfig, BufferConfigError, ChannelBuffer, ChannelLayout, ChannelSlices,
};
pub use config::SpectralzConfig;
pub use editor::{Colour, DrawCommand, EditorSize, Justification, Rect, SizeLimits, SplashEditor};
pub use layout::{is_buses_layout_supported, BusesLayout, LayoutError};
pub use processor::{
    clear_extra_output_channels, tail_samples, AudioProcessor, PluginDescriptor, ProcessorError,
    SpectralzProcessor,
};

/// Common imports for host adapters.
pub mod prelude {
    pub use crate::{
        AudioProcessor, BusesLayout, ChannelBuffer, ChannelLayout, ChannelSlices, DrawCommand,
        SpectralzConfig, SpectralzProcessor, SplashEditor,
    };
}
