use proptest::prelude::*;
use spectralz_core::{
    clear_extra_output_channels, is_buses_layout_supported, AudioBuffer, AudioProcessor,
    BufferConfig, BusesLayout, ChannelLayout, DrawCommand, Rect, SpectralzProcessor,
};

fn channel_layout() -> impl Strategy<Value = ChannelLayout> {
    prop_oneof![
        Just(ChannelLayout::Disabled),
        Just(ChannelLayout::Mono),
        Just(ChannelLayout::Stereo),
        Just(ChannelLayout::Surround51),
        (3u8..=16).prop_map(ChannelLayout::Discrete),
    ]
}

fn audio(channels: usize, samples: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-1.0f32..1.0, samples), channels)
}

proptest! {
    #[test]
    fn layout_acceptance_matches_rule(input in channel_layout(), output in channel_layout()) {
        let layout = BusesLayout::new(input, output);
        let expected = input == output
            && matches!(output, ChannelLayout::Mono | ChannelLayout::Stereo);
        prop_assert_eq!(is_buses_layout_supported(&layout), expected);

        let mut processor = SpectralzProcessor::new();
        prop_assert_eq!(processor.set_buses_layout(layout).is_ok(), expected);
    }

    #[test]
    fn extra_outputs_are_zeroed_and_inputs_untouched(
        (inputs, outputs, channels) in (0usize..4, 0usize..6)
            .prop_flat_map(|(inputs, extra)| {
                let outputs = inputs + extra;
                (Just(inputs), Just(outputs), audio(outputs.max(1), 32))
            })
    ) {
        let mut buffer = AudioBuffer::from_channels(channels.clone());
        clear_extra_output_channels(&mut buffer, inputs, outputs);

        for (index, original) in channels.iter().enumerate() {
            let processed = buffer.channel(index).unwrap();
            if index < inputs || index >= outputs {
                prop_assert_eq!(processed, original.as_slice());
            } else {
                prop_assert!(processed.iter().all(|sample| *sample == 0.0));
            }
        }
    }

    #[test]
    fn accepted_layouts_pass_audio_through(stereo in any::<bool>(), channels in audio(2, 64)) {
        let layout = if stereo { BusesLayout::stereo() } else { BusesLayout::mono() };
        let mut processor = SpectralzProcessor::new();
        processor.set_buses_layout(layout).unwrap();

        let channels = channels[..layout.total_output_channels()].to_vec();
        let mut buffer = AudioBuffer::from_channels(channels);
        let expected = buffer.clone();
        processor.process_block(&mut buffer);
        prop_assert_eq!(buffer, expected);
    }
}

#[test]
fn full_session_lifecycle() {
    let mut processor = SpectralzProcessor::default();
    processor.set_buses_layout(BusesLayout::mono()).unwrap();
    processor
        .prepare_to_play(&BufferConfig::new(44_100.0, 128, ChannelLayout::Mono))
        .unwrap();

    let mut buffer = AudioBuffer::from_channels(vec![vec![0.25; 128]]);
    processor.process_block(&mut buffer);
    assert!(buffer.channel(0).unwrap().iter().all(|s| *s == 0.25));

    processor.release_resources();
    assert!(!processor.is_prepared());
}

#[test]
fn state_round_trip_is_a_no_op() {
    let mut processor = SpectralzProcessor::new();
    processor.set_buses_layout(BusesLayout::mono()).unwrap();
    let layout_before = processor.buses_layout();
    let program_before = processor.current_program();

    let mut chunk = Vec::new();
    processor.state_information(&mut chunk);
    assert!(chunk.is_empty());

    processor.set_state_information(&chunk);
    processor.set_state_information(b"foreign state");

    assert_eq!(processor.buses_layout(), layout_before);
    assert_eq!(processor.current_program(), program_before);
    assert_eq!(processor.program_name(0), "");
}

#[test]
fn editor_opens_and_resizes_within_limits() {
    let processor = SpectralzProcessor::new();
    assert!(processor.has_editor());
    let mut editor = processor.create_editor();
    assert_eq!((editor.size().width, editor.size().height), (1200, 800));

    let size = editor.set_size(640, 480);
    assert_eq!((size.width, size.height), (800, 600));
    let size = editor.set_size(3840, 2160);
    assert_eq!((size.width, size.height), (2560, 1440));
}

#[test]
fn paint_follows_resize() {
    let processor = SpectralzProcessor::new();
    let mut editor = processor.create_editor();
    editor.set_size(1024, 768);

    let bounds: Vec<Rect> = editor
        .paint()
        .into_iter()
        .filter_map(|command| match command {
            DrawCommand::Text { bounds, .. } => Some(bounds),
            DrawCommand::FillAll(_) => None,
        })
        .collect();
    assert_eq!(
        bounds,
        vec![Rect::new(0, 0, 1024, 768), Rect::new(0, 668, 1024, 100)]
    );

    editor.set_size(5000, 5000);
    let tag_line = editor.paint().pop();
    assert!(matches!(
        tag_line,
        Some(DrawCommand::Text { bounds, .. }) if bounds == Rect::new(0, 1340, 2560, 100)
    ));
}
