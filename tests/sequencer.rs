mod tests {
    use std::thread;
    use std::time::Duration;

    use strip_show::{
        AnimationConfig, AnimationKind, BufferSink, ButtonSource, Playlist, Sequencer, ShowError,
        color,
    };

    /// Button whose level alternates low/high on consecutive polls, so
    /// every wait observes a rising edge almost immediately.
    struct PulsingButton {
        level: bool,
    }

    impl PulsingButton {
        fn new() -> Self {
            Self { level: false }
        }
    }

    impl ButtonSource for PulsingButton {
        fn read(&mut self) -> Option<bool> {
            self.level = !self.level;
            Some(self.level)
        }
    }

    fn three_entry_playlist() -> Playlist {
        Playlist::new(
            "test",
            vec![
                AnimationConfig::new(AnimationKind::SteppedPalette, 100, [color::RED]),
                AnimationConfig::new(AnimationKind::SegmentStripe, 100, [color::GREEN]),
                AnimationConfig::new(AnimationKind::SteppedPalette, 100, [color::BLUE]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_index_wraps_after_a_full_cycle() {
        let mut sequencer = Sequencer::new(three_entry_playlist(), PulsingButton::new(), None)
            .unwrap()
            .with_debounce(Duration::ZERO);
        let mut sink = BufferSink::new(12);

        assert_eq!(sequencer.current_index(), 0);
        let mut writes = 0;
        for expected in [1, 2, 0] {
            sink = sequencer.run_cycle(sink).unwrap();
            assert_eq!(sequencer.current_index(), expected);

            // Each cycle issued its own start/stop pair and the timeline
            // it started produced at least one frame.
            assert!(sink.writes() > writes);
            writes = sink.writes();
        }
    }

    #[test]
    fn test_no_sink_activity_between_stop_and_next_start() {
        let mut sequencer = Sequencer::new(three_entry_playlist(), PulsingButton::new(), None)
            .unwrap()
            .with_debounce(Duration::ZERO);

        let sink = sequencer.run_cycle(BufferSink::new(12)).unwrap();
        let writes = sink.writes();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(sink.writes(), writes);
    }

    #[test]
    fn test_unknown_playlist_name_is_rejected() {
        assert!(matches!(
            Playlist::builtin("disco"),
            Err(ShowError::UnknownPlaylist(_))
        ));
    }

    #[test]
    fn test_builtin_playlists_are_known() {
        for name in Playlist::builtin_names() {
            assert_eq!(Playlist::builtin(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_zero_frame_rate_is_rejected_at_construction() {
        let playlist = Playlist::new(
            "test",
            vec![AnimationConfig::new(AnimationKind::Gradient, 0, [color::RED])],
        );
        assert!(matches!(
            playlist,
            Err(ShowError::InvalidFrameRate { kind: AnimationKind::Gradient })
        ));
    }

    #[test]
    fn test_empty_palette_is_rejected_at_construction() {
        let playlist = Playlist::new(
            "test",
            vec![AnimationConfig::new(AnimationKind::Rotation, 10, vec![])],
        );
        assert!(matches!(
            playlist,
            Err(ShowError::EmptyPalette { kind: AnimationKind::Rotation })
        ));
    }

    #[test]
    fn test_adaptive_range_requires_a_color_pair() {
        let playlist = Playlist::new(
            "test",
            vec![AnimationConfig::new(AnimationKind::AdaptiveRange, 10, [color::RED])],
        );
        assert!(matches!(
            playlist,
            Err(ShowError::PaletteSize { kind: AnimationKind::AdaptiveRange, got: 1 })
        ));
    }

    #[test]
    fn test_adaptive_range_requires_a_sensor() {
        let playlist = Playlist::new(
            "test",
            vec![AnimationConfig::new(
                AnimationKind::AdaptiveRange,
                10,
                [color::RED, color::GREEN],
            )],
        )
        .unwrap();

        let sequencer = Sequencer::new(playlist, PulsingButton::new(), None);
        assert!(matches!(
            sequencer,
            Err(ShowError::MissingSensor { kind: AnimationKind::AdaptiveRange })
        ));
    }

    #[test]
    fn test_empty_playlist_is_rejected() {
        assert!(matches!(
            Playlist::new("test", vec![]),
            Err(ShowError::EmptyPlaylist(_))
        ));
    }
}
