mod tests {
    use std::io;
    use std::thread;
    use std::time::Duration;

    use strip_show::{
        AnimationKind, BufferSink, FrameScheduler, PixelSink, Rgb, ShowError, SinkError, color,
    };

    fn stepped_palette(colors: &[Rgb]) -> strip_show::AnimationSlot {
        AnimationKind::SteppedPalette.to_slot(colors, None).unwrap()
    }

    #[test]
    fn test_start_rejects_zero_frame_rate() {
        let animation = stepped_palette(&[color::RED]);
        let result = FrameScheduler::start(animation, BufferSink::new(8), 0);
        assert!(matches!(
            result,
            Err(ShowError::InvalidFrameRate { kind: AnimationKind::SteppedPalette })
        ));
    }

    #[test]
    fn test_stop_returns_sink_after_timeline_exit() {
        let animation = stepped_palette(&[color::RED]);
        let handle = FrameScheduler::start(animation, BufferSink::new(8), 200).unwrap();

        thread::sleep(Duration::from_millis(50));
        let sink = handle.stop().unwrap();

        assert!(sink.writes() > 0);
        assert_eq!(sink.writes(), sink.flushes());
        assert!(sink.pixels().iter().all(|&pixel| pixel == color::RED));

        // The timeline has exited and the sink is exclusively ours; the
        // counters cannot move anymore.
        let writes = sink.writes();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(sink.writes(), writes);
    }

    #[test]
    fn test_first_step_executes_before_the_first_sleep() {
        // At 2 fps the first sleep lasts 500 ms; any write observed
        // before that must come from the immediate first step.
        let animation = stepped_palette(&[color::GREEN]);
        let handle = FrameScheduler::start(animation, BufferSink::new(8), 2).unwrap();

        thread::sleep(Duration::from_millis(100));
        let sink = handle.stop().unwrap();
        assert_eq!(sink.writes(), 1);
    }

    #[test]
    fn test_cadence_roughly_matches_frame_rate() {
        let animation = stepped_palette(&[color::BLUE]);
        let handle = FrameScheduler::start(animation, BufferSink::new(8), 100).unwrap();

        thread::sleep(Duration::from_millis(200));
        let sink = handle.stop().unwrap();

        // ~20 frames expected; keep the bounds loose for busy CI hosts.
        assert!(sink.writes() >= 5, "only {} frames", sink.writes());
        assert!(sink.writes() <= 60, "{} frames", sink.writes());
    }

    /// Sink whose writes always fail.
    struct BrokenSink;

    impl PixelSink for BrokenSink {
        fn len(&self) -> usize {
            4
        }

        fn set(&mut self, _index: usize, _color: Rgb) -> Result<(), SinkError> {
            Err(SinkError(io::Error::from(io::ErrorKind::BrokenPipe)))
        }

        fn fill(&mut self, _color: Rgb) -> Result<(), SinkError> {
            Err(SinkError(io::Error::from(io::ErrorKind::BrokenPipe)))
        }

        fn flush(&mut self) -> Result<(), SinkError> {
            Err(SinkError(io::Error::from(io::ErrorKind::BrokenPipe)))
        }
    }

    #[test]
    fn test_sink_failure_terminates_the_timeline() {
        let animation = stepped_palette(&[color::RED]);
        let handle = FrameScheduler::start(animation, BrokenSink, 100).unwrap();

        // The first step fails immediately; stop surfaces the error
        // instead of a sink.
        thread::sleep(Duration::from_millis(20));
        assert!(matches!(handle.stop(), Err(ShowError::Sink(_))));
    }
}
