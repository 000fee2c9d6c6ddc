//! Terminal preview binary.
//!
//! Runs a built-in playlist against stand-ins for the excluded hardware:
//! the strip renders as 24-bit ANSI blocks on stdout, pressing Enter
//! acts as the advance button and a slow sine wave plays the
//! accelerometer's Y axis.

use std::convert::Infallible;
use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use clap::Parser;
use log::error;

use strip_show::{
    Axis, ButtonSource, Playlist, PixelSink, Rgb, SensorSource, Sequencer, ShowError, SinkError,
    color,
};

#[derive(Debug, Parser)]
#[command(name = "strip-show", about = "Button-cycled LED strip animation engine")]
struct Args {
    /// Built-in playlist to run
    #[arg(default_value = "room")]
    playlist: String,

    /// Number of LEDs on the strip
    #[arg(default_value = "24")]
    num_leds: NonZeroUsize,
}

/// Pixel sink rendering the strip as colored blocks on one terminal line.
struct TerminalSink {
    pixels: Vec<Rgb>,
}

impl TerminalSink {
    fn new(len: usize) -> Self {
        Self {
            pixels: vec![color::BLACK; len],
        }
    }
}

impl PixelSink for TerminalSink {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set(&mut self, index: usize, color: Rgb) -> Result<(), SinkError> {
        let len = self.pixels.len();
        let pixel = self.pixels.get_mut(index).ok_or_else(|| {
            SinkError(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("pixel {index} out of range for strip of {len}"),
            ))
        })?;
        *pixel = color;
        Ok(())
    }

    fn fill(&mut self, color: Rgb) -> Result<(), SinkError> {
        self.pixels.fill(color);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        let mut out = io::stdout().lock();
        write!(out, "\r")?;
        for pixel in &self.pixels {
            write!(out, "\x1b[48;2;{};{};{}m  ", pixel.r, pixel.g, pixel.b)?;
        }
        write!(out, "\x1b[0m")?;
        out.flush()?;
        Ok(())
    }
}

/// Button backed by a thread that latches a press whenever a line
/// arrives on stdin.
struct EnterButton {
    pressed: Arc<AtomicBool>,
}

impl EnterButton {
    fn spawn() -> io::Result<Self> {
        let pressed = Arc::new(AtomicBool::new(false));
        let latch = Arc::clone(&pressed);
        thread::Builder::new()
            .name("button-stdin".into())
            .spawn(move || {
                let stdin = io::stdin();
                let mut line = String::new();
                while stdin.lock().read_line(&mut line).is_ok_and(|read| read > 0) {
                    latch.store(true, Ordering::Release);
                    line.clear();
                }
            })?;
        Ok(Self { pressed })
    }
}

impl ButtonSource for EnterButton {
    fn read(&mut self) -> Option<bool> {
        // One poll observes the press as a high level, the next is low
        // again, which is exactly the rising edge the sequencer expects.
        Some(self.pressed.swap(false, Ordering::Acquire))
    }
}

/// Accelerometer stand-in: a slow sine wave on every axis.
struct WobbleSensor {
    started: Instant,
}

impl WobbleSensor {
    fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl SensorSource for WobbleSensor {
    #[allow(clippy::cast_possible_truncation)]
    fn read_axis(&self, _axis: Axis) -> Option<i32> {
        let seconds = self.started.elapsed().as_secs_f32();
        Some((seconds.sin() * 128.0) as i32)
    }
}

fn run(args: &Args) -> Result<Infallible, ShowError> {
    let playlist = Playlist::builtin(&args.playlist)?;
    let button = EnterButton::spawn().map_err(ShowError::SchedulerUnavailable)?;
    let sensor: Arc<dyn SensorSource> = Arc::new(WobbleSensor::new());

    let sequencer = Sequencer::new(playlist, button, Some(sensor))?;
    sequencer.run_forever(TerminalSink::new(args.num_leds.get()))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // run() only ever returns with a fatal error.
    let err = match run(&args) {
        Ok(never) => match never {},
        Err(err) => err,
    };
    error!("{err}");
    process::exit(1);
}
