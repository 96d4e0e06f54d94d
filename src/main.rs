//! Water Bubble demo host
//!
//! Lays the bottle out in a fixed-size view, runs the simulation on its own
//! schedule and redraws on a ~60 Hz frame loop whenever a tick asked for it.
//!
//! Usage: `water-bubble [seconds] [seed]`

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use water_bubble::{BottleLayout, BubbleSimulator, Padding, SimConfig, renderer};

/// View size in device pixels
const VIEW_WIDTH: f32 = 360.0;
const VIEW_HEIGHT: f32 = 640.0;
const DENSITY: f32 = 2.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const DEFAULT_RUN_TIME: Duration = Duration::from_secs(5);

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let duration = parse_run_time(args.next().as_deref());
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    if let Err(e) = run(duration, seed) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Run time in seconds; anything unparsable or out of range falls back to the default
fn parse_run_time(arg: Option<&str>) -> Duration {
    arg.and_then(|s| s.parse::<f32>().ok())
        .and_then(|secs| Duration::try_from_secs_f32(secs).ok())
        .unwrap_or(DEFAULT_RUN_TIME)
}

fn run(duration: Duration, seed: u64) -> water_bubble::Result<()> {
    log::info!("Water Bubble starting (seed {})", seed);

    let config = SimConfig::default();
    if let Ok(json) = serde_json::to_string(&config) {
        log::debug!("Simulation config: {}", json);
    }

    let geometry =
        BottleLayout::default().measure(VIEW_WIDTH, VIEW_HEIGHT, Padding::default(), DENSITY);
    let simulator = BubbleSimulator::new(config, seed)?;

    let dirty = Arc::new(AtomicBool::new(false));
    let requests = Arc::new(AtomicU64::new(0));
    {
        let dirty = Arc::clone(&dirty);
        let requests = Arc::clone(&requests);
        simulator.set_redraw_hook(move || {
            requests.fetch_add(1, Ordering::Relaxed);
            dirty.store(true, Ordering::Release);
        });
    }

    let container = geometry.container();
    simulator.set_geometry(container.water, container.border_width);
    simulator.start()?;

    let started = Instant::now();
    let mut frames = 0u64;
    let mut peak = 0usize;
    let mut hidden_once = false;

    while started.elapsed() < duration {
        // Simulate the widget going off screen for a moment halfway through
        if !hidden_once && started.elapsed() >= duration / 2 {
            simulator.stop();
            log::info!("Widget hidden at {} ticks", simulator.time_ticks());
            thread::sleep(FRAME_INTERVAL * 4);
            simulator.start()?;
            hidden_once = true;
        }

        if dirty.swap(false, Ordering::Acquire) {
            let bubbles = simulator.snapshot();
            let frame = renderer::build_frame(&geometry, &bubbles);
            peak = peak.max(bubbles.len());
            frames += 1;
            log::debug!(
                "frame {}: {} bubbles, {} vertices",
                frames,
                bubbles.len(),
                frame.len()
            );
        }
        thread::sleep(FRAME_INTERVAL);
    }

    simulator.stop();

    let bubbles = simulator.snapshot();
    let summary = serde_json::json!({
        "seed": seed,
        "ticks": simulator.time_ticks(),
        "redraw_requests": requests.load(Ordering::Relaxed),
        "frames": frames,
        "peak_bubbles": peak,
        "bubbles": bubbles,
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(text) => println!("{}", text),
        Err(e) => log::warn!("Failed to encode summary: {}", e),
    }

    log::info!(
        "Water Bubble finished: {} ticks, {} frames",
        simulator.time_ticks(),
        frames
    );
    Ok(())
}
