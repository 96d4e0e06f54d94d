//! Periodic bubble simulator
//!
//! Runs [`sim::tick`](crate::sim::tick) on a dedicated thread and publishes
//! each finished generation for the renderer. Readers never see the live
//! state: every tick builds the next generation under the state lock, then
//! swaps an immutable `Arc<[Bubble]>` into place.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::{self, MissedTickBehavior};

use crate::config::SimConfig;
use crate::error::Result;
use crate::sim::{self, Bubble, ContainerGeometry, Rect, SimState, TickReport};

/// Redraw request raised after every tick
pub type RedrawHook = Arc<dyn Fn() + Send + Sync>;

/// State shared between the host and the tick thread
struct Shared {
    state: Mutex<SimState>,
    geometry: RwLock<Option<ContainerGeometry>>,
    published: RwLock<Arc<[Bubble]>>,
    redraw: RwLock<Option<RedrawHook>>,
}

impl Shared {
    fn tick(&self) -> TickReport {
        let geometry = *read(&self.geometry);

        let report = {
            let mut state = lock(&self.state);
            let report = sim::tick(&mut *state, geometry.as_ref());
            // Publish while still holding the state so generations go out in tick order
            let generation: Arc<[Bubble]> = Arc::from(state.field.bubbles());
            *write(&self.published) = generation;
            report
        };

        if report.spawned.is_some() || report.removed > 0 {
            log::trace!(
                "tick: spawned {:?}, removed {}",
                report.spawned,
                report.removed
            );
        }

        let hook = read(&self.redraw).clone();
        if let Some(hook) = hook {
            hook();
        }
        report
    }
}

/// Handle to a running tick thread
struct Worker {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Owns the bubble simulation and its periodic schedule
pub struct BubbleSimulator {
    shared: Arc<Shared>,
    interval: Duration,
    worker: Mutex<Option<Worker>>,
}

impl BubbleSimulator {
    /// Create a stopped simulator with no geometry
    pub fn new(config: SimConfig, seed: u64) -> Result<Self> {
        let interval = config.tick_interval();
        let state = SimState::new(config, seed)?;
        Ok(Self {
            shared: Arc::new(Shared {
                state: Mutex::new(state),
                geometry: RwLock::new(None),
                published: RwLock::new(Arc::<[Bubble]>::from(Vec::new())),
                redraw: RwLock::new(None),
            }),
            interval,
            worker: Mutex::new(None),
        })
    }

    /// Register the callback raised after every tick.
    ///
    /// The hook runs on the tick thread. It may read the simulator but must
    /// not call [`start`](Self::start) or [`stop`](Self::stop), which wait
    /// for that thread to exit.
    pub fn set_redraw_hook<F>(&self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *write(&self.shared.redraw) = Some(Arc::new(hook));
    }

    pub fn clear_redraw_hook(&self) {
        *write(&self.shared.redraw) = None;
    }

    /// Replace the container bounds; applies from the next tick
    pub fn set_geometry(&self, water: Rect, border_width: f32) {
        let geometry = ContainerGeometry::new(water, border_width);
        log::info!(
            "Container geometry set: water {:?}, border {}",
            water,
            border_width
        );
        *write(&self.shared.geometry) = Some(geometry);
    }

    /// Drop the container bounds; ticks become no-ops until set again
    pub fn clear_geometry(&self) {
        *write(&self.shared.geometry) = None;
    }

    pub fn geometry(&self) -> Option<ContainerGeometry> {
        *read(&self.shared.geometry)
    }

    /// Start the periodic schedule, restarting it if already running
    pub fn start(&self) -> Result<()> {
        let previous = lock(&self.worker).take();
        if let Some(running) = previous {
            Self::shutdown(running);
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let shared = Arc::clone(&self.shared);
        let interval = self.interval;
        let handle = thread::Builder::new()
            .name("bubble-sim".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    // First tick one interval after start, not immediately
                    let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
                    // Fell behind: skip the missed ticks instead of bursting
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
                    loop {
                        tokio::select! {
                            biased;
                            _ = &mut stop_rx => break,
                            _ = ticker.tick() => {
                                shared.tick();
                            }
                        }
                    }
                });
            })?;

        // A concurrent start may have stored its own worker meanwhile
        let displaced = lock(&self.worker).replace(Worker { stop_tx, handle });
        if let Some(running) = displaced {
            Self::shutdown(running);
        }
        log::info!("Bubble simulation started ({:?} interval)", interval);
        Ok(())
    }

    /// Stop the periodic schedule. Returns once the tick thread has exited.
    pub fn stop(&self) {
        let running = lock(&self.worker).take();
        if let Some(running) = running {
            Self::shutdown(running);
            log::info!("Bubble simulation stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        lock(&self.worker).is_some()
    }

    /// Run one tick on the caller's thread
    pub fn tick(&self) -> TickReport {
        self.shared.tick()
    }

    /// Copy of the most recently published generation, in spawn order
    pub fn snapshot(&self) -> Vec<Bubble> {
        let generation = Arc::clone(&read(&self.shared.published));
        generation.to_vec()
    }

    /// Number of bubbles in the most recently published generation
    pub fn bubble_count(&self) -> usize {
        read(&self.shared.published).len()
    }

    /// Ticks run so far
    pub fn time_ticks(&self) -> u64 {
        lock(&self.shared.state).time_ticks
    }

    fn shutdown(worker: Worker) {
        // A send error means the thread already exited
        let _ = worker.stop_tx.send(());
        if worker.handle.join().is_err() {
            log::error!("Bubble simulation thread panicked");
        }
    }
}

impl Drop for BubbleSimulator {
    fn drop(&mut self) {
        self.stop();
    }
}

// Every value behind these locks is replaced wholesale, so a poisoned lock
// still holds consistent data.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(rw: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    rw.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(rw: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    rw.write().unwrap_or_else(PoisonError::into_inner)
}
