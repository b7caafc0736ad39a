//! ndpoly - n-dimensional polytope viewer
//!
//! Animates the 2D projection of a regular polytope and writes every frame
//! to stdout. Commands read from stdin (one per line) change the dimension,
//! family and animation state while it runs; see [`ndpoly::input`].

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;

use ndpoly::config::AppConfig;
use ndpoly::input::{CommandMapper, InputAction};
use ndpoly::systems::{AnimationSystem, FrameWriter};
use ndpoly_core::{DirtyFlags, PolytopeFamily, PolytopeView, ViewSnapshot};

/// Main application state
struct App<W: Write> {
    /// Application configuration
    config: AppConfig,
    view: PolytopeView,
    animation: AnimationSystem,
    writer: FrameWriter<W>,
    frame_index: u64,
}

impl<W: Write> App<W> {
    fn new(config: AppConfig, out: W) -> Self {
        let family = config.polytope.family;
        let dimension = config.polytope.clamped_dimension();
        if dimension != config.polytope.dimension {
            log::warn!(
                "Configured dimension {} out of range, using {}",
                config.polytope.dimension,
                dimension
            );
        }

        let view = PolytopeView::new(family, dimension).unwrap_or_else(|e| {
            log::error!("{}. Falling back to a 4-simplex.", e);
            PolytopeView::new(PolytopeFamily::Simplex, 4)
                .unwrap_or_else(|e| panic!("Failed to create fallback view: {}", e))
        });

        let animation = AnimationSystem::new(&config.animation, view.dimension());
        let writer = FrameWriter::new(out, &config.output);

        log::info!(
            "Viewing {} with {} rotation planes",
            view.geometry().description(),
            view.rotation().len()
        );

        Self {
            config,
            view,
            animation,
            writer,
            frame_index: 0,
        }
    }

    /// Apply one input action; returns false when the app should stop
    fn handle_action(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::SetDimension(n) => self.animation.request_dimension(n),
            InputAction::SetFamily(family) => self.view.set_family(family),
            InputAction::Pause => self.animation.animator_mut().pause(),
            InputAction::Resume => self.animation.animator_mut().resume(),
            InputAction::TogglePause => {
                self.animation.animator_mut().toggle();
            }
            InputAction::ResetRotation => self.view.rotation_mut().reset(),
            InputAction::Save(path) => match self.view.snapshot().save(&path) {
                Ok(()) => log::info!("Saved snapshot to {}", path.display()),
                Err(e) => log::error!("Failed to save snapshot: {}", e),
            },
            InputAction::Load(path) => {
                let result = ViewSnapshot::load(&path).and_then(|s| self.view.restore(&s));
                match result {
                    Ok(()) => log::info!("Restored snapshot from {}", path.display()),
                    Err(e) => log::error!("Failed to load snapshot: {}", e),
                }
            }
            InputAction::Exit => return false,
        }
        true
    }

    /// Run the frame loop until the frame budget is spent or input says stop
    fn run(&mut self, commands: Receiver<String>) -> io::Result<()> {
        let interval = self.config.animation.frame_interval();
        let budget = self.config.animation.frames;
        let mut input_open = true;

        loop {
            let frame_start = Instant::now();

            // 1. Drain pending commands
            while input_open {
                match commands.try_recv() {
                    Ok(line) => match CommandMapper::map_line(&line) {
                        Ok(Some(action)) => {
                            if !self.handle_action(action) {
                                return Ok(());
                            }
                        }
                        Ok(None) => {}
                        Err(msg) => log::warn!("{}", msg),
                    },
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => input_open = false,
                }
            }

            // 2. Advance the animation
            let result = self.animation.update(&mut self.view);
            if let Some(n) = result.dimension_changed {
                log::debug!("Committed dimension {}", n);
            }

            // 3. Emit the frame
            let geometry_changed =
                self.frame_index == 0 || self.view.dirty().contains(DirtyFlags::GEOMETRY);
            let frame = self.view.frame();
            self.writer
                .write_frame(self.frame_index, &frame, self.view.scale(), geometry_changed)?;
            self.view.clear_dirty();
            self.frame_index += 1;

            if budget != 0 && self.frame_index >= budget {
                log::info!("Wrote {} frames", self.frame_index);
                return Ok(());
            }

            // 4. Wait for the next frame
            if let Some(rest) = interval.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }
    }
}

/// Forward stdin lines to the frame loop
fn spawn_input_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn main() {
    // Load configuration before logging so the configured level applies
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!("Starting ndpoly");
    let stdout = io::stdout();
    let mut app = App::new(config, stdout.lock());
    let commands = spawn_input_reader();

    if let Err(e) = app.run(commands) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            log::debug!("Output closed");
        } else {
            log::error!("Failed to write frame: {}", e);
            std::process::exit(1);
        }
    }
}
