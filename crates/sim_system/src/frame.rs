//! The frame loop.
//!
//! Each frame:
//!
//! 1. Read the clock; `dt` is the time since the previous frame.
//! 2. Write intents from the [`InputSource`] into `Input` components.
//! 3. Run the [`Pipeline`].
//! 4. Hand the display records to the [`PresentationSink`].
//!
//! [`FrameLoop::run`] repeats this at the configured frame rate until the
//! frame limit is reached or a system fails.

use std::time::{Duration, Instant};

use sim_component::{Entity, Input, World};
use tracing::{debug, error, info, warn};

use crate::clock::Clock;
use crate::config::{FrameConfig, SimConfig};
use crate::context::SystemContext;
use crate::error::SystemError;
use crate::pipeline::Pipeline;
use crate::systems::DisplayRecord;

/// Supplies per-frame intent flags for controllable entities.
pub trait InputSource {
    /// Intents for this frame. Each replaces the entity's `Input` wholesale.
    fn poll(&mut self, frame_id: u64) -> Vec<(Entity, Input)>;
}

/// Consumes each frame's display records.
pub trait PresentationSink {
    fn present(&mut self, ctx: &SystemContext, records: &[DisplayRecord]);
}

/// An input source that never changes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInput;

impl InputSource for NullInput {
    fn poll(&mut self, _frame_id: u64) -> Vec<(Entity, Input)> {
        Vec::new()
    }
}

impl PresentationSink for Vec<Vec<DisplayRecord>> {
    fn present(&mut self, _ctx: &SystemContext, records: &[DisplayRecord]) {
        self.push(records.to_vec());
    }
}

/// Summary of one completed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame_id: u64,
    pub dt: f64,
    /// `(system name, entities affected)` in execution order.
    pub affected: Vec<(&'static str, usize)>,
    /// Number of display records handed to the sink.
    pub records: usize,
}

/// Drives the pipeline once per frame.
#[derive(Debug)]
pub struct FrameLoop<C, I, S> {
    /// Current frame counter.
    frame_id: u64,
    /// Frame rate and frame limit.
    config: FrameConfig,
    /// Clock reading at the end of the previous frame.
    last_frame: Duration,
    world: World,
    pipeline: Pipeline,
    clock: C,
    input: I,
    sink: S,
}

impl<C: Clock, I: InputSource, S: PresentationSink> FrameLoop<C, I, S> {
    /// Create a frame loop over `world`. The first frame's `dt` is measured
    /// from this call.
    #[must_use]
    pub fn new(
        world: World,
        sim: &SimConfig,
        config: FrameConfig,
        clock: C,
        input: I,
        sink: S,
    ) -> Self {
        let last_frame = clock.now();
        Self {
            frame_id: 0,
            config,
            last_frame,
            world,
            pipeline: Pipeline::new(sim),
            clock,
            input,
            sink,
        }
    }

    /// Returns the number of frames run so far.
    #[must_use]
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }

    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one frame.
    ///
    /// # Errors
    ///
    /// Returns the [`SystemError`] of the first system that failed. The
    /// frame counter and clock reading still advance.
    pub fn step(&mut self) -> Result<FrameReport, SystemError> {
        let now = self.clock.now();
        // A clock that steps backwards yields a zero-length frame.
        let dt = now.saturating_sub(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.frame_id += 1;

        let ctx = SystemContext::new(self.frame_id, dt, now);
        self.apply_intents();

        let output = self.pipeline.run_frame(self.world.store_mut(), &ctx)?;
        self.sink.present(&ctx, &output.records);

        debug!(
            frame_id = self.frame_id,
            dt,
            records = output.records.len(),
            "frame complete"
        );

        Ok(FrameReport {
            frame_id: self.frame_id,
            dt,
            affected: output.affected,
            records: output.records.len(),
        })
    }

    fn apply_intents(&mut self) {
        let intents = self.input.poll(self.frame_id);
        let inputs = &mut self.world.store_mut().inputs;
        for (entity, intent) in intents {
            match inputs.get_mut(entity) {
                Some(slot) => *slot = intent,
                None => warn!(
                    frame_id = self.frame_id,
                    %entity,
                    "input intent for entity without an Input component ignored"
                ),
            }
        }
    }

    /// Run frames at the configured rate until `max_frames` is reached
    /// (or forever when it is 0).
    ///
    /// # Errors
    ///
    /// Stops at, logs, and returns the first [`SystemError`]. Fails with
    /// [`SystemError::FrameRate`] before the first frame if the configured
    /// rate has no usable frame budget.
    pub fn run(&mut self) -> Result<(), SystemError> {
        let Some(frame_budget) = self.config.frame_budget() else {
            error!(frame_rate = self.config.frame_rate, "invalid frame rate");
            return Err(SystemError::FrameRate(self.config.frame_rate));
        };
        let mut frame_count = 0u64;

        info!(
            frame_rate = self.config.frame_rate,
            max_frames = self.config.max_frames,
            entities = self.world.entity_count(),
            "starting frame loop"
        );

        loop {
            let start = Instant::now();

            if let Err(err) = self.step() {
                error!(frame_id = self.frame_id, error = %err, "frame failed");
                return Err(err);
            }

            frame_count += 1;
            if self.config.max_frames > 0 && frame_count >= self.config.max_frames {
                info!(frames = frame_count, "frame loop complete");
                return Ok(());
            }

            let elapsed = start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            } else {
                warn!(
                    frame_id = self.frame_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = frame_budget.as_millis() as u64,
                    "frame exceeded time budget"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sim_component::{
        Augmentation, AugmentationKind, Collision, ComponentError, ComponentKind, EnergyCore,
        Health, Position, Sprite, Velocity, Weapon,
    };

    use super::*;
    use crate::clock::{ManualClock, SystemClock};

    /// Replays a fixed script of intents.
    struct Scripted(Vec<(Entity, Input)>);

    impl InputSource for Scripted {
        fn poll(&mut self, _frame_id: u64) -> Vec<(Entity, Input)> {
            self.0.clone()
        }
    }

    fn recorder() -> Vec<Vec<DisplayRecord>> {
        Vec::new()
    }

    fn demo_world() -> (World, Entity, Entity) {
        let mut world = World::new();
        let mut player = |x: f32, kind| {
            world
                .create_entity(vec![
                    Position::new(x, 0.0).into(),
                    Velocity::ZERO.into(),
                    Sprite::new("player").into(),
                    Health::new(100).into(),
                    Weapon::new(20, "plasma_katana").into(),
                    Augmentation::new(kind).into(),
                    Input::default().into(),
                    EnergyCore::new(50, 100).into(),
                ])
                .unwrap()
        };
        let p1 = player(0.0, AugmentationKind::Cloaking);
        let p2 = player(20.0, AugmentationKind::JetBoost);
        world
            .create_entity(vec![
                Position::new(0.0, -10.0).into(),
                Collision::new(200.0, 10.0).into(),
            ])
            .unwrap();
        (world, p1, p2)
    }

    #[test]
    fn test_dt_measured_from_clock() {
        let (world, _, _) = demo_world();
        let clock = ManualClock::new(Duration::from_secs(100));
        let mut frames = FrameLoop::new(
            world,
            &SimConfig::default(),
            FrameConfig::default(),
            &clock,
            NullInput,
            recorder(),
        );

        clock.advance(Duration::from_millis(500));
        let report = frames.step().unwrap();
        assert_eq!(report.frame_id, 1);
        assert!((report.dt - 0.5).abs() < 1e-9);

        clock.advance(Duration::from_millis(16));
        let report = frames.step().unwrap();
        assert_eq!(report.frame_id, 2);
        assert!((report.dt - 0.016).abs() < 1e-9);

        // Going backwards is a zero-length frame.
        clock.set(Duration::from_secs(1));
        assert_eq!(frames.step().unwrap().dt, 0.0);
    }

    #[test]
    fn test_intents_reach_input_system() {
        let (world, p1, p2) = demo_world();
        let clock = ManualClock::new(Duration::ZERO);
        let script = Scripted(vec![
            (
                p1,
                Input {
                    right: true,
                    attack: true,
                    ..Input::default()
                },
            ),
            (
                Entity(99),
                Input {
                    jump: true,
                    ..Input::default()
                },
            ),
        ]);
        let mut frames = FrameLoop::new(
            world,
            &SimConfig::default(),
            FrameConfig::default(),
            &clock,
            script,
            recorder(),
        );

        clock.advance(Duration::from_millis(100));
        let report = frames.step().unwrap();

        let store = frames.world().store();
        assert_eq!(store.get::<Velocity>(p1).unwrap().x, 5.0);
        assert_eq!(store.get::<Health>(p2).unwrap().hp, 80);
        assert_eq!(report.affected[3], ("combat", 1));
        assert!(!store.contains::<Input>(Entity(99)));
    }

    #[test]
    fn test_sink_receives_records_every_frame() {
        let (world, _, _) = demo_world();
        let clock = ManualClock::new(Duration::ZERO);
        let mut frames = FrameLoop::new(
            world,
            &SimConfig::default(),
            FrameConfig::default(),
            &clock,
            NullInput,
            recorder(),
        );

        for _ in 0..3 {
            clock.advance(Duration::from_millis(16));
            frames.step().unwrap();
        }
        let sink = frames.sink();
        assert_eq!(sink.len(), 3);
        assert_eq!(sink[0].len(), 2);
        assert_eq!(sink[2][0].to_string(), "player at (0, 0) HP: 100");
    }

    #[test]
    fn test_resource_sharing_follows_clock_windows() {
        let (world, p1, p2) = demo_world();
        let clock = ManualClock::new(Duration::from_millis(1_000));
        let mut frames = FrameLoop::new(
            world,
            &SimConfig::default(),
            FrameConfig::default(),
            &clock,
            NullInput,
            recorder(),
        );

        frames.step().unwrap();
        let cores = |world: &World| {
            let store = world.store();
            (
                store.get::<EnergyCore>(p1).unwrap().amount,
                store.get::<EnergyCore>(p2).unwrap().amount,
            )
        };
        assert_eq!(cores(frames.world()), (80, 20));

        clock.set(Duration::from_millis(3_000));
        frames.step().unwrap();
        assert_eq!(cores(frames.world()), (20, 80));
    }

    #[test]
    fn test_run_limited_frames() {
        let (world, _, _) = demo_world();
        let config = FrameConfig {
            frame_rate: 1000.0,
            max_frames: 5,
        };
        let mut frames = FrameLoop::new(
            world,
            &SimConfig::default(),
            config,
            SystemClock,
            NullInput,
            recorder(),
        );
        frames.run().unwrap();
        assert_eq!(frames.frame_id(), 5);
        assert_eq!(frames.sink().len(), 5);
    }

    #[test]
    fn test_run_rejects_unusable_frame_rate() {
        for frame_rate in [0.0, -1.0, 1e-30, f64::NAN] {
            let (world, _, _) = demo_world();
            let config = FrameConfig {
                frame_rate,
                max_frames: 1,
            };
            let mut frames = FrameLoop::new(
                world,
                &SimConfig::default(),
                config,
                SystemClock,
                NullInput,
                recorder(),
            );

            let err = frames.run().unwrap_err();
            assert!(matches!(err, SystemError::FrameRate(_)));
            assert_eq!(frames.frame_id(), 0);
        }
    }

    #[test]
    fn test_run_stops_on_precondition_violation() {
        let mut world = World::new();
        world
            .create_entity(vec![Sprite::new("ghost").into()])
            .unwrap();
        let config = FrameConfig {
            frame_rate: 1000.0,
            max_frames: 0,
        };
        let mut frames = FrameLoop::new(
            world,
            &SimConfig::default(),
            config,
            SystemClock,
            NullInput,
            recorder(),
        );

        let err = frames.run().unwrap_err();
        assert_eq!(frames.frame_id(), 1);
        assert_eq!(
            err,
            SystemError::Component(ComponentError::MissingComponent {
                system: "presentation",
                entity: Entity(0),
                kind: ComponentKind::Position,
            })
        );
        assert!(frames.sink().is_empty());
    }
}
