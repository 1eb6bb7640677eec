//! Animation state machine
//!
//! Sequences the display between hibernation, the stop pose, idling and
//! walking/running runs. The animator never sleeps by itself: every
//! [`Animator::step`] does one unit of work and returns the [`Step`] the
//! caller has to perform before stepping again.

mod config;

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::LedWire;
use crate::catalog::{Catalog, CharacterProfile};
use crate::color::Grb;
use crate::compositor::DrawMode;
use crate::correction::CorrectedPatternSet;
use crate::input::ButtonEdges;
use crate::strip::StripDriver;
use crate::timer::{PeriodicTimer, TickCounter, TimerError};

pub use config::{AnimatorConfig, CadenceConfig, RenderConfig};

const STATE_NAME_HIBERNATING: &str = "hibernating";
const STATE_NAME_STOPPED: &str = "stopped";
const STATE_NAME_IDLE: &str = "idle";
const STATE_NAME_WALKING: &str = "walking";
const STATE_NAME_RUNNING: &str = "running";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    /// Display blank, waiting in low power for any button
    Hibernating,
    /// Loading the character and showing its stop pose
    Stopped,
    /// Stop pose shown, waiting for a button or the idle timeout
    Idle,
    /// Animating at walk cadence
    Walking,
    /// Animating at run cadence
    Running,
}

impl AnimationState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hibernating => STATE_NAME_HIBERNATING,
            Self::Stopped => STATE_NAME_STOPPED,
            Self::Idle => STATE_NAME_IDLE,
            Self::Walking => STATE_NAME_WALKING,
            Self::Running => STATE_NAME_RUNNING,
        }
    }

    pub const fn is_animating(self) -> bool {
        matches!(self, Self::Walking | Self::Running)
    }
}

/// What the caller has to do before the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Step again right away
    Continue,
    /// Block for the given time, then step again
    Sleep(Duration),
    /// Arm the button wake-up, wait in low power, disarm, then step again
    Hibernate,
}

/// Fatal animator failure, ends the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorError {
    /// The cadence timer could not be armed
    TimerArm(TimerError),
}

impl core::fmt::Display for AnimatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TimerArm(err) => write!(f, "animation run aborted: {err}"),
        }
    }
}

/// Step interval and transition blend time of the current speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    pub wait: Duration,
    pub transition: Duration,
}

/// Sub-steps of one animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderPhase {
    /// Previous frame dimmed with the current one overlaid
    Blend,
    /// Current frame at full color
    Hold,
    /// Move to the next frame
    Advance,
}

/// Animation controller
///
/// `PATTERNS` is the capacity of the corrected pattern set and must hold the
/// largest character in the catalog.
pub struct Animator<
    'a,
    W: LedWire,
    T: PeriodicTimer,
    const WIDTH: usize,
    const HEIGHT: usize,
    const PATTERNS: usize,
> {
    // External dependencies and configuration
    config: AnimatorConfig,
    catalog: &'a Catalog,
    driver: StripDriver<W, WIDTH, HEIGHT>,
    timer: T,
    ticks: &'a TickCounter,

    // Internal state
    patterns: CorrectedPatternSet<PATTERNS>,
    state: AnimationState,
    phase: RenderPhase,
    asleep: bool,
    idle_since: Instant,
    character: usize,
    group: usize,
    current: usize,
    previous: usize,
}

impl<'a, W, T, const WIDTH: usize, const HEIGHT: usize, const PATTERNS: usize>
    Animator<'a, W, T, WIDTH, HEIGHT, PATTERNS>
where
    W: LedWire,
    T: PeriodicTimer,
{
    /// Create an animator in the hibernating state
    pub fn new(
        config: AnimatorConfig,
        catalog: &'a Catalog,
        driver: StripDriver<W, WIDTH, HEIGHT>,
        timer: T,
        ticks: &'a TickCounter,
    ) -> Self {
        Self {
            config,
            catalog,
            driver,
            timer,
            ticks,
            patterns: CorrectedPatternSet::new(),
            state: AnimationState::Hibernating,
            phase: RenderPhase::Blend,
            asleep: false,
            idle_since: Instant::from_ticks(0),
            character: 0,
            group: 0,
            current: 0,
            previous: 0,
        }
    }

    /// Run one unit of work
    ///
    /// `edges` are the debounced button presses seen since the last step.
    pub fn step(&mut self, now: Instant, edges: ButtonEdges) -> Result<Step, AnimatorError> {
        match self.state {
            AnimationState::Hibernating => Ok(self.step_hibernating(now)),
            AnimationState::Stopped => Ok(self.step_stopped(now)),
            AnimationState::Idle => self.step_idle(now, edges),
            AnimationState::Walking | AnimationState::Running => {
                Ok(self.step_animating(now, edges))
            }
        }
    }

    pub const fn state(&self) -> AnimationState {
        self.state
    }

    pub const fn character_index(&self) -> usize {
        self.character
    }

    pub fn character(&self) -> Option<&'static CharacterProfile> {
        self.catalog.get(self.character)
    }

    pub const fn group_index(&self) -> usize {
        self.group
    }

    pub const fn pattern_index(&self) -> usize {
        self.current
    }

    pub const fn previous_pattern_index(&self) -> usize {
        self.previous
    }

    pub fn patterns(&self) -> &CorrectedPatternSet<PATTERNS> {
        &self.patterns
    }

    pub fn driver(&self) -> &StripDriver<W, WIDTH, HEIGHT> {
        &self.driver
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Timing of the current speed, derived from the tick count
    pub fn cadence(&self) -> Cadence {
        let cadence = &self.config.cadence;
        let Some(profile) = self.character() else {
            return Cadence {
                wait: cadence.idle_poll,
                transition: Duration::from_ticks(0),
            };
        };
        if self.ticks.count() < cadence.run_from_tick {
            Cadence {
                wait: profile.walk_wait,
                transition: profile.walk_wait / cadence.walk_transition_divisor.max(1),
            }
        } else {
            Cadence {
                wait: profile.run_wait,
                transition: profile.run_wait / cadence.run_transition_divisor.max(1),
            }
        }
    }

    fn step_hibernating(&mut self, now: Instant) -> Step {
        if self.asleep {
            // Woken up by a button
            self.asleep = false;
            self.enter(AnimationState::Stopped, now);
            return Step::Continue;
        }

        self.driver.frame_mut().clear(Grb::BLACK);
        self.driver.show(self.config.scan);
        self.asleep = true;
        Step::Hibernate
    }

    fn step_stopped(&mut self, now: Instant) -> Step {
        self.driver.frame_mut().clear(Grb::BLACK);

        match self.load_character() {
            Some(mode) => {
                if let Some(pose) = self.patterns.stop_pose() {
                    self.driver
                        .frame_mut()
                        .draw_pattern(pose, self.config.render.origin, mode);
                }
            }
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[Animator.stopped] character {} unusable", self.character);
            }
        }

        self.driver.show(self.config.scan);
        self.enter(AnimationState::Idle, now);
        Step::Continue
    }

    fn step_idle(&mut self, now: Instant, edges: ButtonEdges) -> Result<Step, AnimatorError> {
        if edges.change {
            self.character = self.catalog.next_index(self.character);
            self.enter(AnimationState::Stopped, now);
            return Ok(Step::Continue);
        }

        if edges.start {
            if self.patterns.is_loaded() {
                self.start_run(now)?;
                return Ok(Step::Continue);
            }
            #[cfg(feature = "esp32-log")]
            println!("[Animator.idle] start ignored, no patterns loaded");
        }

        let idle_for = now
            .checked_duration_since(self.idle_since)
            .unwrap_or(Duration::from_ticks(0));
        if idle_for >= self.config.cadence.idle_timeout {
            self.enter(AnimationState::Hibernating, now);
            return Ok(Step::Continue);
        }

        Ok(Step::Sleep(self.config.cadence.idle_poll))
    }

    fn step_animating(&mut self, now: Instant, edges: ButtonEdges) -> Step {
        if self.ticks.take_expired() {
            self.finish_run();
            self.enter(AnimationState::Stopped, now);
            return Step::Continue;
        }

        if edges.change {
            self.finish_run();
            self.character = self.catalog.next_index(self.character);
            self.enter(AnimationState::Stopped, now);
            return Step::Continue;
        }

        if self.ticks.take_boundary() {
            self.next_group();
        }

        let state = if self.ticks.count() < self.config.cadence.run_from_tick {
            AnimationState::Walking
        } else {
            AnimationState::Running
        };
        if state != self.state {
            self.enter(state, now);
        }

        let cadence = self.cadence();
        match self.phase {
            RenderPhase::Blend => {
                self.render_blend();
                self.phase = RenderPhase::Hold;
                Step::Sleep(cadence.transition)
            }
            RenderPhase::Hold => {
                self.render_hold();
                self.phase = RenderPhase::Advance;
                Step::Sleep(cadence.wait)
            }
            RenderPhase::Advance => {
                self.advance_frame();
                self.phase = RenderPhase::Blend;
                Step::Continue
            }
        }
    }

    /// Rebuild the corrected set for the active character
    ///
    /// Returns the draw mode for its stop pose, `None` when the character
    /// could not be loaded.
    #[cfg_attr(not(feature = "esp32-log"), allow(unused_variables))]
    fn load_character(&mut self) -> Option<DrawMode> {
        let profile = self.catalog.get(self.character)?;
        if let Err(err) = self.patterns.load_profile(profile) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Animator.load_character] failed to load {}: {}",
                profile.name, err
            );
            return None;
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[Animator.load_character] loaded {} ({} patterns)",
            profile.name,
            self.patterns.count()
        );
        Some(self.draw_mode(profile, profile.overlay, 255))
    }

    fn start_run(&mut self, now: Instant) -> Result<(), AnimatorError> {
        if let Err(err) = self.timer.arm(self.config.cadence.tick_period) {
            #[cfg(feature = "esp32-log")]
            println!("[Animator.start_run] {}", err);
            return Err(AnimatorError::TimerArm(err));
        }
        self.ticks.start(self.config.cadence.ticks_per_run);

        self.group = 0;
        self.current = 0;
        self.previous = 0;
        self.phase = RenderPhase::Blend;
        self.enter(AnimationState::Walking, now);
        Ok(())
    }

    fn finish_run(&mut self) {
        self.timer.disarm();
        self.ticks.stop();
        self.phase = RenderPhase::Blend;
    }

    /// Switch to the next populated group, restarting its frames
    fn next_group(&mut self) {
        let groups = self.patterns.group_count();
        self.group = if groups == 0 {
            0
        } else {
            (self.group + 1) % groups
        };
        self.current = 0;
        self.previous = 0;
    }

    fn advance_frame(&mut self) {
        let frames = self.patterns.frame_count(self.group).unwrap_or(1).max(1);
        self.previous = self.current;
        self.current = (self.current + 1) % frames;
    }

    fn render_blend(&mut self) {
        let Some(profile) = self.catalog.get(self.character) else {
            return;
        };
        let render = self.config.render;
        let previous = self.draw_mode(profile, true, render.previous_scale);
        let current = self.draw_mode(profile, true, render.blend_scale);

        let frame = self.driver.frame_mut();
        if let Some(pattern) = self.patterns.frame(self.group, self.previous) {
            frame.draw_pattern(pattern, render.origin, previous);
        }
        if let Some(pattern) = self.patterns.frame(self.group, self.current) {
            frame.draw_pattern(pattern, render.origin, current);
        }
        self.driver.show(self.config.scan);
    }

    fn render_hold(&mut self) {
        let Some(profile) = self.catalog.get(self.character) else {
            return;
        };
        let mode = self.draw_mode(profile, profile.overlay, 255);

        if let Some(pattern) = self.patterns.frame(self.group, self.current) {
            self.driver
                .frame_mut()
                .draw_pattern(pattern, self.config.render.origin, mode);
        }
        self.driver.show(self.config.scan);
    }

    fn draw_mode(&self, profile: &CharacterProfile, overlay: bool, scale: u8) -> DrawMode {
        let mode = DrawMode::OPAQUE.with_overlay(overlay).with_scale(scale);
        if profile.color_replace {
            mode.with_replace(self.config.render.replace_color)
        } else {
            mode
        }
    }

    fn enter(&mut self, state: AnimationState, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[Animator] {} -> {}", self.state.as_str(), state.as_str());
        match state {
            AnimationState::Hibernating => self.asleep = false,
            AnimationState::Idle => self.idle_since = now,
            AnimationState::Stopped | AnimationState::Walking | AnimationState::Running => {}
        }
        self.state = state;
    }
}
