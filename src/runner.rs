//! Control loop
//!
//! Portable main loop without async/await or platform-specific timers.
//! The [`Board`] supplies the clock, blocking sleeps, low-power waits and
//! raw button levels; the loop debounces the buttons, steps the animator and
//! performs whatever the step asks for.
//!
//! # Usage
//!
//! ```ignore
//! let mut buttons = Buttons::new(&DebounceConfig::DEFAULT);
//! let err = run(&mut animator, &mut board, &mut buttons);
//! panic!("{err}");
//! ```

use embassy_time::{Duration, Instant};

use crate::LedWire;
use crate::animator::{Animator, AnimatorError, Step};
use crate::input::{Buttons, RawButtons};
use crate::timer::PeriodicTimer;

/// Platform services used by the control loop
pub trait Board {
    /// Current time
    fn now(&self) -> Instant;

    /// Block for `duration`
    fn sleep(&mut self, duration: Duration);

    /// Enable the wake-up edge on both buttons, wait in low power until one
    /// fires, then disable the wake-up again
    fn hibernate(&mut self);

    /// Sample both buttons, already adjusted for their polarity
    fn read_buttons(&mut self) -> RawButtons;
}

/// Run one iteration of the control loop
///
/// Returns the step that was performed.
pub fn poll<B, W, T, const WIDTH: usize, const HEIGHT: usize, const PATTERNS: usize>(
    animator: &mut Animator<'_, W, T, WIDTH, HEIGHT, PATTERNS>,
    board: &mut B,
    buttons: &mut Buttons,
) -> Result<Step, AnimatorError>
where
    B: Board,
    W: LedWire,
    T: PeriodicTimer,
{
    let now = board.now();
    let edges = buttons.update(board.read_buttons(), now);

    let step = animator.step(now, edges)?;
    match step {
        Step::Continue => {}
        Step::Sleep(duration) => board.sleep(duration),
        Step::Hibernate => {
            board.hibernate();
            // The waking press carries no meaning
            let raw = board.read_buttons();
            buttons.suppress_until_release(raw, board.now());
        }
    }
    Ok(step)
}

/// Run the control loop until a fatal error
pub fn run<B, W, T, const WIDTH: usize, const HEIGHT: usize, const PATTERNS: usize>(
    animator: &mut Animator<'_, W, T, WIDTH, HEIGHT, PATTERNS>,
    board: &mut B,
    buttons: &mut Buttons,
) -> AnimatorError
where
    B: Board,
    W: LedWire,
    T: PeriodicTimer,
{
    loop {
        if let Err(err) = poll(animator, board, buttons) {
            return err;
        }
    }
}
