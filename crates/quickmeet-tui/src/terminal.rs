//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard, mouse and resize events and ratatui for rendering. The controls
//! hide timer is a single tokio sleep owned by the driver.

use std::{
    io::{self, Stdout, stdout},
    pin::Pin,
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use quickmeet_app::{App, AppEvent, Driver, KeyInput, TimerId};
use quickmeet_core::Environment;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::time::{Interval, MissedTickBehavior, Sleep};

use crate::{SystemEnv, ui};

/// How often the header clock is refreshed.
const CLOCK_PERIOD: Duration = Duration::from_secs(1);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// The one armed hide timer.
struct ArmedTimer {
    id: TimerId,
    sleep: Pin<Box<Sleep>>,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). Owns at most one
/// armed hide timer and the clock interval.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    env: SystemEnv,
    cell_width_px: u32,
    hide_timer: Option<ArmedTimer>,
    clock: Interval,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen and start listening.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(env: SystemEnv, cell_width_px: u32) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?.execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        let mut clock = tokio::time::interval(CLOCK_PERIOD);
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Ok(Self { terminal, event_stream, env, cell_width_px, hide_timer: None, clock })
    }

    /// Current window width in pixels.
    pub fn width_px(&self) -> Result<u32, TerminalError> {
        let (cols, _) = crossterm::terminal::size()?;
        Ok(width_px(cols, self.cell_width_px))
    }

    /// Convert a crossterm event to an `AppEvent`.
    fn convert_event(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    return Some(AppEvent::Key(KeyInput::Esc));
                }
                convert_key(key.code).map(AppEvent::Key)
            },
            Event::Mouse(_) => Some(AppEvent::PointerMoved),
            Event::Resize(cols, _) => {
                Some(AppEvent::Resize { width_px: width_px(cols, self.cell_width_px) })
            },
            _ => None,
        }
    }
}

/// Window width in pixels for a terminal `cols` wide.
pub fn width_px(cols: u16, cell_width_px: u32) -> u32 {
    u32::from(cols).saturating_mul(cell_width_px)
}

/// Convert crossterm `KeyCode` to `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

/// Resolves when the armed timer fires. Never resolves with none armed.
/// Arm the hide timer. The App cancels the pending expiry before scheduling
/// a new one, so the slot is always empty here.
fn arm_timer(slot: &mut Option<ArmedTimer>, timer: TimerId, after: Duration) {
    debug_assert!(
        slot.is_none(),
        "hide timer {timer} scheduled while {:?} is still armed",
        slot.as_ref().map(|armed| armed.id)
    );
    *slot = Some(ArmedTimer { id: timer, sleep: Box::pin(tokio::time::sleep(after)) });
}

fn disarm_timer(slot: &mut Option<ArmedTimer>, timer: TimerId) {
    if slot.as_ref().is_some_and(|armed| armed.id == timer) {
        *slot = None;
    }
}

async fn timer_fired(timer: &mut Option<ArmedTimer>) -> TimerId {
    match timer {
        Some(armed) => {
            armed.sleep.as_mut().await;
            armed.id
        },
        None => std::future::pending().await,
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                maybe_event = self.event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if let Some(app_event) = self.convert_event(event) {
                                return Ok(Some(app_event));
                            }
                        },
                        Some(Err(e)) => return Err(TerminalError::Io(e)),
                        None => return Ok(None),
                    }
                }

                timer = timer_fired(&mut self.hide_timer) => {
                    self.hide_timer = None;
                    return Ok(Some(AppEvent::ControlsTimerExpired { timer }));
                }

                _ = self.clock.tick() => {
                    return Ok(Some(AppEvent::Clock { unix_secs: self.env.wall_clock_secs() }));
                }
            }
        }
    }

    fn schedule_timer(&mut self, timer: TimerId, after: Duration) {
        arm_timer(&mut self.hide_timer, timer, after);
    }

    fn cancel_timer(&mut self, timer: TimerId) {
        disarm_timer(&mut self.hide_timer, timer);
    }

    fn render<E: Environment>(&mut self, app: &App<E>) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        self.hide_timer = None;
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(DisableMouseCapture).and_then(|out| out.execute(LeaveAlternateScreen));
    }
}

#[cfg(test)]
mod tests {
    use quickmeet_app::AppAction;
    use quickmeet_harness::SimEnv;

    use super::*;

    fn scheduled(actions: &[AppAction]) -> TimerId {
        actions
            .iter()
            .find_map(|a| match a {
                AppAction::ScheduleHideControls { timer, .. } => Some(*timer),
                _ => None,
            })
            .expect("hide scheduled")
    }

    /// Timer ids for the mount expiry and the one replacing it.
    fn mount_then_pointer() -> (TimerId, TimerId) {
        let mut app = App::new(SimEnv::with_seed(3), 1024);
        let first = scheduled(&app.navigate("/meeting/tty".parse().expect("valid path")));
        let second = scheduled(&app.handle(AppEvent::PointerMoved));
        (first, second)
    }

    #[tokio::test]
    async fn cancel_then_schedule_keeps_one_timer() {
        let (first, second) = mount_then_pointer();
        let mut slot = None;

        arm_timer(&mut slot, first, Duration::from_secs(60));
        disarm_timer(&mut slot, first);
        arm_timer(&mut slot, second, Duration::from_millis(1));

        assert_eq!(timer_fired(&mut slot).await, second);
    }

    #[tokio::test]
    async fn stale_cancel_leaves_live_timer_armed() {
        let (first, second) = mount_then_pointer();
        let mut slot = None;

        arm_timer(&mut slot, second, Duration::from_secs(60));
        disarm_timer(&mut slot, first);

        assert_eq!(slot.as_ref().map(|armed| armed.id), Some(second));
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    #[should_panic(expected = "still armed")]
    async fn scheduling_over_armed_timer_panics_in_debug() {
        let (first, second) = mount_then_pointer();
        let mut slot = None;

        arm_timer(&mut slot, first, Duration::from_secs(60));
        arm_timer(&mut slot, second, Duration::from_secs(60));
    }

    #[test]
    fn width_scales_with_cell_width() {
        assert_eq!(width_px(58, 8), 464);
        assert_eq!(width_px(59, 8), 472);
        assert_eq!(width_px(u16::MAX, u32::MAX), u32::MAX);
    }

    #[test]
    fn printable_and_editing_keys_convert() {
        assert_eq!(convert_key(KeyCode::Char('m')), Some(KeyInput::Char('m')));
        assert_eq!(convert_key(KeyCode::Tab), Some(KeyInput::Tab));
        assert_eq!(convert_key(KeyCode::F(1)), None);
    }
}
