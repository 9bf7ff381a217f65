//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O and host timers

use quickmeet_core::{Environment, Route};

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `E`: Environment for randomness and wall-clock time
pub struct Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    driver: D,
    app: App<E>,
    initial_route: Route,
}

impl<D, E> Runtime<D, E>
where
    D: Driver,
    E: Environment,
{
    /// Create a new runtime that starts at `initial_route`.
    pub fn new(driver: D, env: E, initial_width_px: u32, initial_route: Route) -> Self {
        let app = App::new(env, initial_width_px);
        Self { driver, app, initial_route }
    }

    /// Run the main event loop.
    ///
    /// Navigates to the initial route, then polls the driver and feeds each
    /// event to the App until it quits or the input source closes.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        if !self.start()? {
            while self.step().await? {}
        }

        self.driver.stop();
        Ok(())
    }

    /// Render the first frame and enter the initial route.
    ///
    /// Returns `false` if the application asked to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn start(&mut self) -> Result<bool, D::Error> {
        self.driver.render(&self.app)?;

        let actions = match &self.initial_route {
            Route::Landing => Vec::new(),
            route => self.app.navigate(route.clone()),
        };
        Ok(!self.process_actions(actions)?)
    }

    /// Process one event.
    ///
    /// Returns `false` once the application should stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn step(&mut self) -> Result<bool, D::Error> {
        let Some(event) = self.driver.poll_event().await? else {
            tracing::debug!("input closed");
            return Ok(false);
        };

        Ok(!self.dispatch(event)?)
    }

    /// Feed one event to the App and execute the resulting actions.
    ///
    /// Returns `true` if should quit.
    fn dispatch(&mut self, event: AppEvent) -> Result<bool, D::Error> {
        let actions = self.app.handle(event);
        self.process_actions(actions)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => return Ok(true),
                AppAction::ScheduleHideControls { timer, after } => {
                    self.driver.schedule_timer(timer, after);
                },
                AppAction::CancelHideControls { timer } => self.driver.cancel_timer(timer),
                AppAction::Navigated(route) => {
                    tracing::info!(path = %route, "route changed");
                },
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App<E> {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
