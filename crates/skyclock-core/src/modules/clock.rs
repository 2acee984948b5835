use std::{sync::Arc, time::Duration};

use chrono::{Local, NaiveTime};
use log::{debug, error};
use skyclock_proto::{
    config::ClockConfig,
    ports::{
        display::{DisplayLocator, DisplayTarget},
        time_source::TimeSource,
    },
    time_format::format_clock,
};
use tokio::{
    runtime::Handle,
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};

/// Reads the viewer's local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalTimeSource;

impl TimeSource for LocalTimeSource {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock data for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockData {
    pub current_time: NaiveTime,
}

impl ClockData {
    pub fn capture<S: TimeSource + ?Sized>(source: &S) -> Self {
        Self {
            current_time: source.now(),
        }
    }

    /// Format the captured time as `H:MM AM/PM`
    pub fn text(&self) -> String {
        format_clock(self.current_time)
    }
}

/// Clock widget bound to a single display.
///
/// The widget owns its refresh timer: [`ClockWidget::start`] spawns a tick task
/// on the given runtime and [`ClockWidget::stop`] (or dropping the widget)
/// aborts it.
pub struct ClockWidget<D, S = LocalTimeSource> {
    target: Arc<D>,
    source: Arc<S>,
    refresh_interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl<D> ClockWidget<D, LocalTimeSource>
where
    D: DisplayTarget + 'static,
{
    /// Locate the display and, if present, render and start refreshing it.
    ///
    /// Returns `None` without side effects when the locator has no element
    /// registered under the configured id.
    pub fn initialize<L>(locator: &L, config: &ClockConfig, runtime: &Handle) -> Option<Self>
    where
        L: DisplayLocator<Target = D>,
    {
        Self::initialize_with_source(locator, config, LocalTimeSource, runtime)
    }
}

impl<D, S> ClockWidget<D, S>
where
    D: DisplayTarget + 'static,
    S: TimeSource + 'static,
{
    pub fn new(target: D, source: S, refresh_interval: Duration) -> Self {
        Self {
            target: Arc::new(target),
            source: Arc::new(source),
            refresh_interval,
            task: None,
        }
    }

    /// Same as [`ClockWidget::initialize`] with an explicit time source.
    pub fn initialize_with_source<L>(
        locator: &L,
        config: &ClockConfig,
        source: S,
        runtime: &Handle,
    ) -> Option<Self>
    where
        L: DisplayLocator<Target = D>,
    {
        let Some(target) = locator.locate(&config.element_id) else {
            debug!("No display with id '{}', clock disabled", config.element_id);
            return None;
        };

        let mut widget = Self::new(target, source, config.refresh_interval);
        widget.start(runtime);
        Some(widget)
    }

    /// Write the current time into the display and return the written text.
    pub fn render(&self) -> String {
        render_once(self.target.as_ref(), self.source.as_ref())
    }

    /// Render immediately and refresh every `refresh_interval` until stopped.
    ///
    /// Calling `start` on a running widget replaces its timer.
    pub fn start(&mut self, runtime: &Handle) {
        self.stop();
        self.render();

        let target = Arc::clone(&self.target);
        let source = Arc::clone(&self.source);
        let period = self.refresh_interval;

        self.task = Some(runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                render_once(target.as_ref(), source.as_ref());
            }
        }));

        debug!("Clock started with {period:?} refresh");
    }

    /// Cancel the refresh timer. Does nothing if the widget is not running.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("Clock stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

impl<D, S> Drop for ClockWidget<D, S> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn render_once<D, S>(target: &D, source: &S) -> String
where
    D: DisplayTarget + ?Sized,
    S: TimeSource + ?Sized,
{
    let text = ClockData::capture(source).text();

    if let Err(err) = target.set_text(&text) {
        error!("Failed to update clock display: {err}");
    }

    text
}
