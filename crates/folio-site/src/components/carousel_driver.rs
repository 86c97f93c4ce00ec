//! Carousel lifecycle hook for the project modal.
//!
//! The open/close transition is applied while rendering, so the first frame
//! after opening already shows picture 0. Only the timer task lives in an
//! effect, which is re-run whenever the open flag or the project changes.

use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::autoplay::auto_advance;
use crate::config::CarouselSettings;
use crate::content::Project;
use crate::state::{Carousel, ModalView, Session};

/// Manual navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStep {
    Next,
    Previous,
}

/// Handle to the carousel state and its auto-advance task.
#[derive(Clone, Copy)]
pub struct CarouselDriver {
    carousel: Signal<Carousel>,
    ticker: Signal<Option<Task>>,
    settings: CarouselSettings,
}

/// Keeps a [`Carousel`] in step with `is_open` and `project`, and runs its
/// timer while open.
pub fn use_carousel_driver(
    is_open: bool,
    project: Option<Project>,
    settings: CarouselSettings,
) -> CarouselDriver {
    let mut carousel = use_signal(Carousel::new);
    let ticker = use_signal(|| None::<Task>);
    let mut seen = use_signal(|| None::<(bool, Option<Project>)>);

    let current = (is_open, project.clone());
    if seen.peek().as_ref() != Some(&current) {
        match project.as_ref().filter(|_| is_open) {
            Some(project) => {
                carousel.write().open(project.pictures.len());
                tracing::debug!(
                    title = %project.title,
                    pictures = project.pictures.len(),
                    "Project modal opened"
                );
            }
            None => {
                if carousel.peek().is_open() {
                    tracing::debug!("Project modal closed");
                }
                carousel.write().close();
            }
        }
        seen.set(Some(current));
    }

    let watched = project;
    use_effect(use_reactive!(|(is_open, watched)| {
        stop_ticker(ticker);
        if is_open && watched.is_some() {
            let session = carousel.peek().session();
            start_ticker(ticker, carousel, session, settings.period());
        }
    }));

    use_drop(move || stop_ticker(ticker));

    CarouselDriver {
        carousel,
        ticker,
        settings,
    }
}

impl CarouselDriver {
    /// Render model for `project` at the current position.
    pub fn view(&self, project: &Project) -> ModalView {
        ModalView::build(project, &self.carousel.read())
    }

    /// Moves one picture, restarting the timer if the policy asks for it.
    pub fn navigate(&mut self, step: NavStep) {
        let session = {
            let mut carousel = self.carousel.write();
            match step {
                NavStep::Next => carousel.next(),
                NavStep::Previous => carousel.previous(),
            }
            carousel.session()
        };
        if self.settings.nav_policy.restarts_timer() {
            stop_ticker(self.ticker);
            start_ticker(self.ticker, self.carousel, session, self.settings.period());
        }
    }

    /// Stops the timer and asks the parent to close.
    ///
    /// The carousel itself closes when `is_open` turns false.
    pub fn request_close(&mut self, on_close: EventHandler<()>) {
        stop_ticker(self.ticker);
        on_close.call(());
    }
}

/// Spawns the auto-advance task for `session` if the carousel has pictures.
fn start_ticker(
    mut ticker: Signal<Option<Task>>,
    mut carousel: Signal<Carousel>,
    session: Session,
    period: Duration,
) {
    if !carousel.peek().autoplays() {
        return;
    }
    let task = spawn(auto_advance(period, move || {
        carousel.write().tick(session);
    }));
    ticker.set(Some(task));
    tracing::debug!(period_ms = period.as_millis() as u64, "Carousel timer started");
}

/// Cancels the running auto-advance task, if any.
///
/// Also runs from `use_drop`, where the slot may already be gone.
fn stop_ticker(mut ticker: Signal<Option<Task>>) {
    let task = ticker.try_write().ok().and_then(|mut slot| slot.take());
    if let Some(task) = task {
        task.cancel();
        tracing::debug!("Carousel timer stopped");
    }
}
