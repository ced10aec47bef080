use poll_promise::Promise;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::engine::{FollowUp, run_poll_cycle};
use crate::engine::sync::fetch_snapshot;
use crate::ui::app::RailConsoleApp;

/// Removes finished promises from `promises`, oldest first, handing each result to `apply`.
fn drain_ready<T: Send + 'static>(promises: &mut Vec<Promise<T>>, mut apply: impl FnMut(T)) {
    let mut index = 0;
    while index < promises.len() {
        if promises[index].ready().is_some() {
            let promise = promises.remove(index);
            match promise.try_take() {
                Ok(value) => apply(value),
                Err(_) => log::error!("Background task finished without a value"),
            }
        } else {
            index += 1;
        }
    }
}

/// Takes the value of a single finished promise, leaving `None` in the slot.
fn take_ready<T: Send + 'static>(slot: &mut Option<Promise<T>>) -> Option<T> {
    let ready = slot.as_ref().is_some_and(|p| p.ready().is_some());
    if !ready {
        return None;
    }
    slot.take().and_then(|promise| promise.try_take().ok())
}

impl RailConsoleApp {
    /// Starts a probe-then-sync cycle without waiting for earlier ones.
    pub(super) fn start_poll_cycle(&mut self) {
        let service = self.controller.service();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_poll_cycles {
            log::info!(
                "Starting poll cycle ({} still in flight)",
                self.poll_promises.len()
            );
        }

        self.poll_promises
            .push(Promise::spawn_async(async move { run_poll_cycle(service).await }));
    }

    /// One sync outside the timer, used after a successful write.
    pub(super) fn start_forced_sync(&mut self) {
        if !self.controller.can_sync() {
            return;
        }
        let service = self.controller.service();
        self.sync_promises.push(Promise::spawn_async(async move {
            fetch_snapshot(service.as_ref()).await
        }));
    }

    pub(super) fn start_booking(&mut self) {
        if self.booking_promise.is_some() {
            return;
        }
        let Some(request) = self.controller.begin_booking(&self.forms.booking) else {
            return;
        };
        let service = self.controller.service();
        self.booking_promise = Some(Promise::spawn_async(async move {
            service.add_booking(&request).await
        }));
    }

    pub(super) fn start_route_query(&mut self) {
        if self.route_promise.is_some() {
            return;
        }
        let Some(query) = self.controller.begin_route(&self.forms.route) else {
            return;
        };
        let service = self.controller.service();
        self.route_promise = Some(Promise::spawn_async(async move {
            service.find_route(query).await
        }));
    }

    pub(super) fn start_process(&mut self) {
        if !self.controller.begin_process() {
            return;
        }
        let service = self.controller.service();
        self.process_promise = Some(Promise::spawn_async(async move {
            service.process_next().await
        }));
    }

    /// Collects every finished background request and folds it into the controller.
    pub(super) fn poll_background_tasks(&mut self, now_ms: u64) {
        let controller = &mut self.controller;
        drain_ready(&mut self.poll_promises, |outcome| controller.apply_poll(outcome));
        drain_ready(&mut self.sync_promises, |snapshot| {
            controller.apply_snapshot(&snapshot)
        });

        let mut force_sync = false;

        if let Some(result) = take_ready(&mut self.booking_promise) {
            if self.controller.finish_booking(result) == FollowUp::ResetFormAndSync {
                self.forms.booking.reset();
                force_sync = true;
            }
        }

        if let Some(result) = take_ready(&mut self.route_promise) {
            self.controller.finish_route(result, now_ms);
        }

        if let Some(result) = take_ready(&mut self.process_promise) {
            if self.controller.finish_process(result) == FollowUp::Sync {
                force_sync = true;
            }
        }

        if force_sync {
            self.start_forced_sync();
        }
    }
}
