// setInterval-backed scheduler
//
// One JS closure serves every interval; the token travels as the interval's
// extra argument. Cancelling an interval from inside its own tick therefore
// never drops the closure that is running.

use std::collections::HashMap;
use std::time::Duration;

use cafe::carousel::{Scheduler, TimerToken};
use cafe::{CarouselError, Result};
use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::js_error;

pub struct BrowserScheduler {
    window: Window,
    tick: Closure<dyn FnMut(JsValue)>,
    live: HashMap<TimerToken, i32>,
    next_token: u64,
}

impl BrowserScheduler {
    pub fn new(window: Window, on_tick: impl Fn(TimerToken) + 'static) -> Self {
        let tick = Closure::<dyn FnMut(JsValue)>::new(move |token: JsValue| match token.as_f64() {
            Some(raw) => on_tick(TimerToken(raw as u64)),
            None => warn!("interval fired without a token"),
        });
        Self {
            window,
            tick,
            live: HashMap::new(),
            next_token: 0,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn start_interval(&mut self, period: Duration) -> Result<TimerToken> {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        let ms = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);

        let handle = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_1(
                self.tick.as_ref().unchecked_ref(),
                ms,
                &JsValue::from_f64(token.0 as f64),
            )
            .map_err(|e| CarouselError::Timer(js_error("setInterval", &e)))?;

        self.live.insert(token, handle);
        Ok(token)
    }

    fn cancel(&mut self, token: TimerToken) -> Result<()> {
        if let Some(handle) = self.live.remove(&token) {
            self.window.clear_interval_with_handle(handle);
        }
        Ok(())
    }
}

impl Drop for BrowserScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.live.drain() {
            self.window.clear_interval_with_handle(handle);
        }
    }
}
