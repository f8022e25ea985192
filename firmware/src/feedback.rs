use embassy_futures::select::{Either, select};
use embassy_nrf::gpio::Output;
use embassy_time::{Delay, Duration, Instant, Ticker};
use fb_core::{Clock, Millis, PulseScheduler};
use fb_fmt::{debug, error};
use fb_p9813::P9813;

use crate::{
    constants::{FB_POLL_PERIOD_MS, FB_STARTUP_PATTERN},
    state::FEEDBACK_REQUEST,
};

/// Milliseconds since boot, from the embassy time driver.
pub struct Uptime;

impl Clock for Uptime {
    #[inline]
    fn now(&self) -> Millis {
        Instant::now().as_millis()
    }
}

#[embassy_executor::task]
pub async fn task(buzzer: Output<'static>, led_data: Output<'static>, led_clock: Output<'static>) {
    let led: P9813<_, _, _> = match P9813::new(led_data, led_clock, Delay) {
        Ok(led) => led,
        Err(e) => {
            error!("P9813 init error: {:?}", e);
            return;
        }
    };

    let mut fb = match PulseScheduler::new(Uptime, buzzer, led) {
        Ok(fb) => fb,
        Err(e) => {
            error!("Feedback init error: {:?}", e);
            return;
        }
    };

    fb.beep_and_flash(FB_STARTUP_PATTERN);

    let mut ticker = Ticker::every(Duration::from_millis(FB_POLL_PERIOD_MS));

    loop {
        if let Either::Second(request) = select(ticker.next(), FEEDBACK_REQUEST.wait()).await {
            debug!("Feedback request: {:?}", request);
            request.apply(&mut fb);
        }

        if let Err(e) = fb.poll() {
            error!("Feedback error: {:?}", e);
        }
    }
}
