use embassy_time::{Duration, Ticker, Timer};
use fb_core::Color;

use crate::{
    constants::{FB_HEARTBEAT_COLOR, FB_HEARTBEAT_SECS},
    state::{FEEDBACK_REQUEST, Request},
};

#[embassy_executor::task]
pub async fn task() {
    let mut ticker = Ticker::every(Duration::from_secs(FB_HEARTBEAT_SECS));

    Timer::after_secs(1).await;

    loop {
        ticker.next().await;
        FEEDBACK_REQUEST.signal(Request::Flash {
            count: 1,
            on: FB_HEARTBEAT_COLOR,
            off: Color::OFF,
        });
    }
}
