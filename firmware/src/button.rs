use embassy_nrf::gpio::Input;
use embassy_time::Timer;

use crate::{
    constants::{FB_BUTTON_HOLDOFF_MS, FB_BUTTON_PATTERN},
    state::{FEEDBACK_REQUEST, Request},
};

#[embassy_executor::task]
pub async fn task(mut btn: Input<'static>) {
    loop {
        btn.wait_for_rising_edge().await;
        FEEDBACK_REQUEST.signal(Request::Pattern(FB_BUTTON_PATTERN));
        Timer::after_millis(FB_BUTTON_HOLDOFF_MS).await;
    }
}
