#![feature(impl_trait_in_assoc_type)]
#![no_std]
#![no_main]

mod button;
mod constants;
mod feedback;
mod state;
mod timer;

#[cfg(not(feature = "defmt"))]
use panic_halt as _;
#[cfg(feature = "defmt")]
use {defmt_rtt as _, panic_probe as _};

use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use fb_fmt::info;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    let buzzer = Output::new(p.P0_29, Level::Low, OutputDrive::Standard);
    // P9813 module: DI on P0.24, CI on P0.13.
    let led_data = Output::new(p.P0_24, Level::Low, OutputDrive::Standard);
    let led_clock = Output::new(p.P0_13, Level::Low, OutputDrive::Standard);
    let btn = Input::new(p.P0_30, Pull::Up);

    spawner.must_spawn(feedback::task(buzzer, led_data, led_clock));
    spawner.must_spawn(button::task(btn));
    spawner.must_spawn(timer::task());

    info!("Feedback firmware is go!");
}
