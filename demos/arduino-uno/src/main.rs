#![no_std]
#![no_main]

use arduino_hal::prelude::*;
use ledcontrol::{LedControl, SerialBus};
use panic_halt as _;

const NUM_DEVICES: u8 = 2; // first device 8x8 matrix, second 8-digit 7-segment
const DEFAULT_INTENSITY: u8 = 3;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let pins = arduino_hal::pins!(dp);
    let mut serial = arduino_hal::default_serial!(dp, pins, 57600);

    let bus = SerialBus::new(
        pins.d12.into_output(),
        pins.d11.into_output(),
        pins.d10.into_output(),
    )
    .unwrap_infallible();

    let mut display = LedControl::new(bus, NUM_DEVICES);
    display.init().unwrap();
    for device in 0..NUM_DEVICES {
        display.shutdown(device, false).unwrap();
        display.set_intensity(device, DEFAULT_INTENSITY).unwrap();
    }

    ufmt::uwriteln!(&mut serial, "Sweeping intensity...").unwrap_infallible();
    for intensity in 0..=ledcontrol::MAX_INTENSITY {
        display.set_digit(1, 0, intensity, false).unwrap();
        display.set_intensity(1, intensity).unwrap();
        arduino_hal::delay_ms(200);
    }
    display.set_intensity(1, DEFAULT_INTENSITY).unwrap();

    ufmt::uwriteln!(&mut serial, "Drawing diagonal...").unwrap_infallible();
    for i in 0..8 {
        display.set_led(0, i, i, true).unwrap();
        arduino_hal::delay_ms(100);
    }
    display.set_column(0, 0, 0xFF).unwrap();

    ufmt::uwriteln!(&mut serial, "Scrolling ASCII chars...").unwrap_infallible();
    let mut msg = [b' '; 8];
    for offset in 0..=(26 + 8 * 2) {
        for (i, m) in msg.iter_mut().enumerate() {
            let idx = offset as i8 + i as i8 - 8;
            *m = if (0..26).contains(&idx) {
                b'A' + idx as u8
            } else {
                b' '
            };
        }
        display.display_ascii(1, &msg).unwrap();
        arduino_hal::delay_ms(200);
    }

    ufmt::uwriteln!(&mut serial, "Counting up...").unwrap_infallible();
    let mut i: u32 = 0;
    loop {
        display.display_number(1, i).unwrap();
        i += 1;

        arduino_hal::delay_ms(300);
    }
}
