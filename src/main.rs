//! BotolBox Firmware — Main Entry Point
//!
//! Hexagonal architecture, single-threaded and poll-driven.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                 │
//! │                                                          │
//! │  HardwareAdapter      SerialLineAdapter    LogEventSink  │
//! │  (Detector+Motor)     (LinePort / UART)    (EventSink)   │
//! │  Esp32Clock                                              │
//! │  (ClockPort)                                             │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ───────────────     │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │             AppService (pure logic)                │  │
//! │  │  command dispatch · deposit scoring · motor pulse  │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is deliberately blocking: a motor pulse holds the task for
//! its full duration, so commands are handled strictly one at a time.
#![deny(unused_must_use)]

mod adapters;
pub mod app;
pub mod config;
mod drivers;
mod pins;
mod sensors;

use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::serial::SerialLineAdapter;
use adapters::time::Esp32Clock;
use app::ports::{ClockPort, LinePort};
use app::service::AppService;
use config::SystemConfig;
use drivers::motor::MotorDriver;
use drivers::uart::UartLink;
use sensors::DetectorArray;

fn main() -> Result<()> {
    // ── 1. Platform bootstrap ─────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("BotolBox v{} starting", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let uart = match UartLink::install(
        pins::UART_PORT,
        pins::UART_TX_GPIO,
        pins::UART_RX_GPIO,
        pins::UART_BAUD,
    ) {
        Ok(u) => u,
        Err(e) => {
            log::error!("UART init failed: {} — halting", e);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    // ── 3. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    info!(
        "config: pulse={}ms table={:?}",
        config.pulse_duration_ms, config.score_table
    );

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(DetectorArray::new(pins::IR_BEAM_GPIOS), MotorDriver::new());
    hw.all_off();

    let mut serial = SerialLineAdapter::new(uart);
    let mut clock = Esp32Clock::new();
    let mut sink = LogEventSink::new();

    // ── 5. Construct app service ──────────────────────────────
    let poll_interval_ms = config.poll_interval_ms;
    let mut app = AppService::new(config);
    app.start(&mut sink);

    info!("System ready. Entering poll loop.");

    // ── 6. Poll loop ──────────────────────────────────────────
    // One full line is processed to completion (including the blocking
    // motor pulse) before the next poll; the idle delay keeps the loop
    // from spinning on a quiet link.
    loop {
        if let Some(line) = serial.read_line() {
            app.dispatch(line.as_str(), &mut hw, &mut clock, &mut serial, &mut sink);
        } else {
            clock.sleep_ms(poll_interval_ms);
        }
    }
}
