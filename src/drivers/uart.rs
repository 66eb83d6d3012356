//! UART command link — raw byte transport.
//!
//! 9600 baud 8N1, matching the host-side vision script.  Reads are
//! non-blocking (zero-tick timeout) so the poll loop never stalls on a
//! quiet link; writes block until queued, which is fine for the two
//! short response lines this device ever sends.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real UART peripheral via raw sys calls.
//! On host/test: a silent stub — no data in, writes discarded.  Host
//! tests exercise line framing through [`LineAssembler`]
//! (crate::adapters::serial::LineAssembler) instead.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use super::hw_init::HwInitError;

/// Receive ring buffer handed to the UART driver (bytes).
#[cfg(target_os = "espidf")]
const RX_BUFFER_SIZE: i32 = 256;

pub struct UartLink {
    #[cfg(target_os = "espidf")]
    port: i32,
}

#[cfg(target_os = "espidf")]
impl UartLink {
    /// Install and configure the UART driver.  Call once from `main()`.
    pub fn install(port: i32, tx_gpio: i32, rx_gpio: i32, baud: u32) -> Result<Self, HwInitError> {
        let cfg = uart_config_t {
            baud_rate: baud as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };

        // SAFETY: one-shot configuration of an otherwise unused UART
        // peripheral, before the poll loop starts; single-threaded.
        unsafe {
            let ret = uart_param_config(port, &cfg);
            if ret != ESP_OK as i32 {
                return Err(HwInitError::UartInitFailed(ret));
            }
            let ret = uart_set_pin(
                port,
                tx_gpio,
                rx_gpio,
                UART_PIN_NO_CHANGE,
                UART_PIN_NO_CHANGE,
            );
            if ret != ESP_OK as i32 {
                return Err(HwInitError::UartInitFailed(ret));
            }
            let ret = uart_driver_install(port, RX_BUFFER_SIZE, 0, 0, core::ptr::null_mut(), 0);
            if ret != ESP_OK as i32 {
                return Err(HwInitError::UartInitFailed(ret));
            }
        }

        log::info!("uart: port {} ready at {} baud", port, baud);
        Ok(Self { port })
    }

    /// Read whatever is pending, up to `buf.len()` bytes.  Returns the
    /// number of bytes read; 0 when the link is quiet.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> usize {
        // SAFETY: buf outlives the call; zero-tick timeout makes this a
        // non-blocking drain of the driver's RX ring buffer.
        let n = unsafe {
            uart_read_bytes(
                self.port,
                buf.as_mut_ptr().cast(),
                buf.len() as u32,
                0,
            )
        };
        if n < 0 { 0 } else { n as usize }
    }

    /// Queue `data` for transmission.
    pub fn write_bytes(&mut self, data: &[u8]) {
        // SAFETY: data outlives the call; the driver copies into its own
        // TX buffer.
        unsafe {
            uart_write_bytes(self.port, data.as_ptr().cast(), data.len() as u32);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl UartLink {
    pub fn install(
        port: i32,
        _tx_gpio: i32,
        _rx_gpio: i32,
        baud: u32,
    ) -> Result<Self, HwInitError> {
        log::info!("uart(sim): port {} at {} baud (stub)", port, baud);
        Ok(Self {})
    }

    pub fn read_bytes(&mut self, _buf: &mut [u8]) -> usize {
        0
    }

    pub fn write_bytes(&mut self, _data: &[u8]) {}
}
