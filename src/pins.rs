//! GPIO / peripheral pin assignments for the BotolBox main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Gate motor driver (L298N H-bridge)
// ---------------------------------------------------------------------------

/// Digital output: H-bridge enable (active HIGH while a pulse is held).
pub const MOTOR_ENA_GPIO: i32 = 8;
/// Digital output: H-bridge input 1.  IN1=HIGH / IN2=LOW drives forward.
pub const MOTOR_IN1_GPIO: i32 = 6;
/// Digital output: H-bridge input 2.  IN1=LOW / IN2=HIGH drives reverse.
pub const MOTOR_IN2_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Infrared break-beam detectors
// ---------------------------------------------------------------------------

/// Digital inputs, one per detector position along the bottle chute.
/// Active LOW: the receiver pulls the line LOW while the beam is
/// interrupted (an object is present at that position).
pub const IR_BEAM_GPIOS: [i32; 4] = [1, 2, 3, 4];

/// Number of detector positions.  Fixed by the chute geometry.
pub const IR_BEAM_COUNT: usize = 4;

// ---------------------------------------------------------------------------
// UART link to the vision host
// ---------------------------------------------------------------------------

/// UART peripheral number used for the command link.
pub const UART_PORT: i32 = 1;
pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
/// Matches the host-side vision script.
pub const UART_BAUD: u32 = 9_600;
