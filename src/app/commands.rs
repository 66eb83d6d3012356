//! Inbound commands to the application service.
//!
//! The vision host sends one single-word command per line.  The tokens are
//! the legacy wire values spoken by the original deposit points and the
//! host-side script, so they are matched verbatim.

/// Wire token requesting a deposit (score + accept the bottle).
pub const TOKEN_DEPOSIT: &str = "BOTOL";
/// Wire token requesting a reject (eject the object, no scoring).
pub const TOKEN_REJECT: &str = "TIDAK";

/// Commands the serial link can send into the application core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Score the detector array and run a forward gate pulse.
    Deposit,

    /// Run a reverse gate pulse; no scoring.
    Reject,
}

impl AppCommand {
    /// Recognize a trimmed input line.
    ///
    /// Matching is exact and case-sensitive.  Anything else — including
    /// the empty line — returns `None` and must be ignored by the caller:
    /// the link carries partial and garbled lines during host startup,
    /// and silence is the protocol's error handling.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            TOKEN_DEPOSIT => Some(Self::Deposit),
            TOKEN_REJECT => Some(Self::Reject),
            _ => None,
        }
    }
}
