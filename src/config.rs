//! CPU configuration knobs.
//!
//! Only behavior that has more than one defensible reading lives here; the
//! rest of the core is fixed hardware semantics.

use crate::cpu::state::POWER_ON_SP;

/// How ADC/SBC derive the Overflow flag.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OverflowRule {
    /// Standard 6502 signed overflow:
    /// `V = bit7 of ((A ^ result) & (operand ^ result))`.
    #[default]
    Signed,
    /// Overflow mirrors the carry-out: set when the widened result exceeds 0xFF.
    Unsigned,
}

/// Construction-time CPU options.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CpuConfig {
    pub overflow_rule: OverflowRule,
    /// Stack pointer after power-on.
    pub power_on_sp: u8,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            overflow_rule: OverflowRule::default(),
            power_on_sp: POWER_ON_SP,
        }
    }
}

impl CpuConfig {
    pub fn with_overflow_rule(mut self, rule: OverflowRule) -> Self {
        self.overflow_rule = rule;
        self
    }
}
