/*!
control_flow.rs - `JMP`, `CALL`, `RET` (unconditional and the eight
condition-code variants of each), `RST`, `PCHL`.

The eight conditions share one 3-bit field (`cc`, bits 5-3 of the opcode)
across all three families: `NZ Z NC C PO PE P M`. Decoding it once here
instead of writing eight near-identical match arms per family is the
Rust-idiomatic rendering of what the reference implementation expresses
as eight separate `m8080_cond_jmp(c, c->f.X == n)` call sites.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

#[inline]
fn condition(state: &CpuState, cc: u8) -> bool {
    match cc & 0x07 {
        0 => !state.flags.z, // NZ
        1 => state.flags.z,  // Z
        2 => !state.flags.c, // NC
        3 => state.flags.c,  // C
        4 => !state.flags.p, // PO (odd parity)
        5 => state.flags.p,  // PE (even parity)
        6 => !state.flags.s, // P (plus/positive)
        7 => state.flags.s,  // M (minus)
        _ => unreachable!("3-bit field"),
    }
}

/// Returns extra cycles beyond the base cycle table: conditional `CALL`
/// and `RET` cost 6 more when the condition is taken, matching
/// `m8080_cond_call`/`m8080_cond_ret`.
pub(crate) fn execute(state: &mut CpuState, bus: &mut impl Bus, opcode: u8) -> Option<u64> {
    match opcode {
        // JMP (0xCB is the undocumented alias)
        0xC3 | 0xCB => {
            state.pc = state.fetch_word(bus);
            Some(0)
        }
        // Conditional JMP: cc in bits 5-3, opcode & 0x07 == 0x02
        _ if opcode & 0xC7 == 0xC2 => {
            let target = state.fetch_word(bus);
            if condition(state, opcode >> 3) {
                state.pc = target;
            }
            Some(0)
        }

        // CALL (0xDD/0xED/0xFD are undocumented aliases)
        0xCD | 0xDD | 0xED | 0xFD => {
            let target = state.fetch_word(bus);
            state.push(bus, state.pc);
            state.pc = target;
            Some(0)
        }
        // Conditional CALL: opcode & 0x07 == 0x04
        _ if opcode & 0xC7 == 0xC4 => {
            let target = state.fetch_word(bus);
            if condition(state, opcode >> 3) {
                state.push(bus, state.pc);
                state.pc = target;
                Some(6)
            } else {
                Some(0)
            }
        }

        // RET (0xD9 is the undocumented alias)
        0xC9 | 0xD9 => {
            state.pc = state.pop(bus);
            Some(0)
        }
        // Conditional RET: opcode & 0x07 == 0x00 and opcode in 0xC0..=0xF8
        _ if opcode & 0xC7 == 0xC0 && opcode >= 0xC0 => {
            if condition(state, opcode >> 3) {
                state.pc = state.pop(bus);
                Some(6)
            } else {
                Some(0)
            }
        }

        // RST n: CALL to 8*n
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            let vector = (opcode & 0x38) as u16;
            state.push(bus, state.pc);
            state.pc = vector;
            Some(0)
        }

        // PCHL: PC <- HL
        0xE9 => {
            state.pc = state.hl();
            Some(0)
        }

        _ => None,
    }
}
