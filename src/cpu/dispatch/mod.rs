/*!
dispatch/mod.rs - routes an opcode byte to the category handler that owns
it, and folds the base cycle-table cost together with whatever
conditional-taken surcharge the handler reports.

Each category module exposes `execute(state, bus, opcode) -> Option<u64>`,
returning the number of *extra* cycles beyond the base table (almost
always zero; 6 for a taken conditional `CALL`/`RET`) if it owns the
opcode, or `None` so the next category gets a turn. This is the same
`Option`-chaining shape the earlier table-driven dispatch prototype used
to signal "not handled, try the next thing" - adapted here into a
complete, unconditional (not feature-gated) dispatcher.
*/

mod arithmetic;
mod control_flow;
mod load_store;
mod logical;
mod misc;
mod regfield;
mod stack;

use crate::bus::Bus;
use crate::cpu::cycles::base_cycles;
use crate::cpu::state::CpuState;

/// Decode and execute one instruction at `state.pc`. Returns the total
/// number of cycles consumed, added to `state.cycles` by the caller.
pub(crate) fn step(state: &mut CpuState, bus: &mut impl Bus) -> u64 {
    let opcode = state.fetch_byte(bus);
    let base = base_cycles(opcode);

    let extra = load_store::execute(state, bus, opcode)
        .or_else(|| arithmetic::execute(state, bus, opcode))
        .or_else(|| logical::execute(state, bus, opcode))
        .or_else(|| stack::execute(state, bus, opcode))
        .or_else(|| control_flow::execute(state, bus, opcode))
        .or_else(|| misc::execute(state, bus, opcode))
        .unwrap_or_else(|| {
            log::debug!("unhandled 8080 opcode {opcode:#04x} at {:#06x}, treated as NOP", state.pc.wrapping_sub(1));
            0
        });

    base + extra
}
