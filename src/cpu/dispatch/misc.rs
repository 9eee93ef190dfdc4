/*!
misc.rs - `NOP` and its seven undocumented opcode aliases, `EI`/`DI`,
`IN`/`OUT`, `HLT`.
*/

use crate::bus::Bus;
use crate::cpu::state::CpuState;

pub(crate) fn execute(state: &mut CpuState, bus: &mut impl Bus, opcode: u8) -> Option<u64> {
    match opcode {
        // NOP and its undocumented aliases.
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => Some(0),

        0xFB => {
            state.inte = true;
            Some(0)
        }
        0xF3 => {
            state.inte = false;
            Some(0)
        }

        0xDB => {
            let port = state.fetch_byte(bus);
            state.a = bus.input(port);
            Some(0)
        }
        0xD3 => {
            let port = state.fetch_byte(bus);
            bus.output(port, state.a);
            Some(0)
        }

        0x76 => {
            bus.on_halt();
            Some(0)
        }

        _ => None,
    }
}
