/*!
i8080 - a host-pluggable Intel 8080 instruction decode/execute engine.

Modules
=======
- `cpu` - register/flag state, the ALU primitives, the cycle table, and the
  opcode dispatcher (`Cpu8080::step` / `Cpu8080::interrupt`).
- `bus` - the `Bus` trait a host implements to supply memory and I/O.
- `disassembler` - a pure, side-effect-free `(length, text)` decoder.

This crate does not own a memory array, a video framebuffer, or a terminal.
Those belong to the host; see `demos/` for two small, complete hosts (a
CP/M BDOS-call test harness and a disassembling dump tool).
*/

pub mod bus;
pub mod cpu;
pub mod disassembler;

pub use bus::Bus;
pub use cpu::state::{Flags, RST_0, RST_1, RST_2, RST_3, RST_4, RST_5, RST_6, RST_7};
pub use cpu::Cpu8080;
pub use disassembler::disassemble;
