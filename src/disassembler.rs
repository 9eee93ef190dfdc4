/*!
disassembler.rs - a pure, side-effect-free decoder: given a way to read a
byte at an address and a position, returns the instruction's length in
bytes and a textual form. Mnemonic spelling is not a normative part of
this crate's contract (callers that need an exact reference spelling
should not depend on it), but is kept close to the reference
implementation's output so its traces are easy to cross-check against
this crate's.

Takes `impl FnMut(u16) -> u8` rather than the full `Bus` trait: disassembly
never writes to memory or touches I/O ports, so a host can disassemble out
of a `&[u8]` slice (or its live `Bus`, whose `read_byte` takes `&mut self`)
without implementing the full trait. All three bytes the longest
instruction could need are read up front, unconditionally, before the
opcode is matched - harmless for a pure read, and it sidesteps holding more
than one live mutable borrow of `read` at a time.
*/

/// Decode the instruction at `addr`. Returns `(length_in_bytes, text)`.
pub fn disassemble(mut read: impl FnMut(u16) -> u8, addr: u16) -> (u16, String) {
    let opcode = read(addr);
    let b1 = read(addr.wrapping_add(1));
    let b2 = read(addr.wrapping_add(2));
    let word = (b2 as u16) << 8 | b1 as u16;

    macro_rules! i1 {
        ($s:expr) => {
            (1, $s.to_string())
        };
    }
    macro_rules! i2 {
        ($fmt:literal) => {
            (2, format!($fmt, b1))
        };
    }
    macro_rules! i3 {
        ($fmt:literal) => {
            (3, format!($fmt, word))
        };
    }

    match opcode {
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => i1!("NOP"),

        0x37 => i1!("STC"),
        0x3F => i1!("CMC"),
        0x2F => i1!("CMA"),
        0x27 => i1!("DAA"),

        0x04 => i1!("INR    B"),
        0x0C => i1!("INR    C"),
        0x14 => i1!("INR    D"),
        0x1C => i1!("INR    E"),
        0x24 => i1!("INR    H"),
        0x2C => i1!("INR    L"),
        0x34 => i1!("INR    M"),
        0x3C => i1!("INR    A"),

        0x05 => i1!("DCR    B"),
        0x0D => i1!("DCR    C"),
        0x15 => i1!("DCR    D"),
        0x1D => i1!("DCR    E"),
        0x25 => i1!("DCR    H"),
        0x2D => i1!("DCR    L"),
        0x35 => i1!("DCR    M"),
        0x3D => i1!("DCR    A"),

        0x76 => i1!("HLT"),
        0x40..=0x7F => {
            const NAMES: [&str; 8] = ["B", "C", "D", "E", "H", "L", "M", "A"];
            let dst = NAMES[((opcode >> 3) & 0x07) as usize];
            let src = NAMES[(opcode & 0x07) as usize];
            i1!(format!("MOV    {dst},{src}"))
        }

        0x02 => i1!("STAX   B"),
        0x12 => i1!("STAX   D"),
        0x0A => i1!("LDAX   B"),
        0x1A => i1!("LDAX   D"),

        0x80 => i1!("ADD    B"),
        0x81 => i1!("ADD    C"),
        0x82 => i1!("ADD    D"),
        0x83 => i1!("ADD    E"),
        0x84 => i1!("ADD    H"),
        0x85 => i1!("ADD    L"),
        0x86 => i1!("ADD    M"),
        0x87 => i1!("ADD    A"),
        0x88 => i1!("ADC    B"),
        0x89 => i1!("ADC    C"),
        0x8A => i1!("ADC    D"),
        0x8B => i1!("ADC    E"),
        0x8C => i1!("ADC    H"),
        0x8D => i1!("ADC    L"),
        0x8E => i1!("ADC    M"),
        0x8F => i1!("ADC    A"),
        0x90 => i1!("SUB    B"),
        0x91 => i1!("SUB    C"),
        0x92 => i1!("SUB    D"),
        0x93 => i1!("SUB    E"),
        0x94 => i1!("SUB    H"),
        0x95 => i1!("SUB    L"),
        0x96 => i1!("SUB    M"),
        0x97 => i1!("SUB    A"),
        0x98 => i1!("SBB    B"),
        0x99 => i1!("SBB    C"),
        0x9A => i1!("SBB    D"),
        0x9B => i1!("SBB    E"),
        0x9C => i1!("SBB    H"),
        0x9D => i1!("SBB    L"),
        0x9E => i1!("SBB    M"),
        0x9F => i1!("SBB    A"),
        0xA0 => i1!("ANA    B"),
        0xA1 => i1!("ANA    C"),
        0xA2 => i1!("ANA    D"),
        0xA3 => i1!("ANA    E"),
        0xA4 => i1!("ANA    H"),
        0xA5 => i1!("ANA    L"),
        0xA6 => i1!("ANA    M"),
        0xA7 => i1!("ANA    A"),
        0xA8 => i1!("XRA    B"),
        0xA9 => i1!("XRA    C"),
        0xAA => i1!("XRA    D"),
        0xAB => i1!("XRA    E"),
        0xAC => i1!("XRA    H"),
        0xAD => i1!("XRA    L"),
        0xAE => i1!("XRA    M"),
        0xAF => i1!("XRA    A"),
        0xB0 => i1!("ORA    B"),
        0xB1 => i1!("ORA    C"),
        0xB2 => i1!("ORA    D"),
        0xB3 => i1!("ORA    E"),
        0xB4 => i1!("ORA    H"),
        0xB5 => i1!("ORA    L"),
        0xB6 => i1!("ORA    M"),
        0xB7 => i1!("ORA    A"),
        0xB8 => i1!("CMP    B"),
        0xB9 => i1!("CMP    C"),
        0xBA => i1!("CMP    D"),
        0xBB => i1!("CMP    E"),
        0xBC => i1!("CMP    H"),
        0xBD => i1!("CMP    L"),
        0xBE => i1!("CMP    M"),
        0xBF => i1!("CMP    A"),

        0x07 => i1!("RLC"),
        0x0F => i1!("RRC"),
        0x17 => i1!("RAL"),
        0x1F => i1!("RAR"),

        0xC5 => i1!("PUSH   B"),
        0xD5 => i1!("PUSH   D"),
        0xE5 => i1!("PUSH   H"),
        0xF5 => i1!("PUSH   PSW"),
        0xC1 => i1!("POP    B"),
        0xD1 => i1!("POP    D"),
        0xE1 => i1!("POP    H"),
        0xF1 => i1!("POP    PSW"),

        0x09 => i1!("DAD    B"),
        0x19 => i1!("DAD    D"),
        0x29 => i1!("DAD    H"),
        0x39 => i1!("DAD    SP"),

        0x03 => i1!("INX    B"),
        0x13 => i1!("INX    D"),
        0x23 => i1!("INX    H"),
        0x33 => i1!("INX    SP"),
        0x0B => i1!("DCX    B"),
        0x1B => i1!("DCX    D"),
        0x2B => i1!("DCX    H"),
        0x3B => i1!("DCX    SP"),

        0xEB => i1!("XCHG"),
        0xE3 => i1!("XTHL"),
        0xF9 => i1!("SPHL"),

        0x01 => i3!("LXI    B,{:04x}"),
        0x11 => i3!("LXI    D,{:04x}"),
        0x21 => i3!("LXI    H,{:04x}"),
        0x31 => i3!("LXI    SP,{:04x}"),

        0x06 => i2!("MVI    B,{:02x}"),
        0x0E => i2!("MVI    C,{:02x}"),
        0x16 => i2!("MVI    D,{:02x}"),
        0x1E => i2!("MVI    E,{:02x}"),
        0x26 => i2!("MVI    H,{:02x}"),
        0x2E => i2!("MVI    L,{:02x}"),
        0x36 => i2!("MVI    M,{:02x}"),
        0x3E => i2!("MVI    A,{:02x}"),

        0xC6 => i2!("ADI    {:02x}"),
        0xCE => i2!("ACI    {:02x}"),
        0xD6 => i2!("SUI    {:02x}"),
        0xDE => i2!("SBI    {:02x}"),
        0xE6 => i2!("ANI    {:02x}"),
        0xEE => i2!("XRI    {:02x}"),
        0xF6 => i2!("ORI    {:02x}"),
        0xFE => i2!("CPI    {:02x}"),

        0x32 => i3!("STA    {:04x}"),
        0x3A => i3!("LDA    {:04x}"),
        0x22 => i3!("SHLD   {:04x}"),
        0x2A => i3!("LHLD   {:04x}"),

        0xE9 => i1!("PCHL"),

        0xC3 => i3!("JMP    {:04x}"),
        0xCB => i3!("JMP    {:04x}"), // undocumented alias
        0xDA => i3!("JC     {:04x}"),
        0xD2 => i3!("JNC    {:04x}"),
        0xCA => i3!("JZ     {:04x}"),
        0xC2 => i3!("JNZ    {:04x}"),
        0xFA => i3!("JM     {:04x}"),
        0xF2 => i3!("JP     {:04x}"),
        0xEA => i3!("JPE    {:04x}"),
        0xE2 => i3!("JPO    {:04x}"),

        0xCD => i3!("CALL   {:04x}"),
        0xDD => i3!("CALL   {:04x}"), // undocumented alias
        0xED => i3!("CALL   {:04x}"), // undocumented alias
        0xFD => i3!("CALL   {:04x}"), // undocumented alias
        0xDC => i3!("CC     {:04x}"),
        0xD4 => i3!("CNC    {:04x}"),
        0xCC => i3!("CZ     {:04x}"),
        0xC4 => i3!("CNZ    {:04x}"),
        0xFC => i3!("CM     {:04x}"),
        0xF4 => i3!("CP     {:04x}"),
        0xEC => i3!("CPE    {:04x}"),
        0xE4 => i3!("CPO    {:04x}"),

        0xC9 => i1!("RET"),
        0xD9 => i1!("RET"), // undocumented alias
        0xD8 => i1!("RC"),
        0xD0 => i1!("RNC"),
        0xC8 => i1!("RZ"),
        0xC0 => i1!("RNZ"),
        0xF8 => i1!("RM"),
        0xF0 => i1!("RP"),
        0xE8 => i1!("RPE"),
        0xE0 => i1!("RPO"),

        0xC7 => i1!("RST    0"),
        0xCF => i1!("RST    1"),
        0xD7 => i1!("RST    2"),
        0xDF => i1!("RST    3"),
        0xE7 => i1!("RST    4"),
        0xEF => i1!("RST    5"),
        0xF7 => i1!("RST    6"),
        0xFF => i1!("RST    7"),

        0xFB => i1!("EI"),
        0xF3 => i1!("DI"),

        0xDB => i2!("IN     {:02x}"),
        0xD3 => i2!("OUT    {:02x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(bytes: &'static [u8]) -> impl Fn(u16) -> u8 {
        move |addr: u16| bytes.get(addr as usize).copied().unwrap_or(0)
    }

    #[test]
    fn decodes_one_byte_instruction() {
        let (len, text) = disassemble(reader(&[0x00]), 0);
        assert_eq!(len, 1);
        assert_eq!(text, "NOP");
    }

    #[test]
    fn decodes_two_byte_immediate_instruction() {
        let (len, text) = disassemble(reader(&[0x3E, 0x42]), 0);
        assert_eq!(len, 2);
        assert_eq!(text, "MVI    A,42");
    }

    #[test]
    fn decodes_three_byte_address_instruction_little_endian() {
        let (len, text) = disassemble(reader(&[0xC3, 0x00, 0x30]), 0);
        assert_eq!(len, 3);
        assert_eq!(text, "JMP    3000");
    }

    #[test]
    fn mov_grid_names_both_operands() {
        let (len, text) = disassemble(reader(&[0x7E]), 0); // MOV A,M
        assert_eq!(len, 1);
        assert_eq!(text, "MOV    A,M");
    }

    #[test]
    fn hlt_is_not_mistaken_for_mov_m_m() {
        let (_, text) = disassemble(reader(&[0x76]), 0);
        assert_eq!(text, "HLT");
    }

    #[test]
    fn undocumented_aliases_disassemble_same_as_canonical_form() {
        let (_, nop_alias) = disassemble(reader(&[0x08]), 0);
        assert_eq!(nop_alias, "NOP");
        let (_, jmp_alias) = disassemble(reader(&[0xCB, 0x00, 0x40]), 0);
        assert_eq!(jmp_alias, "JMP    4000");
        let (_, ret_alias) = disassemble(reader(&[0xD9]), 0);
        assert_eq!(ret_alias, "RET");
    }

    #[test]
    fn decode_at_nonzero_offset_reads_relative_bytes() {
        let (len, text) = disassemble(reader(&[0x00, 0x00, 0x21, 0xAD, 0xDE]), 2);
        assert_eq!(len, 3);
        assert_eq!(text, "LXI    H,dead");
    }
}
