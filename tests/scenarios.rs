//! End-to-end scenarios straight out of the core's own testable-properties
//! list: load a short byte sequence at an origin, step until `HLT`, and
//! check the final register/flag/cycle state the reference implementation
//! produces for the same bytes.

use i8080::bus::FlatMemory;
use i8080::{Bus, Cpu8080};

fn run_until_halt(mem: &mut FlatMemory, cpu: &mut Cpu8080) {
    loop {
        let pc = cpu.pc;
        let opcode = mem.read_byte(pc);
        cpu.step(mem);
        if opcode == 0x76 {
            return;
        }
    }
}

#[test]
fn minimal_mvi_then_hlt() {
    let mut mem = FlatMemory::new();
    mem.load(0x0000, &[0x3E, 0x42, 0x76]); // MVI A,0x42; HLT
    let mut cpu = Cpu8080::new();

    run_until_halt(&mut mem, &mut cpu);

    assert_eq!(cpu.a, 0x42);
    assert_eq!(cpu.pc, 0x0003);
    assert_eq!(cpu.cycles, 14);
}

#[test]
fn arithmetic_adi_sets_half_carry() {
    let mut mem = FlatMemory::new();
    mem.load(0x0100, &[0x3E, 0x0F, 0xC6, 0x01, 0x76]); // MVI A,0x0F; ADI 1; HLT
    let mut cpu = Cpu8080::new();
    cpu.pc = 0x0100;

    run_until_halt(&mut mem, &mut cpu);

    assert_eq!(cpu.a, 0x10);
    assert!(!cpu.flags.c);
    assert!(cpu.flags.a);
    assert!(!cpu.flags.p);
    assert!(!cpu.flags.z);
    assert!(!cpu.flags.s);
    assert_eq!(cpu.cycles, 21);
}

#[test]
fn daa_after_bcd_add() {
    let mut mem = FlatMemory::new();
    // MVI A,0x09; ADI 1; DAA; HLT
    mem.load(0x0100, &[0x3E, 0x09, 0xC6, 0x01, 0x27, 0x76]);
    let mut cpu = Cpu8080::new();
    cpu.pc = 0x0100;

    cpu.step(&mut mem); // MVI A,0x09
    cpu.step(&mut mem); // ADI 1
    assert_eq!(cpu.a, 0x0A);
    assert!(cpu.flags.a);

    cpu.step(&mut mem); // DAA
    assert_eq!(cpu.a, 0x10);
    assert!(!cpu.flags.c);
    assert!(cpu.flags.a);
    assert!(!cpu.flags.z);
    assert!(!cpu.flags.s);
    assert!(!cpu.flags.p);
}

#[test]
fn call_and_ret_round_trip_sp_and_cycles() {
    let mut mem = FlatMemory::new();
    // LXI SP,0x2000; CALL 0x0108; HLT; (pad); RET
    mem.load(0x0100, &[0x31, 0x00, 0x20, 0xCD, 0x08, 0x01, 0x76, 0x00, 0xC9]);
    let mut cpu = Cpu8080::new();
    cpu.pc = 0x0100;

    run_until_halt(&mut mem, &mut cpu);

    assert_eq!(cpu.pc, 0x0107);
    assert_eq!(cpu.sp, 0x2000);
    assert_eq!(cpu.cycles, 10 + 17 + 10 + 7);
}

#[test]
fn rlc_moves_bit7_into_bit0_and_carry() {
    let mut mem = FlatMemory::new();
    mem.load(0x0100, &[0x3E, 0x80, 0x07, 0x76]); // MVI A,0x80; RLC; HLT
    let mut cpu = Cpu8080::new();
    cpu.pc = 0x0100;

    run_until_halt(&mut mem, &mut cpu);

    assert_eq!(cpu.a, 0x01);
    assert!(cpu.flags.c);
}

#[test]
fn interrupt_after_ei_pushes_pc_and_vectors() {
    let mut mem = FlatMemory::new();
    mem.load(0x0100, &[0xFB, 0x00, 0x00, 0x00]); // EI; NOP; NOP; NOP
    let mut cpu = Cpu8080::new();
    cpu.pc = 0x0100;
    cpu.sp = 0x2400;

    cpu.step(&mut mem); // EI
    cpu.step(&mut mem); // NOP
    assert_eq!(cpu.pc, 0x0102);

    let cycles = cpu.interrupt(&mut mem, 0x0010);
    assert_eq!(cycles, 11);
    assert!(!cpu.inte);
    assert_eq!(cpu.pc, 0x0010);
    assert_eq!(cpu.sp, 0x23FE);
    assert_eq!(i8080::cpu::state::CpuState::read_word(&mut mem, cpu.sp), 0x0102);

    // A second interrupt immediately after is a no-op: INTE is clear.
    let cycles = cpu.interrupt(&mut mem, 0x0020);
    assert_eq!(cycles, 0);
    assert_eq!(cpu.pc, 0x0010);
}
