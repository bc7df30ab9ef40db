use i8080::{Cpu, FlatMemory, Memory};

mod testrunners;
use testrunners::run_cpu_code;

#[test]
fn lxi_shld_lhld_round_trip_through_memory() {
    let mut mem = FlatMemory::new();
    let mut cpu = Cpu::new();
    let code = [
        0x21, 0x34, 0x12, // LXI H, 0x1234
        0x22, 0x00, 0x30, // SHLD 0x3000
        0x21, 0x00, 0x00, // LXI H, 0x0000
        0x2A, 0x00, 0x30, // LHLD 0x3000
        0x76,
    ];
    run_cpu_code(&mut cpu, &mut mem, &code);
    assert_eq!(cpu.get_hl(), 0x1234);
    assert_eq!(mem.read(0x3000), 0x34);
    assert_eq!(mem.read(0x3001), 0x12);
}

#[test]
fn mov_chain_copies_through_all_general_registers() {
    let mut mem = FlatMemory::new();
    let mut cpu = Cpu::new();
    let code = [
        0x3E, 0x7A, // MVI A, 0x7A
        0x47, // MOV B,A
        0x48, // MOV C,B
        0x51, // MOV D,C
        0x5A, // MOV E,D
        0x63, // MOV H,E
        0x6C, // MOV L,H
        0x7D, // MOV A,L
        0x76,
    ];
    run_cpu_code(&mut cpu, &mut mem, &code);
    assert_eq!(cpu.a, 0x7A);
    assert_eq!(cpu.get_b(), 0x7A);
    assert_eq!(cpu.get_l(), 0x7A);
}

#[test]
fn stax_ldax_through_bc_and_de() {
    let mut mem = FlatMemory::new();
    let mut cpu = Cpu::new();
    let code = [
        0x01, 0x00, 0x40, // LXI B, 0x4000
        0x3E, 0x11, // MVI A, 0x11
        0x02, // STAX B
        0x11, 0x01, 0x40, // LXI D, 0x4001
        0x3E, 0x22, // MVI A, 0x22
        0x12, // STAX D
        0x0A, // LDAX B
        0x76,
    ];
    run_cpu_code(&mut cpu, &mut mem, &code);
    assert_eq!(cpu.a, 0x11);
    assert_eq!(mem.read(0x4000), 0x11);
    assert_eq!(mem.read(0x4001), 0x22);
}

#[test]
fn push_pop_preserves_register_pair_through_xthl() {
    let mut mem = FlatMemory::new();
    let mut cpu = Cpu::new();
    let code = [
        0x31, 0x00, 0x20, // LXI SP, 0x2000
        0x01, 0xCD, 0xAB, // LXI B, 0xABCD
        0xC5, // PUSH B
        0x21, 0x11, 0x11, // LXI H, 0x1111
        0xE3, // XTHL
        0x76,
    ];
    run_cpu_code(&mut cpu, &mut mem, &code);
    assert_eq!(cpu.get_hl(), 0xABCD);
    assert_eq!(mem.read_word(cpu.sp), 0x1111);
}
