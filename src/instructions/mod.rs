//! The opcode dispatcher: one `execute` entry point mapping all 256 opcode
//! values to the instruction-family handlers below and returning the T-state
//! count of whichever instruction ran.

pub mod control;
pub mod logic;
pub mod math;
pub mod misc;
pub mod transfer;
pub mod utils;

use crate::cpu::Cpu;
use crate::io::Io;
use crate::memory::Memory;

/// Decode and run the instruction named by `opcode`. `cpu.pc` must already
/// point at the first operand byte (the opcode itself was consumed by the
/// caller, mirroring `Cpu::step`).
pub fn execute(cpu: &mut Cpu, mem: &mut dyn Memory, io: &mut dyn Io, opcode: u8) -> u32 {
    match opcode {
        0x00 | 0x08 | 0x10 | 0x18 | 0x20 | 0x28 | 0x30 | 0x38 => misc::nop(),

        // --- 16-bit immediate loads, INX/DCX, DAD ---
        0x01 | 0x11 | 0x21 | 0x31 => transfer::lxi(cpu, mem, opcode),
        0x03 | 0x13 | 0x23 | 0x33 => math::inx(cpu, opcode),
        0x0B | 0x1B | 0x2B | 0x3B => math::dcx(cpu, opcode),
        0x09 | 0x19 | 0x29 | 0x39 => math::dad(cpu, opcode),

        // --- INR/DCR/MVI (destination encoded in bits 3-5) ---
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => math::inr(cpu, mem, opcode),
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => math::dcr(cpu, mem, opcode),
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => transfer::mvi(cpu, mem, opcode),

        // --- rotates, STAX/LDAX, SHLD/LHLD, STA/LDA, STC/CMC, DAA/CMA ---
        0x02 | 0x12 => transfer::stax(cpu, mem, opcode),
        0x0A | 0x1A => transfer::ldax(cpu, mem, opcode),
        0x07 => logic::rlc(cpu),
        0x0F => logic::rrc(cpu),
        0x17 => logic::ral(cpu),
        0x1F => logic::rar(cpu),
        0x22 => transfer::shld(cpu, mem),
        0x2A => transfer::lhld(cpu, mem),
        0x27 => math::daa(cpu),
        0x2F => logic::cma(cpu),
        0x32 => transfer::sta(cpu, mem),
        0x3A => transfer::lda(cpu, mem),
        0x37 => logic::stc(cpu),
        0x3F => logic::cmc(cpu),

        // --- HLT and the MOV block (0x40-0x7F) ---
        0x76 => misc::hlt(cpu),
        0x40..=0x7F => transfer::mov(cpu, mem, opcode),

        // --- ALU-reg block (0x80-0xBF) ---
        0x80..=0x87 => math::add(cpu, mem, opcode),
        0x88..=0x8F => math::adc(cpu, mem, opcode),
        0x90..=0x97 => math::sub(cpu, mem, opcode),
        0x98..=0x9F => math::sbb(cpu, mem, opcode),
        0xA0..=0xA7 => logic::ana(cpu, mem, opcode),
        0xA8..=0xAF => logic::xra(cpu, mem, opcode),
        0xB0..=0xB7 => logic::ora(cpu, mem, opcode),
        0xB8..=0xBF => math::cmp(cpu, mem, opcode),

        // --- POP/PUSH, conditional/unconditional branches, RST ---
        0xC1 | 0xD1 | 0xE1 | 0xF1 => transfer::pop(cpu, mem, opcode),
        0xC5 | 0xD5 | 0xE5 | 0xF5 => transfer::push(cpu, mem, opcode),
        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => control::rcc(cpu, mem, opcode),
        0xC9 | 0xD9 => control::ret(cpu, mem),
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => control::jcc(cpu, mem, opcode),
        0xC3 | 0xCB => control::jmp(cpu, mem),
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => control::ccc(cpu, mem, opcode),
        0xCD | 0xDD | 0xED | 0xFD => control::call(cpu, mem),
        0xC6 => math::adi(cpu, mem),
        0xCE => math::aci(cpu, mem),
        0xD6 => math::sui(cpu, mem),
        0xDE => math::sbi(cpu, mem),
        0xE6 => logic::ani(cpu, mem),
        0xEE => logic::xri(cpu, mem),
        0xF6 => logic::ori(cpu, mem),
        0xFE => math::cpi(cpu, mem),
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => control::rst(cpu, mem, opcode),

        // --- stack/IO/HL specials and interrupt mask ---
        0xD3 => transfer::output(cpu, mem, io),
        0xDB => transfer::input(cpu, mem, io),
        0xE3 => transfer::xthl(cpu, mem),
        0xE9 => transfer::pchl(cpu),
        0xEB => transfer::xchg(cpu),
        0xF3 => misc::di(cpu),
        0xF9 => transfer::sphl(cpu),
        0xFB => misc::ei(cpu),
    }
}
