use i8080::{Cpu, FlatMemory, NullIo};

/// Load `code` at address 0 and single-step until HLT, a runaway guard of
/// 10_000 instructions, or completion. Returns the accumulated T-states.
#[allow(dead_code)]
pub fn run_cpu_code(cpu: &mut Cpu, mem: &mut FlatMemory, code: &[u8]) -> u32 {
    mem.load(0, code);
    let mut io = NullIo;
    let mut total = 0u32;
    let mut guard = 10_000;

    loop {
        if guard == 0 {
            break;
        }
        guard -= 1;

        total += cpu.step(mem, &mut io);
        if cpu.is_halted() {
            break;
        }
    }

    total
}
