use clap::Parser;
use std::fs;
use std::io::Write;
use std::time::{Duration, Instant};

use i8080::{Cpu, FlatMemory, Memory, NullIo};

/// Run a raw Intel 8080 binary image.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a raw 8080 binary image.
    rom: std::path::PathBuf,

    /// Address the image is loaded at.
    #[arg(long, default_value_t = 0x0100, value_parser = parse_u16)]
    origin: u16,

    /// Emulate the CP/M BDOS print calls used by the classic exerciser ROMs
    /// (8080PRE, TST8080, CPUTEST, 8080EXER, 8080EXM), instead of running
    /// free until HALT.
    #[arg(long)]
    bdos: bool,

    /// Clock rate in Hz used to pace real-time execution.
    #[arg(long, default_value_t = 2_000_000)]
    hz: u32,
}

fn parse_u16(s: &str) -> Result<u16, String> {
    let s = s.trim_start_matches("0x");
    u16::from_str_radix(s, 16).or_else(|_| s.parse::<u16>()).map_err(|e| e.to_string())
}

#[derive(Debug)]
enum EmuError {
    Io(std::io::Error),
    RomTooLarge { len: usize, origin: u16 },
}

impl std::fmt::Display for EmuError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmuError::Io(e) => write!(f, "{e}"),
            EmuError::RomTooLarge { len, origin } => {
                write!(f, "ROM is {len} bytes, too large to load at {origin:#06x}")
            }
        }
    }
}

impl std::error::Error for EmuError {}

impl From<std::io::Error> for EmuError {
    fn from(e: std::io::Error) -> Self {
        EmuError::Io(e)
    }
}

/// CP/M BDOS function 2 (print char in E) and 9 (print '$'-terminated string
/// at DE), the only two calls the classic 8080 exerciser ROMs rely on.
fn bdos_call(cpu: &mut Cpu, mem: &dyn Memory) {
    match cpu.get_c() {
        2 => {
            print!("{}", cpu.get_e() as char);
        }
        9 => {
            let mut addr = cpu.get_de();
            loop {
                let byte = mem.read(addr);
                if byte == b'$' {
                    break;
                }
                print!("{}", byte as char);
                addr = addr.wrapping_add(1);
            }
        }
        other => {
            eprintln!("[bdos] unhandled function {other}");
        }
    }
    let _ = std::io::stdout().flush();
}

fn run(args: Args) -> Result<(), EmuError> {
    let image = fs::read(&args.rom)?;
    if image.len() > 0x10000 - args.origin as usize {
        return Err(EmuError::RomTooLarge { len: image.len(), origin: args.origin });
    }

    let mut mem = FlatMemory::new();
    mem.load(args.origin, &image);
    if args.bdos {
        // RET at the BDOS entry point so falling through after the shim
        // returns to the caller exactly as a real BDOS stub would.
        mem.write(0x0005, 0xC9);
    }

    let mut io = NullIo;
    let mut cpu = Cpu::new();
    cpu.pc = args.origin;
    cpu.sp = 0xFFFF;

    let t_states_per_tick = (args.hz / 60).max(1);
    let tick = Duration::from_nanos(1_000_000_000 / 60);

    'running: loop {
        let tick_start = Instant::now();
        let mut t_states_this_tick = 0u32;

        while t_states_this_tick < t_states_per_tick {
            if args.bdos && cpu.pc == 0x0005 {
                bdos_call(&mut cpu, &mem);
            }
            if cpu.pc == 0x0000 {
                break 'running;
            }

            t_states_this_tick += cpu.step(&mut mem, &mut io);

            if cpu.is_halted() && !cpu.interrupts_enabled() {
                break 'running;
            }
        }

        let elapsed = tick_start.elapsed();
        if elapsed < tick {
            std::thread::sleep(tick - elapsed);
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
