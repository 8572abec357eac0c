use crate::core::console::Console;
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct BitwiseLab;

impl Lab for BitwiseLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Bitwise,
            "Bitwise operators",
            &["and, or, xor", "two's complement not", "shifts as multiply/divide by 2^n"],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        let a: i32 = 5; // 0101
        let b: i32 = 3; // 0011

        writeln!(out, "a & b: {}", a & b)?;
        writeln!(out, "a | b: {}", a | b)?;
        writeln!(out, "a ^ b: {}", a ^ b)?;
        writeln!(out, "~a: {}", !a)?;
        writeln!(out, "a << 1: {}", a << 1)?;
        writeln!(out, "b >> 1: {}", b >> 1)?;

        Ok(())
    }
}
