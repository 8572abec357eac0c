use crate::core::console::Console;
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct LoopsLab;

/// 1..=n 的和，溢位時環繞
pub fn sum_to(n: i32) -> i32 {
    let mut sum: i32 = 0;
    for i in 1..=n {
        sum = sum.wrapping_add(i);
    }
    sum
}

impl Lab for LoopsLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Loops,
            "Loops",
            &[
                "counting for loop",
                "while loop accumulating a sum",
                "do-while countdown guarded for n <= 0",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        console.prompt("Enter n: ")?;
        let n: i32 = console.input.read("n")?;
        let out = &console.out;

        write!(out, "For loop: ")?;
        for i in 1..=n {
            write!(out, "{} ", i)?;
        }
        writeln!(out)?;

        write!(out, "While loop (sum 1..n): ")?;
        writeln!(out, "{}", sum_to(n))?;

        write!(out, "Do-while loop (countdown): ")?;
        let mut count = n;
        if count <= 0 {
            writeln!(out, "none")?;
            return Ok(());
        }

        // 至少執行一次，再檢查條件
        loop {
            write!(out, "{} ", count)?;
            count -= 1;
            if count <= 0 {
                break;
            }
        }
        writeln!(out)?;

        Ok(())
    }
}
