use crate::core::console::Console;
use crate::core::format::Real;
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct FunctionsLab;

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn average(a: i32, b: i32, c: i32) -> f64 {
    (f64::from(a) + f64::from(b) + f64::from(c)) / 3.0
}

pub fn is_even(value: i32) -> bool {
    value % 2 == 0
}

impl Lab for FunctionsLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Functions,
            "Functions",
            &[
                "parameters passed by value",
                "integer and floating-point return types",
                "boolean predicates",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        console.prompt("Enter three integers: ")?;
        let x: i32 = console.input.read("x")?;
        let y: i32 = console.input.read("y")?;
        let z: i32 = console.input.read("z")?;

        writeln!(console.out, "add(x, y): {}", add(x, y))?;
        writeln!(console.out, "average(x, y, z): {}", Real(average(x, y, z)))?;
        writeln!(console.out, "isEven(z): {}", is_even(z))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(average(1, 2, 4), 7.0 / 3.0);
        assert!(is_even(-4));
        assert!(!is_even(-3));
        assert!(is_even(0));
    }
}
