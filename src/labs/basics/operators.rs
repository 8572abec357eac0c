use crate::core::console::Console;
use crate::core::format::flag;
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct OperatorsLab;

/// 除數為 0 時沒有結果
fn checked(result: Option<i32>) -> String {
    match result {
        Some(value) => value.to_string(),
        None => "undefined (division by zero)".to_string(),
    }
}

impl Lab for OperatorsLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Operators,
            "Operators",
            &[
                "assignment and compound assignment",
                "arithmetic with checked division",
                "relational and logical operators",
                "increment, decrement and postfix semantics",
            ],
        )
    }

    #[allow(unused_assignments)]
    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        let mut b: i32 = 4;
        let mut a: i32 = 10;

        // assignment
        b = a;
        writeln!(out, "Value of b is: {}", b)?;
        b += 5;
        b -= 3;
        b *= 2;
        b /= 4;
        b %= 3;

        // arithmetic
        writeln!(out, "The sum of a and b is: {}", a + b)?;
        writeln!(out, "The difference of a and b is: {}", a - b)?;
        writeln!(out, "The product of a and b is: {}", a * b)?;
        writeln!(out, "The quotient of a and b is: {}", checked(a.checked_div(b)))?;
        writeln!(
            out,
            "The modulus/reminder of a and b is: {}",
            checked(a.checked_rem(b))
        )?;

        // relational
        writeln!(out, "Value of a is: {}", a)?;
        writeln!(out, "Value of b is: {}", b)?;
        writeln!(out, "Is a equal to b? {}", flag(a == b))?;
        writeln!(out, "Is a not equal to b? {}", flag(a != b))?;
        writeln!(out, "Is a greater than b? {}", flag(a > b))?;
        writeln!(out, "Is a less than b? {}", flag(a < b))?;
        writeln!(out, "Is a greater than or equal to b? {}", flag(a >= b))?;
        writeln!(out, "Is a less than or equal to b? {}", flag(a <= b))?;

        // logical
        writeln!(out, "Logical AND result: {}", flag(a > 5 && b > 5))?;
        writeln!(out, "Logical OR result: {}", flag(a > 5 || b > 5))?;
        writeln!(out, "Logical NOT result: {}", flag(!(a > 5)))?;

        // increment / decrement
        a += 1;
        b += 1;
        writeln!(out, "Value of a after increment: {}", a)?;
        writeln!(out, "Value of b after increment: {}", b)?;
        a -= 1;
        b -= 1;
        writeln!(out, "Value of a after decrement: {}", a)?;
        writeln!(out, "Value of b after decrement: {}", b)?;

        // postfix: y 取得遞減前的值
        let mut x = 10;
        let y = {
            let previous = x;
            x -= 1;
            previous
        };
        writeln!(out, "Value of x: {}", x)?;
        writeln!(out, "Value of y: {}", y)?;

        Ok(())
    }
}
