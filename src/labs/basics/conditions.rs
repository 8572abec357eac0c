use crate::core::console::Console;
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct ConditionsLab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Operation::Addition),
            2 => Some(Operation::Subtraction),
            3 => Some(Operation::Multiplication),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        }
    }
}

pub fn grade(marks: i32) -> char {
    match marks {
        90.. => 'A',
        75..=89 => 'B',
        60..=74 => 'C',
        _ => 'D',
    }
}

impl Lab for ConditionsLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Conditions,
            "Conditionals and switch",
            &[
                "range check with early return",
                "switch over a menu choice",
                "if / else-if grading ladder",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        console.prompt("Enter choice (1-3): ")?;
        let choice: i32 = console.input.read("a menu choice")?;

        let Some(operation) = Operation::from_choice(choice) else {
            writeln!(console.out, "Invalid choice")?;
            return Ok(());
        };
        writeln!(console.out, "You selected {}", operation.label())?;

        console.prompt("Enter marks (0-100): ")?;
        let marks: i32 = console.input.read("marks")?;
        writeln!(console.out, "Grade {}", grade(marks))?;

        Ok(())
    }
}
