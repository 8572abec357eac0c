use crate::core::console::{Console, Output};
use crate::core::format::Real;
use crate::core::{Lab, LabId, LabInfo, Result};
use crate::utils::validation::validate_range;

pub struct ConstructorsLab;

/// 建構時印出訊息，離開作用域時由 Drop 印出解構訊息
#[derive(Debug)]
pub struct Student {
    out: Output,
    name: String,
    roll_number: i32,
    gpa: f64,
}

impl Student {
    /// GPA 超出 0.0 到 4.0 時不建立物件
    pub fn new(out: &Output, name: &str, roll_number: i32, gpa: f64) -> Result<Self> {
        validate_range("gpa", gpa, 0.0, 4.0)?;
        writeln!(out, "Constructor called for: {}", name)?;
        Ok(Self {
            out: out.clone(),
            name: name.to_string(),
            roll_number,
            gpa,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll_number(&self) -> i32 {
        self.roll_number
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// GPA 必須介於 0.0 與 4.0 之間，否則保持原值
    pub fn set_gpa(&mut self, gpa: f64) -> Result<bool> {
        if validate_range("gpa", gpa, 0.0, 4.0).is_err() {
            writeln!(self.out, "Invalid GPA! Must be between 0.0 and 4.0")?;
            return Ok(false);
        }
        self.gpa = gpa;
        writeln!(self.out, "GPA updated to: {}", Real(self.gpa))?;
        Ok(true)
    }

    pub fn display(&self) -> Result<()> {
        writeln!(
            self.out,
            "Name: {}, Roll: {}, GPA: {}",
            self.name,
            self.roll_number,
            Real(self.gpa)
        )?;
        Ok(())
    }
}

impl Drop for Student {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "Destructor called for: {}", self.name);
    }
}

impl Lab for ConstructorsLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Constructors,
            "Classes, constructors and destructors",
            &[
                "private fields behind getters",
                "validating setter",
                "construction messages in declaration order",
                "Drop runs in reverse declaration order",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        writeln!(out, "===== Creating Student Objects =====")?;

        let mut s1 = Student::new(out, "Alice", 101, 3.8)?;
        let s2 = Student::new(out, "Bob", 102, 3.5)?;

        writeln!(out, "\n===== Accessing Student Info =====")?;
        s1.display()?;
        s2.display()?;

        writeln!(out, "\n===== Using Getter Functions =====")?;
        writeln!(out, "Student 1 Name: {}", s1.name())?;
        writeln!(out, "Student 1 GPA: {}", Real(s1.gpa()))?;

        writeln!(out, "\n===== Using Setter Functions =====")?;
        s1.set_gpa(3.9)?;
        s1.set_gpa(5.0)?;

        writeln!(out, "\n===== Objects Going Out of Scope =====")?;
        Ok(())
    }
}
