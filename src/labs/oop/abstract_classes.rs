use crate::core::console::{Console, Output};
use crate::core::format::Real;
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct AbstractClassesLab;

#[derive(Debug)]
pub struct EmployeeRecord {
    out: Output,
    name: String,
    employee_id: i32,
    salary: f64,
}

impl EmployeeRecord {
    pub fn new(out: &Output, name: &str, employee_id: i32, salary: f64) -> Self {
        Self {
            out: out.clone(),
            name: name.to_string(),
            employee_id,
            salary,
        }
    }
}

/// `calculate_salary` 與 `display_role` 沒有預設實作，每個型別都必須提供
pub trait Employee {
    fn record(&self) -> &EmployeeRecord;
    fn record_mut(&mut self) -> &mut EmployeeRecord;

    fn calculate_salary(&mut self) -> Result<()>;
    fn display_role(&self) -> Result<()>;

    fn give_bonus(&mut self, amount: f64) -> Result<()> {
        let record = self.record_mut();
        record.salary += amount;
        writeln!(record.out, "{} received bonus: ${}", record.name, Real(amount))?;
        Ok(())
    }

    fn display_basic_info(&self) -> Result<()> {
        let record = self.record();
        writeln!(
            record.out,
            "ID: {}, Name: {}, Salary: ${}",
            record.employee_id,
            record.name,
            Real(record.salary)
        )?;
        Ok(())
    }

    fn salary(&self) -> f64 {
        self.record().salary
    }

    fn name(&self) -> &str {
        &self.record().name
    }
}

#[derive(Debug)]
pub struct Manager {
    record: EmployeeRecord,
    team_size: i32,
}

impl Manager {
    pub fn new(out: &Output, name: &str, id: i32, salary: f64, team_size: i32) -> Self {
        Self {
            record: EmployeeRecord::new(out, name, id, salary),
            team_size,
        }
    }

    pub fn conduct_review(&self) -> Result<()> {
        writeln!(
            self.record.out,
            "{} is conducting performance reviews...",
            self.record.name
        )?;
        Ok(())
    }
}

impl Employee for Manager {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut EmployeeRecord {
        &mut self.record
    }

    fn calculate_salary(&mut self) -> Result<()> {
        let out = self.record.out.clone();
        writeln!(out, "Manager {} salary calculation:", self.record.name)?;
        // 每位團隊成員 $500
        let bonus = 5000.0 + f64::from(self.team_size * 500);
        self.record.salary += bonus;
        writeln!(out, "  Base + Team Bonus: {}", Real(bonus))?;
        writeln!(out, "  Total Salary: ${}", Real(self.record.salary))?;
        Ok(())
    }

    fn display_role(&self) -> Result<()> {
        writeln!(
            self.record.out,
            "Role: Manager (supervising {} team members)",
            self.team_size
        )?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct Developer {
    record: EmployeeRecord,
    programming_language: String,
    projects_completed: i32,
}

impl Developer {
    pub fn new(
        out: &Output,
        name: &str,
        id: i32,
        salary: f64,
        language: &str,
        projects_completed: i32,
    ) -> Self {
        Self {
            record: EmployeeRecord::new(out, name, id, salary),
            programming_language: language.to_string(),
            projects_completed,
        }
    }

    pub fn language_bonus(&self) -> f64 {
        match self.programming_language.as_str() {
            "C++" => 3000.0,
            "Python" => 2500.0,
            "Java" => 2000.0,
            _ => 0.0,
        }
    }

    pub fn write_code(&self) -> Result<()> {
        writeln!(
            self.record.out,
            "{} is writing {} code...",
            self.record.name, self.programming_language
        )?;
        Ok(())
    }
}

impl Employee for Developer {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut EmployeeRecord {
        &mut self.record
    }

    fn calculate_salary(&mut self) -> Result<()> {
        let out = self.record.out.clone();
        writeln!(out, "Developer {} salary calculation:", self.record.name)?;
        let project_bonus = f64::from(self.projects_completed * 1000);
        let language_bonus = self.language_bonus();

        self.record.salary += project_bonus + language_bonus;
        writeln!(out, "  Project Bonus: ${}", Real(project_bonus))?;
        writeln!(out, "  Language Bonus: ${}", Real(language_bonus))?;
        writeln!(out, "  Total Salary: ${}", Real(self.record.salary))?;
        Ok(())
    }

    fn display_role(&self) -> Result<()> {
        writeln!(
            self.record.out,
            "Role: Developer (specializes in {})",
            self.programming_language
        )?;
        Ok(())
    }
}

pub const CREATIVE_BONUS: f64 = 3500.0;

#[derive(Debug)]
pub struct Designer {
    record: EmployeeRecord,
    design_tools: String,
}

impl Designer {
    pub fn new(out: &Output, name: &str, id: i32, salary: f64, tools: &str) -> Self {
        Self {
            record: EmployeeRecord::new(out, name, id, salary),
            design_tools: tools.to_string(),
        }
    }

    pub fn create_design(&self) -> Result<()> {
        writeln!(
            self.record.out,
            "{} is creating UI/UX design using {}...",
            self.record.name, self.design_tools
        )?;
        Ok(())
    }
}

impl Employee for Designer {
    fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    fn record_mut(&mut self) -> &mut EmployeeRecord {
        &mut self.record
    }

    fn calculate_salary(&mut self) -> Result<()> {
        let out = self.record.out.clone();
        writeln!(out, "Designer {} salary calculation:", self.record.name)?;
        self.record.salary += CREATIVE_BONUS;
        writeln!(out, "  Creative Bonus: ${}", Real(CREATIVE_BONUS))?;
        writeln!(out, "  Total Salary: ${}", Real(self.record.salary))?;
        Ok(())
    }

    fn display_role(&self) -> Result<()> {
        writeln!(self.record.out, "Role: Designer (using {})", self.design_tools)?;
        Ok(())
    }

    /// 設計師多拿 20%
    fn give_bonus(&mut self, amount: f64) -> Result<()> {
        let boosted = amount * 1.2;
        writeln!(
            self.record.out,
            "DESIGN BONUS: Giving {} (20% extra for designers)",
            Real(boosted)
        )?;
        self.record.salary += boosted;
        Ok(())
    }
}

impl Lab for AbstractClassesLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::AbstractClasses,
            "Abstract interfaces",
            &[
                "required trait methods with no default",
                "overridable default method (give_bonus)",
                "shared non-overridden helpers",
                "processing a heterogeneous slice of &mut dyn Employee",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        writeln!(out, "===== DEMONSTRATING ABSTRACT CLASSES =====")?;
        writeln!(out, "Note: Cannot create Employee object directly (abstract)")?;

        writeln!(out, "\n===== Creating Concrete Employee Objects =====")?;
        let mut manager = Manager::new(out, "Alice Johnson", 101, 50000.0, 5);
        let mut developer = Developer::new(out, "Bob Smith", 102, 45000.0, "C++", 8);
        let mut designer = Designer::new(out, "Carol White", 103, 40000.0, "Adobe XD");

        writeln!(out, "\n===== Polymorphic Array of Employees =====")?;
        {
            let employees: [&mut dyn Employee; 3] = [&mut manager, &mut developer, &mut designer];

            writeln!(out, "\n===== PROCESSING ALL EMPLOYEES =====")?;
            for (i, employee) in employees.into_iter().enumerate() {
                writeln!(out, "\n--- Employee {} ---", i + 1)?;
                employee.display_basic_info()?;
                employee.display_role()?;
                employee.calculate_salary()?;
            }
        }

        writeln!(out, "\n===== GIVING BONUSES (Some overridden) =====")?;
        manager.give_bonus(1000.0)?;
        developer.give_bonus(1000.0)?;
        designer.give_bonus(1000.0)?;

        writeln!(out, "\n===== TYPE-SPECIFIC METHODS =====")?;
        manager.conduct_review()?;
        developer.write_code()?;
        designer.create_design()?;

        writeln!(out, "\n===== SALARIES AFTER BONUSES =====")?;
        let employees: [&dyn Employee; 3] = [&manager, &developer, &designer];
        for employee in employees {
            writeln!(out, "{}: ${}", employee.name(), Real(employee.salary()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::TranscriptBuffer;

    #[test]
    fn test_language_bonus_table() {
        let out = Output::new(TranscriptBuffer::new());
        let bonus = |lang: &str| Developer::new(&out, "D", 1, 0.0, lang, 0).language_bonus();
        assert_eq!(bonus("C++"), 3000.0);
        assert_eq!(bonus("Python"), 2500.0);
        assert_eq!(bonus("Java"), 2000.0);
        assert_eq!(bonus("Rust"), 0.0);
    }

    #[test]
    fn test_designer_bonus_override() {
        let buffer = TranscriptBuffer::new();
        let out = Output::new(buffer.clone());
        let mut designer = Designer::new(&out, "Eve", 9, 1000.0, "Figma");
        let mut manager = Manager::new(&out, "Max", 10, 1000.0, 0);

        designer.give_bonus(100.0).unwrap();
        manager.give_bonus(100.0).unwrap();

        assert!((designer.salary() - 1120.0).abs() < 1e-9);
        assert_eq!(manager.salary(), 1100.0);
        assert_eq!(
            buffer.contents(),
            "DESIGN BONUS: Giving 120 (20% extra for designers)\nMax received bonus: $100\n"
        );
    }
}
