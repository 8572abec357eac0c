use crate::core::console::{Console, Output};
use crate::core::format::{fixed6, Real};
use crate::core::{Lab, LabId, LabInfo, Result};
use crate::utils::error::LabError;
use crate::utils::validation::validate_range;

pub struct EncapsulationLab;

pub const DAILY_WITHDRAWAL_LIMIT: f64 = 1000.0;
pub const INTEREST_RATE: f64 = 0.04;

/// 帳戶的內部狀態全部私有，只能透過驗證過的操作修改
#[derive(Debug)]
pub struct Account {
    out: Output,
    account_number: String,
    balance: f64,
    holder: String,
    pin: i32,
    history: Vec<String>,
}

impl Account {
    pub fn new(
        out: &Output,
        account_number: &str,
        holder: &str,
        pin: i32,
        initial_balance: f64,
    ) -> Result<Self> {
        validate_range("pin", pin, 1000, 9999)?;
        if initial_balance < 0.0 {
            return Err(LabError::InvalidValueError {
                field: "initial_balance".to_string(),
                value: Real(initial_balance).to_string(),
                reason: "Balance cannot be negative".to_string(),
            });
        }
        writeln!(out, "Account created for {}", holder)?;
        let mut account = Self {
            out: out.clone(),
            account_number: account_number.to_string(),
            balance: initial_balance,
            holder: holder.to_string(),
            pin,
            history: Vec::new(),
        };
        account.record(format!(
            "Account opened with balance: ${}",
            fixed6(initial_balance)
        ));
        Ok(account)
    }

    fn validate_pin(&self, entered_pin: i32) -> bool {
        self.pin == entered_pin
    }

    fn record(&mut self, entry: String) {
        self.history.push(entry);
    }

    /// 驗證 PIN；錯誤時印出訊息
    fn authorize(&self, entered_pin: i32) -> Result<bool> {
        if self.validate_pin(entered_pin) {
            return Ok(true);
        }
        writeln!(self.out, "Error: Invalid PIN!")?;
        Ok(false)
    }

    fn reject(&self, message: &str) -> Result<bool> {
        writeln!(self.out, "Error: {}", message)?;
        Ok(false)
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn set_holder(&mut self, new_name: &str) -> Result<bool> {
        if new_name.is_empty() {
            return self.reject("Name cannot be empty!");
        }
        self.holder = new_name.to_string();
        Ok(true)
    }

    pub fn change_pin(&mut self, old_pin: i32, new_pin: i32) -> Result<bool> {
        if !self.validate_pin(old_pin) {
            return self.reject("Invalid current PIN!");
        }
        if !(1000..=9999).contains(&new_pin) {
            return self.reject("PIN must be 4 digits!");
        }
        self.pin = new_pin;
        writeln!(self.out, "PIN changed successfully")?;
        Ok(true)
    }

    pub fn deposit(&mut self, amount: f64, entered_pin: i32) -> Result<bool> {
        if !self.authorize(entered_pin)? {
            return Ok(false);
        }
        if amount <= 0.0 {
            return self.reject("Deposit amount must be positive!");
        }
        self.balance += amount;
        self.record(format!("Deposit: +${}", fixed6(amount)));
        writeln!(
            self.out,
            "Deposited: ${}. New balance: ${}",
            Real(amount),
            Real(self.balance)
        )?;
        Ok(true)
    }

    /// 檢查順序：PIN、金額為正、每日上限、餘額
    pub fn withdraw(&mut self, amount: f64, entered_pin: i32) -> Result<bool> {
        if !self.authorize(entered_pin)? {
            return Ok(false);
        }
        if amount <= 0.0 {
            return self.reject("Withdrawal amount must be positive!");
        }
        if amount > DAILY_WITHDRAWAL_LIMIT {
            return self.reject("Daily withdrawal limit is $1000!");
        }
        if amount > self.balance {
            self.reject("Insufficient funds!")?;
            writeln!(self.out, "Available balance: ${}", Real(self.balance))?;
            return Ok(false);
        }
        self.balance -= amount;
        self.record(format!("Withdrawal: -${}", fixed6(amount)));
        writeln!(
            self.out,
            "Withdrawn: ${}. New balance: ${}",
            Real(amount),
            Real(self.balance)
        )?;
        Ok(true)
    }

    pub fn transfer(&mut self, recipient: &mut Account, amount: f64, entered_pin: i32) -> Result<bool> {
        if !self.authorize(entered_pin)? {
            return Ok(false);
        }
        if amount <= 0.0 {
            return self.reject("Transfer amount must be positive!");
        }
        if amount > self.balance {
            return self.reject("Insufficient funds for transfer!");
        }

        self.balance -= amount;
        recipient.balance += amount;

        self.record(format!(
            "Transfer to {}: -${}",
            recipient.account_number,
            fixed6(amount)
        ));
        recipient.record(format!(
            "Transfer from {}: +${}",
            self.account_number,
            fixed6(amount)
        ));

        writeln!(
            self.out,
            "Transferred ${} to {}",
            Real(amount),
            recipient.account_number
        )?;
        Ok(true)
    }

    /// 年利率 4%
    pub fn interest_earned(&self) -> f64 {
        self.balance * INTEREST_RATE
    }

    pub fn apply_interest(&mut self, entered_pin: i32) -> Result<()> {
        if !self.authorize(entered_pin)? {
            return Ok(());
        }
        let interest = self.interest_earned();
        self.balance += interest;
        self.record(format!("Interest applied: +${}", fixed6(interest)));
        writeln!(self.out, "Interest applied: ${}", Real(interest))?;
        Ok(())
    }

    pub fn display_history(&self, entered_pin: i32) -> Result<()> {
        if !self.authorize(entered_pin)? {
            return Ok(());
        }
        writeln!(
            self.out,
            "\n--- Transaction History for {} ---",
            self.account_number
        )?;
        for entry in &self.history {
            writeln!(self.out, "  {}", entry)?;
        }
        Ok(())
    }
}

impl Drop for Account {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "Account closed for {}", self.holder);
    }
}

impl Lab for EncapsulationLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Encapsulation,
            "Encapsulation and data hiding",
            &[
                "private state reachable only through methods",
                "PIN-guarded operations with ordered validation",
                "internal transaction history",
                "transfer touching two accounts through &mut",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        writeln!(out, "===== CREATING ENCAPSULATED ACCOUNTS =====")?;
        let mut account1 = Account::new(out, "ACC001", "Alice", 1234, 1000.0)?;
        let mut account2 = Account::new(out, "ACC002", "Bob", 5678, 500.0)?;

        writeln!(out, "\n===== ACCESSING PRIVATE DATA VIA GETTERS =====")?;
        writeln!(out, "Account: {}", account1.account_number())?;
        writeln!(out, "Holder: {}", account1.holder())?;
        writeln!(out, "Balance: ${}", Real(account1.balance()))?;

        writeln!(
            out,
            "\n===== ATTEMPTING INVALID OPERATIONS (Encapsulation Prevents) ====="
        )?;
        account1.deposit(-100.0, 1234)?;
        account1.withdraw(2000.0, 1234)?;
        account1.withdraw(500.0, 9999)?;

        writeln!(out, "\n===== VALID OPERATIONS =====")?;
        account1.deposit(500.0, 1234)?;
        account1.withdraw(250.0, 1234)?;

        writeln!(out, "\n===== CALCULATING INTEREST =====")?;
        writeln!(
            out,
            "Interest earned on ${}: ${}",
            Real(account1.balance()),
            Real(account1.interest_earned())
        )?;
        account1.apply_interest(1234)?;

        writeln!(out, "\n===== TRANSFER BETWEEN ACCOUNTS =====")?;
        account1.transfer(&mut account2, 300.0, 1234)?;
        writeln!(out, "Account 1 balance: ${}", Real(account1.balance()))?;
        writeln!(out, "Account 2 balance: ${}", Real(account2.balance()))?;

        writeln!(out, "\n===== CHANGING PIN =====")?;
        account1.change_pin(9999, 4321)?;
        account1.change_pin(1234, 4321)?;
        account1.withdraw(100.0, 4321)?;

        writeln!(out, "\n===== VIEWING TRANSACTION HISTORY =====")?;
        account1.display_history(4321)?;

        writeln!(out, "\n===== ATTEMPTING UNAUTHORIZED ACCESS =====")?;
        account1.display_history(9999)?;

        writeln!(out, "\n===== PROGRAM END (Destructor Called) =====")?;
        Ok(())
    }
}
