use crate::core::console::{Console, Output};
use crate::core::format::Real;
use crate::core::{Lab, LabId, LabInfo, Result};
use std::cell::RefCell;
use std::rc::Rc;

pub struct StaticMembersLab;

pub const MINIMUM_BALANCE: f64 = 100.0;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BankTotals {
    pub accounts: u32,
    pub balance: f64,
}

/// 取代類別靜態成員：所有帳戶共享同一份統計，由 Bank 建立帳戶時交給它們
#[derive(Debug, Clone)]
pub struct Bank {
    out: Output,
    totals: Rc<RefCell<BankTotals>>,
}

impl Bank {
    pub fn new(out: &Output) -> Self {
        Self {
            out: out.clone(),
            totals: Rc::new(RefCell::new(BankTotals::default())),
        }
    }

    pub fn open_account(&self, holder: &str, initial_balance: f64) -> Result<BankAccount> {
        {
            let mut totals = self.totals.borrow_mut();
            totals.accounts += 1;
            totals.balance += initial_balance;
        }
        writeln!(
            self.out,
            "Account created for {} with balance ${}",
            holder,
            Real(initial_balance)
        )?;

        Ok(BankAccount {
            out: self.out.clone(),
            totals: Rc::clone(&self.totals),
            holder: holder.to_string(),
            balance: initial_balance,
        })
    }

    pub fn total_accounts(&self) -> u32 {
        self.totals.borrow().accounts
    }

    pub fn total_balance(&self) -> f64 {
        self.totals.borrow().balance
    }

    pub fn minimum_balance() -> f64 {
        MINIMUM_BALANCE
    }

    pub fn display_stats(&self) -> Result<()> {
        let totals = *self.totals.borrow();
        writeln!(self.out, "\n===== BANK STATISTICS =====")?;
        writeln!(self.out, "Total Accounts: {}", totals.accounts)?;
        writeln!(self.out, "Total Balance in Bank: ${}", Real(totals.balance))?;
        if totals.accounts > 0 {
            writeln!(
                self.out,
                "Average Balance: ${}",
                Real(totals.balance / f64::from(totals.accounts))
            )?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct BankAccount {
    out: Output,
    totals: Rc<RefCell<BankTotals>>,
    holder: String,
    balance: f64,
}

impl BankAccount {
    /// 非正數金額直接忽略
    pub fn deposit(&mut self, amount: f64) -> Result<()> {
        if amount > 0.0 {
            self.balance += amount;
            self.totals.borrow_mut().balance += amount;
            writeln!(self.out, "{} deposited ${}", self.holder, Real(amount))?;
        }
        Ok(())
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<bool> {
        if amount > 0.0 && self.balance - amount >= MINIMUM_BALANCE {
            self.balance -= amount;
            self.totals.borrow_mut().balance -= amount;
            writeln!(self.out, "{} withdrew ${}", self.holder, Real(amount))?;
            Ok(true)
        } else {
            writeln!(
                self.out,
                "Withdrawal failed - insufficient funds or below minimum"
            )?;
            Ok(false)
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }
}

impl Drop for BankAccount {
    fn drop(&mut self) {
        let mut totals = self.totals.borrow_mut();
        totals.balance -= self.balance;
        totals.accounts -= 1;
    }
}

impl Lab for StaticMembersLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::StaticMembers,
            "Shared state instead of static members",
            &[
                "per-instance fields vs shared totals",
                "factory hands every account the same Rc<RefCell<_>>",
                "associated constant and functions without self",
                "Drop deregisters an account from the totals",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        let bank = Bank::new(out);
        writeln!(out, "===== Creating Bank Accounts =====")?;

        let mut acc1 = bank.open_account("Alice", 1000.0)?;
        let mut acc2 = bank.open_account("Bob", 1500.0)?;
        let _acc3 = bank.open_account("Charlie", 2000.0)?;

        writeln!(out, "\n===== Accessing Static Members via Static Functions =====")?;
        writeln!(out, "Total Accounts (static): {}", bank.total_accounts())?;
        writeln!(out, "Total Balance (static): ${}", Real(bank.total_balance()))?;

        writeln!(out, "\n===== Performing Transactions =====")?;
        acc1.deposit(500.0)?;
        bank.display_stats()?;

        acc2.withdraw(300.0)?;
        bank.display_stats()?;

        writeln!(out, "\n===== Instance Variables vs Static Variables =====")?;
        writeln!(out, "Alice's Balance: ${} (instance variable)", Real(acc1.balance()))?;
        writeln!(out, "Bob's Balance: ${} (instance variable)", Real(acc2.balance()))?;
        writeln!(
            out,
            "Total in Bank: ${} (static variable - shared)",
            Real(bank.total_balance())
        )?;

        writeln!(out, "\n===== Attempting Invalid Withdrawal =====")?;
        writeln!(out, "Minimum Balance Required: ${}", Real(Bank::minimum_balance()))?;
        acc1.withdraw(2000.0)?;

        writeln!(out, "\n===== Final Bank Statistics =====")?;
        bank.display_stats()?;

        writeln!(out, "\n===== Account Deletion (Accounts Going Out of Scope) =====")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::TranscriptBuffer;

    #[test]
    fn test_totals_follow_account_lifetimes() {
        let out = Output::new(TranscriptBuffer::new());
        let bank = Bank::new(&out);
        let mut a = bank.open_account("A", 300.0).unwrap();
        {
            let b = bank.open_account("B", 200.0).unwrap();
            assert_eq!(bank.total_accounts(), 2);
            assert_eq!(bank.total_balance(), 500.0);
            assert_eq!(b.holder(), "B");
        }
        assert_eq!(bank.total_accounts(), 1);
        assert_eq!(bank.total_balance(), 300.0);

        a.deposit(-5.0).unwrap();
        assert_eq!(a.balance(), 300.0);
        assert!(a.withdraw(200.0).unwrap());
        assert!(!a.withdraw(0.5).unwrap());
        assert_eq!(bank.total_balance(), 100.0);

        drop(a);
        assert_eq!(bank.total_accounts(), 0);
        assert_eq!(bank.total_balance(), 0.0);
    }

    #[test]
    fn test_stats_skip_average_without_accounts() {
        let buffer = TranscriptBuffer::new();
        let bank = Bank::new(&Output::new(buffer.clone()));
        bank.display_stats().unwrap();
        assert_eq!(
            buffer.contents(),
            "\n===== BANK STATISTICS =====\nTotal Accounts: 0\nTotal Balance in Bank: $0\n"
        );
    }
}
