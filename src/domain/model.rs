use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::LabError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum LabGroup {
    Basics,
    Containers,
    Oop,
}

impl LabGroup {
    pub fn name(self) -> &'static str {
        match self {
            LabGroup::Basics => "basics",
            LabGroup::Containers => "containers",
            LabGroup::Oop => "oop",
        }
    }
}

impl fmt::Display for LabGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum LabId {
    Conditions,
    Functions,
    Loops,
    Operators,
    Arrays,
    Vectors,
    Pointers,
    Bitwise,
    FileHandling,
    Constructors,
    Inheritance,
    Polymorphism,
    StaticMembers,
    AbstractClasses,
    MultipleInheritance,
    Encapsulation,
}

impl LabId {
    /// 目錄順序
    pub const ALL: [LabId; 16] = [
        LabId::Conditions,
        LabId::Functions,
        LabId::Loops,
        LabId::Operators,
        LabId::Arrays,
        LabId::Vectors,
        LabId::Pointers,
        LabId::Bitwise,
        LabId::FileHandling,
        LabId::Constructors,
        LabId::Inheritance,
        LabId::Polymorphism,
        LabId::StaticMembers,
        LabId::AbstractClasses,
        LabId::MultipleInheritance,
        LabId::Encapsulation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LabId::Conditions => "conditions",
            LabId::Functions => "functions",
            LabId::Loops => "loops",
            LabId::Operators => "operators",
            LabId::Arrays => "arrays",
            LabId::Vectors => "vectors",
            LabId::Pointers => "pointers",
            LabId::Bitwise => "bitwise",
            LabId::FileHandling => "file-handling",
            LabId::Constructors => "constructors",
            LabId::Inheritance => "inheritance",
            LabId::Polymorphism => "polymorphism",
            LabId::StaticMembers => "static-members",
            LabId::AbstractClasses => "abstract-classes",
            LabId::MultipleInheritance => "multiple-inheritance",
            LabId::Encapsulation => "encapsulation",
        }
    }

    pub fn group(self) -> LabGroup {
        match self {
            LabId::Conditions | LabId::Functions | LabId::Loops | LabId::Operators => {
                LabGroup::Basics
            }
            LabId::Arrays
            | LabId::Vectors
            | LabId::Pointers
            | LabId::Bitwise
            | LabId::FileHandling => LabGroup::Containers,
            _ => LabGroup::Oop,
        }
    }

    /// 需要從輸入讀取資料的實驗
    pub fn is_interactive(self) -> bool {
        matches!(self, LabId::Conditions | LabId::Functions | LabId::Loops)
    }
}

impl fmt::Display for LabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabId {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| LabError::UnknownLabError {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabInfo {
    pub id: LabId,
    pub group: LabGroup,
    pub title: String,
    pub interactive: bool,
    pub concepts: Vec<String>,
}

impl LabInfo {
    pub fn new(id: LabId, title: &str, concepts: &[&str]) -> Self {
        Self {
            id,
            group: id.group(),
            title: title.to_string(),
            interactive: id.is_interactive(),
            concepts: concepts.iter().map(|c| c.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub lab: LabId,
    pub transcript: Option<String>,
    /// 輸出的行數
    pub lines: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lab_id_names_round_trip_through_from_str() {
        for id in LabId::ALL {
            assert_eq!(id.name().parse::<LabId>().unwrap(), id);
        }
        assert!("lab-zero".parse::<LabId>().is_err());
    }

    #[test]
    fn test_serde_names_match_cli_names() {
        let json = serde_json::to_string(&LabId::MultipleInheritance).unwrap();
        assert_eq!(json, "\"multiple-inheritance\"");
        let json = serde_json::to_string(&LabGroup::Oop).unwrap();
        assert_eq!(json, "\"oop\"");
    }

    #[test]
    fn test_groups_and_interactivity() {
        assert_eq!(LabId::Operators.group(), LabGroup::Basics);
        assert_eq!(LabId::FileHandling.group(), LabGroup::Containers);
        assert_eq!(LabId::Encapsulation.group(), LabGroup::Oop);
        let interactive: Vec<_> = LabId::ALL.into_iter().filter(|id| id.is_interactive()).collect();
        assert_eq!(interactive, vec![LabId::Conditions, LabId::Functions, LabId::Loops]);
    }
}
