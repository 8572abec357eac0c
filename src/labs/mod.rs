pub mod basics;
pub mod containers;
pub mod oop;

use crate::domain::model::{LabGroup, LabId, LabInfo};
use crate::domain::ports::{Lab, SettingsProvider};

pub fn build(id: LabId, settings: &dyn SettingsProvider) -> Box<dyn Lab> {
    match id {
        LabId::Conditions => Box::new(basics::conditions::ConditionsLab),
        LabId::Functions => Box::new(basics::functions::FunctionsLab),
        LabId::Loops => Box::new(basics::loops::LoopsLab),
        LabId::Operators => Box::new(basics::operators::OperatorsLab),
        LabId::Arrays => Box::new(containers::arrays::ArraysLab),
        LabId::Vectors => Box::new(containers::vectors::VectorsLab),
        LabId::Pointers => Box::new(containers::pointers::PointersLab),
        LabId::Bitwise => Box::new(containers::bitwise::BitwiseLab),
        LabId::FileHandling => Box::new(containers::file_handling::FileHandlingLab::new(
            settings.file_path(),
        )),
        LabId::Constructors => Box::new(oop::constructors::ConstructorsLab),
        LabId::Inheritance => Box::new(oop::inheritance::InheritanceLab),
        LabId::Polymorphism => Box::new(oop::polymorphism::PolymorphismLab),
        LabId::StaticMembers => Box::new(oop::static_members::StaticMembersLab),
        LabId::AbstractClasses => Box::new(oop::abstract_classes::AbstractClassesLab),
        LabId::MultipleInheritance => {
            Box::new(oop::multiple_inheritance::MultipleInheritanceLab)
        }
        LabId::Encapsulation => Box::new(oop::encapsulation::EncapsulationLab),
    }
}

pub fn info(id: LabId, settings: &dyn SettingsProvider) -> LabInfo {
    build(id, settings).info()
}

/// 全部實驗的目錄，可依群組過濾
pub fn catalog(settings: &dyn SettingsProvider, group: Option<LabGroup>) -> Vec<LabInfo> {
    LabId::ALL
        .into_iter()
        .filter(|id| group.is_none_or(|g| id.group() == g))
        .map(|id| info(id, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::LabbookConfig;

    #[test]
    fn test_every_lab_reports_its_own_id() {
        let config = LabbookConfig::default();
        for id in LabId::ALL {
            let info = info(id, &config);
            assert_eq!(info.id, id);
            assert_eq!(info.group, id.group());
            assert!(!info.title.is_empty());
            assert!(!info.concepts.is_empty(), "{} has no concepts", id);
        }
    }

    #[test]
    fn test_catalog_group_filter() {
        let config = LabbookConfig::default();
        assert_eq!(catalog(&config, None).len(), 16);
        assert_eq!(catalog(&config, Some(LabGroup::Basics)).len(), 4);
        assert_eq!(catalog(&config, Some(LabGroup::Containers)).len(), 5);
        assert_eq!(catalog(&config, Some(LabGroup::Oop)).len(), 7);
    }
}
