use crate::core::console::{Console, Output};
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct PolymorphismLab;

/// 所有動物共用的部分
#[derive(Debug)]
pub struct AnimalCore {
    out: Output,
    name: String,
}

impl AnimalCore {
    pub fn new(out: &Output, name: &str) -> Self {
        Self {
            out: out.clone(),
            name: name.to_string(),
        }
    }
}

impl Drop for AnimalCore {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "Animal Destructor: {} destroyed", self.name);
    }
}

/// 動態派發的介面；有預設實作的方法可以被覆寫，`sleep` 則不應覆寫
pub trait Animal {
    fn core(&self) -> &AnimalCore;

    fn name(&self) -> &str {
        &self.core().name
    }

    fn make_sound(&self) -> Result<()> {
        writeln!(self.core().out, "Animal makes a generic sound")?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("I am an animal named {}", self.name())
    }

    fn sleep(&self) -> Result<()> {
        writeln!(self.core().out, "{} is sleeping...", self.name())?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct Dog {
    core: AnimalCore,
    breed: String,
}

impl Dog {
    pub fn new(out: &Output, name: &str, breed: &str) -> Self {
        Self {
            core: AnimalCore::new(out, name),
            breed: breed.to_string(),
        }
    }

    pub fn fetch(&self) -> Result<()> {
        writeln!(self.core.out, "{} fetches the ball!", self.core.name)?;
        Ok(())
    }
}

impl Animal for Dog {
    fn core(&self) -> &AnimalCore {
        &self.core
    }

    fn make_sound(&self) -> Result<()> {
        writeln!(self.core.out, "{} barks: WOOF WOOF!", self.core.name)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("I am a dog named {} of breed {}", self.core.name, self.breed)
    }
}

impl Drop for Dog {
    fn drop(&mut self) {
        let _ = writeln!(self.core.out, "Dog Destructor: {} destroyed", self.core.name);
    }
}

#[derive(Debug)]
pub struct Cat {
    core: AnimalCore,
    is_indoor: bool,
}

impl Cat {
    pub fn new(out: &Output, name: &str, indoor: bool) -> Self {
        Self {
            core: AnimalCore::new(out, name),
            is_indoor: indoor,
        }
    }

    pub fn scratch(&self) -> Result<()> {
        writeln!(self.core.out, "{} scratches the furniture!", self.core.name)?;
        Ok(())
    }
}

impl Animal for Cat {
    fn core(&self) -> &AnimalCore {
        &self.core
    }

    fn make_sound(&self) -> Result<()> {
        writeln!(self.core.out, "{} meows: Meow meow!", self.core.name)?;
        Ok(())
    }

    fn description(&self) -> String {
        let habitat = if self.is_indoor {
            " (indoor cat)"
        } else {
            " (outdoor cat)"
        };
        format!("I am a cat named {}{}", self.core.name, habitat)
    }
}

impl Drop for Cat {
    fn drop(&mut self) {
        let _ = writeln!(self.core.out, "Cat Destructor: {} destroyed", self.core.name);
    }
}

#[derive(Debug)]
pub struct Bird {
    core: AnimalCore,
    color: String,
}

impl Bird {
    pub fn new(out: &Output, name: &str, color: &str) -> Self {
        Self {
            core: AnimalCore::new(out, name),
            color: color.to_string(),
        }
    }

    pub fn fly(&self) -> Result<()> {
        writeln!(self.core.out, "{} flies in the sky!", self.core.name)?;
        Ok(())
    }
}

impl Animal for Bird {
    fn core(&self) -> &AnimalCore {
        &self.core
    }

    fn make_sound(&self) -> Result<()> {
        writeln!(self.core.out, "{} chirps: Tweet tweet!", self.core.name)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("I am a {} bird named {}", self.color, self.core.name)
    }
}

impl Drop for Bird {
    fn drop(&mut self) {
        let _ = writeln!(self.core.out, "Bird Destructor: {} destroyed", self.core.name);
    }
}

/// 只依賴 trait object，不知道實際型別
pub fn animal_showcase(animal: &dyn Animal) -> Result<()> {
    writeln!(animal.core().out, "\n--- {} ---", animal.name())?;
    animal.make_sound()?;
    writeln!(animal.core().out, "{}", animal.description())?;
    animal.sleep()?;
    Ok(())
}

impl Lab for PolymorphismLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Polymorphism,
            "Polymorphism and dynamic dispatch",
            &[
                "trait methods overridden per type",
                "shared default method (sleep)",
                "dispatch through &dyn Animal",
                "dropping a Box<dyn Animal> runs the concrete Drop",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        writeln!(out, "===== Creating Animals (Polymorphic Objects) =====")?;

        let dog = Dog::new(out, "Buddy", "Golden Retriever");
        let cat = Cat::new(out, "Whiskers", true);
        let bird = Bird::new(out, "Tweety", "yellow");

        writeln!(out, "\n===== Direct Function Calls =====")?;
        dog.make_sound()?;
        cat.make_sound()?;
        bird.make_sound()?;

        writeln!(
            out,
            "\n===== Polymorphism: Base Class Pointers to Derived Objects ====="
        )?;
        let animals: [&dyn Animal; 3] = [&dog, &cat, &bird];
        for animal in animals {
            animal_showcase(animal)?;
        }

        writeln!(out, "\n===== Type-Specific Methods =====")?;
        dog.fetch()?;
        cat.scratch()?;
        bird.fly()?;

        writeln!(out, "\n===== Virtual Destructors in Action =====")?;
        {
            let temp_animal: Box<dyn Animal> = Box::new(Dog::new(out, "Temporary", "Labrador"));
            drop(temp_animal);
        }

        writeln!(out, "\n===== End of Main (Destructors Called) =====")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::TranscriptBuffer;

    struct Generic {
        core: AnimalCore,
    }

    impl Animal for Generic {
        fn core(&self) -> &AnimalCore {
            &self.core
        }
    }

    #[test]
    fn test_default_methods_apply_without_overrides() {
        let buffer = TranscriptBuffer::new();
        let out = Output::new(buffer.clone());
        let generic = Generic {
            core: AnimalCore::new(&out, "Blob"),
        };

        assert_eq!(generic.description(), "I am an animal named Blob");
        generic.make_sound().unwrap();
        drop(generic);

        assert_eq!(
            buffer.contents(),
            "Animal makes a generic sound\nAnimal Destructor: Blob destroyed\n"
        );
    }

    #[test]
    fn test_outdoor_cat_description() {
        let out = Output::new(TranscriptBuffer::new());
        let cat = Cat::new(&out, "Tom", false);
        assert_eq!(cat.description(), "I am a cat named Tom (outdoor cat)");
        assert_eq!(cat.name(), "Tom");
    }
}
