use crate::core::console::{Console, Output};
use crate::core::format::Real;
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct MultipleInheritanceLab;

pub trait Drawable {
    fn draw(&self) -> Result<()>;

    fn set_color(&self, color: &str) -> Result<()>;
}

pub trait Saveable {
    fn save(&mut self, filename: &str) -> Result<()>;
    fn load(&self, filename: &str) -> Result<()>;

    fn is_modified(&self) -> bool {
        false
    }
}

pub trait Named {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: &str);
    fn display_name(&self) -> Result<()>;
}

/// 各能力的生命週期標記：建構與 drop 時各印一行
#[derive(Debug)]
struct DrawablePart {
    out: Output,
}

impl DrawablePart {
    fn new(out: &Output) -> Result<Self> {
        writeln!(out, "Drawable constructor")?;
        Ok(Self { out: out.clone() })
    }
}

impl Drop for DrawablePart {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "Drawable destructor");
    }
}

#[derive(Debug)]
struct SaveablePart {
    out: Output,
}

impl SaveablePart {
    fn new(out: &Output) -> Result<Self> {
        writeln!(out, "Saveable constructor")?;
        Ok(Self { out: out.clone() })
    }
}

impl Drop for SaveablePart {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "Saveable destructor");
    }
}

#[derive(Debug)]
struct NamedPart {
    out: Output,
    name: String,
}

impl NamedPart {
    fn new(out: &Output, name: &str) -> Result<Self> {
        writeln!(out, "Named constructor: {}", name)?;
        Ok(Self {
            out: out.clone(),
            name: name.to_string(),
        })
    }
}

impl Drop for NamedPart {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "Named destructor");
    }
}

/// 組合三個能力。欄位依宣告順序 drop，因此與建構順序相反地排列
#[derive(Debug)]
pub struct Shape {
    named: NamedPart,
    saveable: SaveablePart,
    drawable: DrawablePart,
    out: Output,
    shape_type: String,
    modified: bool,
}

impl Shape {
    pub fn new(out: &Output, shape_type: &str, name: &str) -> Result<Self> {
        let drawable = DrawablePart::new(out)?;
        let saveable = SaveablePart::new(out)?;
        let named = NamedPart::new(out, name)?;
        writeln!(out, "Shape constructor")?;

        Ok(Self {
            named,
            saveable,
            drawable,
            out: out.clone(),
            shape_type: shape_type.to_string(),
            modified: true,
        })
    }

    pub fn shape_type(&self) -> &str {
        &self.shape_type
    }

    pub fn set_shape_type(&mut self, shape_type: &str) {
        self.shape_type = shape_type.to_string();
        self.modified = true;
    }
}

impl Drop for Shape {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "Shape destructor");
    }
}

impl Drawable for Shape {
    fn draw(&self) -> Result<()> {
        writeln!(self.out, "Drawing {} named: {}", self.shape_type, self.named.name)?;
        Ok(())
    }

    fn set_color(&self, color: &str) -> Result<()> {
        writeln!(self.drawable.out, "Setting color to {}", color)?;
        Ok(())
    }
}

impl Saveable for Shape {
    fn save(&mut self, filename: &str) -> Result<()> {
        writeln!(self.saveable.out, "Saving {} to: {}", self.shape_type, filename)?;
        self.modified = false;
        Ok(())
    }

    fn load(&self, filename: &str) -> Result<()> {
        writeln!(self.saveable.out, "Loading {} from: {}", self.shape_type, filename)?;
        Ok(())
    }

    fn is_modified(&self) -> bool {
        self.modified
    }
}

impl Named for Shape {
    fn name(&self) -> &str {
        &self.named.name
    }

    fn set_name(&mut self, name: &str) {
        self.named.name = name.to_string();
    }

    fn display_name(&self) -> Result<()> {
        writeln!(self.named.out, "Object name: {}", self.named.name)?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct Circle {
    shape: Shape,
    radius: f64,
}

impl Circle {
    pub fn new(out: &Output, name: &str, radius: f64) -> Result<Self> {
        let shape = Shape::new(out, "Circle", name)?;
        writeln!(out, "Circle constructor")?;
        Ok(Self { shape, radius })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = radius;
        self.shape.modified = true;
        writeln!(self.shape.out, "Circle radius changed to: {}", Real(self.radius))?;
        Ok(())
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Drop for Circle {
    fn drop(&mut self) {
        let _ = writeln!(self.shape.out, "Circle destructor");
    }
}

impl Drawable for Circle {
    fn draw(&self) -> Result<()> {
        writeln!(
            self.shape.out,
            "Drawing Circle '{}' with radius {}",
            self.shape.name(),
            Real(self.radius)
        )?;
        Ok(())
    }

    fn set_color(&self, color: &str) -> Result<()> {
        self.shape.set_color(color)
    }
}

impl Saveable for Circle {
    fn save(&mut self, filename: &str) -> Result<()> {
        writeln!(
            self.shape.out,
            "Saving Circle to: {} (radius: {})",
            filename,
            Real(self.radius)
        )?;
        self.shape.modified = false;
        Ok(())
    }

    fn load(&self, filename: &str) -> Result<()> {
        self.shape.load(filename)
    }

    fn is_modified(&self) -> bool {
        self.shape.is_modified()
    }
}

impl Named for Circle {
    fn name(&self) -> &str {
        self.shape.name()
    }

    fn set_name(&mut self, name: &str) {
        self.shape.set_name(name);
    }

    fn display_name(&self) -> Result<()> {
        self.shape.display_name()
    }
}

#[derive(Debug)]
pub struct Rectangle {
    shape: Shape,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(out: &Output, name: &str, width: f64, height: f64) -> Result<Self> {
        let shape = Shape::new(out, "Rectangle", name)?;
        writeln!(out, "Rectangle constructor")?;
        Ok(Self {
            shape,
            width,
            height,
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn set_dimensions(&mut self, width: f64, height: f64) -> Result<()> {
        self.width = width;
        self.height = height;
        self.shape.modified = true;
        writeln!(
            self.shape.out,
            "Rectangle dimensions changed to: {}x{}",
            Real(self.width),
            Real(self.height)
        )?;
        Ok(())
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Drop for Rectangle {
    fn drop(&mut self) {
        let _ = writeln!(self.shape.out, "Rectangle destructor");
    }
}

impl Drawable for Rectangle {
    fn draw(&self) -> Result<()> {
        writeln!(
            self.shape.out,
            "Drawing Rectangle '{}' ({}x{})",
            self.shape.name(),
            Real(self.width),
            Real(self.height)
        )?;
        Ok(())
    }

    fn set_color(&self, color: &str) -> Result<()> {
        self.shape.set_color(color)
    }
}

impl Saveable for Rectangle {
    fn save(&mut self, filename: &str) -> Result<()> {
        writeln!(
            self.shape.out,
            "Saving Rectangle to: {} (width: {}, height: {})",
            filename,
            Real(self.width),
            Real(self.height)
        )?;
        self.shape.modified = false;
        Ok(())
    }

    fn load(&self, filename: &str) -> Result<()> {
        self.shape.load(filename)
    }

    fn is_modified(&self) -> bool {
        self.shape.is_modified()
    }
}

impl Named for Rectangle {
    fn name(&self) -> &str {
        self.shape.name()
    }

    fn set_name(&mut self, name: &str) {
        self.shape.set_name(name);
    }

    fn display_name(&self) -> Result<()> {
        self.shape.display_name()
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

impl Lab for MultipleInheritanceLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::MultipleInheritance,
            "Multiple capability interfaces",
            &[
                "one type implementing Drawable, Saveable and Named",
                "capability parts constructed in order and dropped in reverse",
                "the same object viewed through different trait objects",
                "modified flag maintained across save and mutation",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        writeln!(out, "===== CREATING SHAPES (Multiple Inheritance) =====")?;
        let mut circle = Circle::new(out, "MyCircle", 5.0)?;
        let mut rectangle = Rectangle::new(out, "MyRectangle", 10.0, 7.0)?;

        writeln!(out, "\n===== USING DRAWABLE INTERFACE =====")?;
        circle.draw()?;
        rectangle.draw()?;

        writeln!(out, "\n===== USING NAMED INTERFACE =====")?;
        circle.display_name()?;
        rectangle.display_name()?;

        writeln!(out, "\n===== USING SAVEABLE INTERFACE =====")?;
        writeln!(out, "Circle modified? {}", yes_no(circle.is_modified()))?;
        circle.save("circle.txt")?;
        writeln!(out, "Circle modified? {}", yes_no(circle.is_modified()))?;

        writeln!(out, "\n===== POLYMORPHISM WITH MULTIPLE BASE CLASSES =====")?;
        let drawables: [&dyn Drawable; 2] = [&circle, &rectangle];
        writeln!(out, "Drawing all shapes:")?;
        for drawable in drawables {
            drawable.draw()?;
        }

        let saveables: [&mut dyn Saveable; 2] = [&mut circle, &mut rectangle];
        writeln!(out, "\nSaving all shapes:")?;
        for saveable in saveables {
            saveable.save("file.dat")?;
        }

        writeln!(out, "\n===== MODIFYING AND CHECKING STATE =====")?;
        circle.set_radius(7.5)?;
        writeln!(out, "Circle modified? {}", yes_no(circle.is_modified()))?;

        rectangle.set_dimensions(12.0, 8.0)?;
        writeln!(out, "Rectangle area: {}", Real(rectangle.area()))?;

        writeln!(out, "\n===== DESTRUCTORS CALLED (Reverse Order) =====")?;
        Ok(())
    }
}
