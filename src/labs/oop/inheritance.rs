use crate::core::console::{Console, Output};
use crate::core::format::Real;
use crate::core::{Lab, LabId, LabInfo, Result};
use crate::utils::validation::validate_range;

pub struct InheritanceLab;

/// 共用的「基底」部分；Car / Truck 以組合方式持有
#[derive(Debug)]
pub struct Vehicle {
    out: Output,
    vin: String,
    brand: String,
    year_manufactured: i32,
}

impl Vehicle {
    pub fn new(out: &Output, brand: &str, year: i32, vin: &str) -> Result<Self> {
        writeln!(out, "Vehicle Constructor called: {}", brand)?;
        Ok(Self {
            out: out.clone(),
            vin: vin.to_string(),
            brand: brand.to_string(),
            year_manufactured: year,
        })
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn year(&self) -> i32 {
        self.year_manufactured
    }

    pub fn vin(&self) -> &str {
        &self.vin
    }

    pub fn display_vehicle_info(&self) -> Result<()> {
        writeln!(
            self.out,
            "Brand: {}, Year: {}",
            self.brand, self.year_manufactured
        )?;
        Ok(())
    }
}

impl Drop for Vehicle {
    fn drop(&mut self) {
        let _ = writeln!(self.out, "Vehicle Destructor called");
    }
}

// Drop 先執行外層，再依序 drop 欄位，所以基底訊息在後
#[derive(Debug)]
pub struct Car {
    vehicle: Vehicle,
    number_of_doors: i32,
}

impl Car {
    pub fn new(out: &Output, brand: &str, year: i32, vin: &str, doors: i32) -> Result<Self> {
        validate_range("doors", doors, 2, 8)?;
        let vehicle = Vehicle::new(out, brand, year, vin)?;
        writeln!(out, "Car Constructor called")?;
        Ok(Self {
            vehicle,
            number_of_doors: doors,
        })
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn number_of_doors(&self) -> i32 {
        self.number_of_doors
    }

    /// 2 到 8 門以外的值被忽略
    pub fn set_number_of_doors(&mut self, doors: i32) {
        if (2..=8).contains(&doors) {
            self.number_of_doors = doors;
        }
    }

    pub fn display_vehicle_info(&self) -> Result<()> {
        let v = &self.vehicle;
        writeln!(
            v.out,
            "Car - Brand: {}, Year: {}, Doors: {}, VIN: {}",
            v.brand,
            v.year_manufactured,
            self.number_of_doors,
            v.vin()
        )?;
        Ok(())
    }

    pub fn honk(&self) -> Result<()> {
        writeln!(self.vehicle.out, "Car honks: Beep beep!")?;
        Ok(())
    }
}

impl Drop for Car {
    fn drop(&mut self) {
        let _ = writeln!(self.vehicle.out, "Car Destructor called");
    }
}

#[derive(Debug)]
pub struct Truck {
    vehicle: Vehicle,
    load_capacity: f64,
}

impl Truck {
    pub fn new(out: &Output, brand: &str, year: i32, vin: &str, capacity: f64) -> Result<Self> {
        let vehicle = Vehicle::new(out, brand, year, vin)?;
        writeln!(out, "Truck Constructor called")?;
        Ok(Self {
            vehicle,
            load_capacity: capacity,
        })
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// 噸
    pub fn load_capacity(&self) -> f64 {
        self.load_capacity
    }

    pub fn display_vehicle_info(&self) -> Result<()> {
        let v = &self.vehicle;
        writeln!(
            v.out,
            "Truck - Brand: {}, Year: {}, Load Capacity: {} tons",
            v.brand,
            v.year_manufactured,
            Real(self.load_capacity)
        )?;
        Ok(())
    }
}

impl Drop for Truck {
    fn drop(&mut self) {
        let _ = writeln!(self.vehicle.out, "Truck Destructor called");
    }
}

impl Lab for InheritanceLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Inheritance,
            "Inheritance through composition",
            &[
                "base part constructed before the derived part",
                "inherited accessors reached through the base",
                "derived types redefining display",
                "derived Drop runs before the base part's Drop",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        writeln!(out, "===== Creating Objects (Constructor Chain) =====")?;
        let car = Car::new(out, "Honda", 2023, "ABC123XYZ", 4)?;
        let truck = Truck::new(out, "Volvo", 2022, "XYZ987DEF", 15.5)?;

        writeln!(out, "\n===== Accessing Inherited Members =====")?;
        writeln!(out, "Car Brand (from Vehicle): {}", car.vehicle().brand())?;
        writeln!(out, "Car Year (from Vehicle): {}", car.vehicle().year())?;

        writeln!(out, "\n===== Accessing Derived Class Members =====")?;
        writeln!(out, "Car Doors: {}", car.number_of_doors())?;

        writeln!(out, "\n===== Function Overriding =====")?;
        car.display_vehicle_info()?;
        truck.display_vehicle_info()?;

        writeln!(out, "\n===== Car-Specific Methods =====")?;
        car.honk()?;

        writeln!(out, "\n===== Object Destruction (Destructor Chain) =====")?;
        Ok(())
    }
}
