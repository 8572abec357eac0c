use crate::core::console::Console;
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct PointersLab;

/// `None` 對應空指標，不做任何事
pub fn update_value(target: Option<&mut i32>, new_value: i32) {
    if let Some(slot) = target {
        *slot = new_value;
    }
}

pub fn sum_array(values: &[i32]) -> i32 {
    let mut sum = 0;
    for offset in 0..values.len() {
        if let Some(value) = values.get(offset) {
            sum += *value;
        }
    }
    sum
}

impl Lab for PointersLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Pointers,
            "References and heap allocation",
            &[
                "taking and dereferencing a reference",
                "walking a slice by offset",
                "optional mutable reference in place of a null pointer",
                "reference to a reference",
                "Box and Vec instead of new/delete",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;

        writeln!(out, "1) Basic Pointer")?;
        let mut number = 10;
        {
            let p_number = &number;
            writeln!(out, "number value      : {}", number)?;
            writeln!(out, "number address    : {:p}", &number)?;
            writeln!(out, "pNumber (address) : {:p}", p_number)?;
            writeln!(out, "*pNumber (value)  : {}", *p_number)?;
        }
        {
            let p_number = &mut number;
            *p_number = 25;
        }
        writeln!(out, "After *pNumber = 25, number = {}", number)?;

        writeln!(out, "\n2) Pointer Arithmetic with Array")?;
        let arr = [2, 4, 6, 8, 10];
        for (i, element) in arr.iter().enumerate() {
            writeln!(out, "arr[{}] = {} (address: {:p})", i, element, element)?;
        }

        writeln!(out, "\n3) Pass Pointer to Function")?;
        let mut value = 100;
        writeln!(out, "Before updateValue: {}", value)?;
        update_value(Some(&mut value), 500);
        writeln!(out, "After updateValue : {}", value)?;

        let total = sum_array(&arr);
        writeln!(out, "sumArray(arr, 5)  : {}", total)?;

        writeln!(out, "\n4) Pointer to Pointer")?;
        let x = 7;
        let p_x = &x;
        let pp_x = &p_x;
        writeln!(out, "x                 : {}", x)?;
        writeln!(out, "pX                : {:p}", p_x)?;
        writeln!(out, "*pX               : {}", *p_x)?;
        writeln!(out, "ppX               : {:p}", pp_x)?;
        writeln!(out, "*ppX              : {:p}", *pp_x)?;
        writeln!(out, "**ppX             : {}", **pp_x)?;

        writeln!(out, "\n5) Dynamic Memory (new/delete)")?;
        let mut dynamic_number = Box::new(42);
        writeln!(out, "dynamicNumber value: {}", *dynamic_number)?;

        *dynamic_number = 99;
        writeln!(out, "updated dynamic value: {}", *dynamic_number)?;
        drop(dynamic_number);

        let size = 4;
        let dynamic_array: Vec<i32> = (1..=size).map(|i| i * 10).collect();

        write!(out, "dynamic array values: ")?;
        for value in &dynamic_array {
            write!(out, "{} ", value)?;
        }
        writeln!(out)?;
        drop(dynamic_array);

        writeln!(out, "\nAll pointer examples completed.")?;

        Ok(())
    }
}
