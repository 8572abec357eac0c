use crate::core::console::{Console, Output};
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct ArraysLab;

fn write_row(out: &Output, row: &[i32]) -> Result<()> {
    for value in row {
        write!(out, "{} ", value)?;
    }
    writeln!(out)?;
    Ok(())
}

impl Lab for ArraysLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Arrays,
            "Fixed-size arrays",
            &[
                "indexed access",
                "iterating by reference",
                "2D and 3D nested arrays",
            ],
        )
    }

    #[allow(clippy::needless_range_loop)]
    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        let arr: [i32; 5] = [1, 2, 3, 4, 5];

        write!(out, "Array elements: ")?;
        for i in 0..arr.len() {
            write!(out, "{} ", arr[i])?;
        }
        writeln!(out)?;

        write_row(out, &arr)?;

        let arr2: [[i32; 5]; 5] = [
            [1, 2, 3, 4, 5],
            [6, 7, 8, 9, 10],
            [11, 12, 13, 14, 15],
            [16, 17, 18, 19, 20],
            [21, 22, 23, 24, 25],
        ];

        writeln!(out, "2D Array elements:")?;
        for row in &arr2 {
            write_row(out, row)?;
        }

        let arr3: [[[i32; 3]; 3]; 3] = [
            [[1, 2, 3], [4, 5, 6], [7, 8, 9]],
            [[10, 11, 12], [13, 14, 15], [16, 17, 18]],
            [[19, 20, 21], [22, 23, 24], [25, 26, 27]],
        ];

        writeln!(out, "3D Array elements:")?;
        for plane in &arr3 {
            for row in plane {
                write_row(out, row)?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}
