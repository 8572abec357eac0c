use crate::core::console::{Console, Output};
use crate::core::{Lab, LabId, LabInfo, Result};

pub struct VectorsLab;

fn write_values(out: &Output, label: &str, values: &[i32]) -> Result<()> {
    write!(out, "{}", label)?;
    for value in values {
        write!(out, "{} ", value)?;
    }
    writeln!(out)?;
    Ok(())
}

impl Lab for VectorsLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::Vectors,
            "Growable vectors",
            &["indexed and iterator traversal", "push and pop at the end"],
        )
    }

    #[allow(clippy::needless_range_loop)]
    fn run(&self, console: &mut Console) -> Result<()> {
        let out = &console.out;
        let mut vec = vec![1, 2, 3, 4, 5];

        write!(out, "Vector elements: ")?;
        for i in 0..vec.len() {
            write!(out, "{} ", vec[i])?;
        }
        writeln!(out)?;

        write_values(out, "", &vec)?;

        vec.push(6);
        write_values(out, "After adding an element: ", &vec)?;

        vec.pop();
        write_values(out, "After removing the last element: ", &vec)?;

        Ok(())
    }
}
