use crate::core::console::Console;
use crate::core::{Lab, LabId, LabInfo, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub const MESSAGE: &str = "Files can be tricky, but it is fun enough!";

pub struct FileHandlingLab {
    path: PathBuf,
}

impl FileHandlingLab {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 建立（或截斷）檔案並寫入訊息
    pub fn write_message(&self) -> Result<()> {
        let mut file = File::create(&self.path)?;
        write!(file, "{}", MESSAGE)?;
        file.flush()?;
        Ok(())
    }

    /// 讀回第一行，不含換行字元
    pub fn read_first_line(&self) -> Result<String> {
        let mut reader = BufReader::new(File::open(&self.path)?);
        let mut line = String::new();
        reader.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Lab for FileHandlingLab {
    fn info(&self) -> LabInfo {
        LabInfo::new(
            LabId::FileHandling,
            "File streams",
            &[
                "create/truncate and write a text file",
                "reopen and read a line back",
                "file handles closed on drop",
            ],
        )
    }

    fn run(&self, console: &mut Console) -> Result<()> {
        tracing::debug!("Writing {}", self.path.display());
        self.write_message()?;

        let text = self.read_first_line()?;
        writeln!(console.out, "{}", text)?;

        Ok(())
    }
}
