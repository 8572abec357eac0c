use crate::core::console::Console;
use crate::domain::model::LabInfo;
use crate::utils::error::Result;

/// 一個獨立的教學程式：固定的輸出流程，可能讀取輸入
pub trait Lab {
    fn info(&self) -> LabInfo;
    fn run(&self, console: &mut Console) -> Result<()>;
}

pub trait SettingsProvider {
    /// file-handling 實驗使用的檔案
    fn file_path(&self) -> &str;
    /// 互動實驗的預設輸入
    fn scripted_input(&self, lab: &str) -> Option<&str>;
}
