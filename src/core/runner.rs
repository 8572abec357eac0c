use crate::core::console::{Console, Input};
use crate::domain::model::{LabId, RunReport};
use crate::domain::ports::SettingsProvider;
use crate::labs;
use crate::utils::error::Result;

pub struct LabRunner<S: SettingsProvider> {
    settings: S,
}

impl<S: SettingsProvider> LabRunner<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// 依序決定輸入來源：命令列 > 設定檔 > stdin
    pub fn input_for(&self, id: LabId, cli_input: Option<&str>) -> Input {
        if let Some(script) = cli_input {
            tracing::debug!("Using --input for {}", id);
            return Input::from_script(script);
        }
        if let Some(script) = self.settings.scripted_input(id.name()) {
            tracing::debug!("Using configured input for {}", id);
            return Input::from_script(script);
        }
        if id.is_interactive() {
            tracing::debug!("Reading {} input from stdin", id);
            Input::stdin()
        } else {
            Input::empty()
        }
    }

    pub fn has_scripted_input(&self, id: LabId) -> bool {
        self.settings.scripted_input(id.name()).is_some()
    }

    pub fn run(&self, id: LabId, console: &mut Console) -> Result<()> {
        let lab = labs::build(id, &self.settings);
        let info = lab.info();
        tracing::info!("Running lab {} ({})", info.id, info.title);

        let result = lab.run(console);
        // 物件在 lab.run 結束前已 drop，這裡只需 flush
        console.out.flush()?;

        match &result {
            Ok(()) => tracing::info!("Lab {} finished", id),
            Err(e) => tracing::warn!("Lab {} stopped: {}", id, e),
        }
        result
    }

    /// 執行實驗並把完整輸出收集成字串
    pub fn capture(&self, id: LabId, input: Input) -> Result<RunReport> {
        let (mut console, buffer) = Console::capture(input);
        self.run(id, &mut console)?;
        let transcript = buffer.contents();
        let lines = transcript.lines().count();
        tracing::debug!("Captured {} lines from {}", lines, id);

        Ok(RunReport {
            lab: id,
            transcript: Some(transcript),
            lines,
        })
    }

    pub fn transcript(&self, id: LabId, script: &str) -> Result<String> {
        let report = self.capture(id, Input::from_script(script))?;
        Ok(report.transcript.unwrap_or_default())
    }
}
