use indicatif::{ProgressBar, ProgressStyle};

use super::{Phase, Progress, Ui};

/// Line-oriented UI: phases and log lines on stdout, an `indicatif` bar for progress
pub struct ConsoleUi {
    bar: Option<ProgressBar>,
}

impl ConsoleUi {
    pub fn new() -> Self {
        Self { bar: None }
    }

    fn bar(&mut self, total: u64) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let pb = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40.cyan/blue}] {pos}/{len}")
            {
                pb.set_style(style.progress_chars("=>-"));
            }
            pb
        })
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui for ConsoleUi {
    fn set_phase(&mut self, phase: Phase) {
        self.log(format!("{}...", phase));
    }

    fn set_info(&mut self, info: impl Into<String>) {
        self.log(format!("  {}", info.into()));
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        let progress = Progress::new(current, total, label);
        let pb = self.bar(progress.total);
        pb.set_length(progress.total);
        pb.set_position(progress.current);
        pb.set_message(progress.label);
    }

    fn clear_progress(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }

    fn log(&mut self, message: impl Into<String>) {
        match &self.bar {
            Some(pb) => pb.println(message.into()),
            None => println!("{}", message.into()),
        }
    }
}

impl Drop for ConsoleUi {
    fn drop(&mut self) {
        self.clear_progress();
    }
}
