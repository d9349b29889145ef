use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line-oriented stdin reader shared by the interactive commands.
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
}

impl Prompt {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    /// Print `label` and read one line. `None` on end of input.
    pub async fn ask(&mut self, label: &str) -> eyre::Result<Option<String>> {
        print!("{label}");
        std::io::stdout().flush()?;
        self.next_line().await
    }

    pub async fn next_line(&mut self) -> eyre::Result<Option<String>> {
        Ok(self.lines.next_line().await?)
    }

    pub async fn confirm(&mut self, label: &str) -> eyre::Result<bool> {
        let answer = self.ask(&format!("{label} [y/N] ")).await?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y") | Some("Y") | Some("yes")
        ))
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}
