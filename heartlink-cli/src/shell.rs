//! Interactive prompt loop around the pairing tracker.
//!
//! The shell owns all wording and colour; the tracker only ever hands back
//! structured replies. Input and output are generic so the whole flow can
//! be exercised in tests with scripted sessions.
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use heartlink_game::{
    Command, CommandReply, GameSummary, Outcome, PairingReport, PairingTracker, TrackerError,
};
use std::io::{BufRead, Write};

/// Format of the end-of-game summary printed on quit.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable, coloured
    Console,
    /// Structured reply as JSON, for harnesses
    Json,
}

pub struct Shell<R, W> {
    tracker: PairingTracker,
    input: R,
    out: W,
    report: ReportFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(tracker: PairingTracker, input: R, out: W, report: ReportFormat) -> Self {
        Self {
            tracker,
            input,
            out,
            report,
        }
    }

    /// Run the session to completion. `intake` collects the initial roster
    /// name-by-name until the user enters `done`.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the underlying streams are errors; every game
    /// rule violation is rendered and the user is prompted again.
    pub fn run(&mut self, intake: bool) -> Result<()> {
        if intake {
            self.collect_roster()?;
        }
        if self.tracker.len() < 2 {
            writeln!(
                self.out,
                "{}",
                "Fewer than two participants; add more from the menu.".yellow()
            )?;
        }
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line("Option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.prompt_add()?,
                "2" => self.prompt_remove()?,
                "3" => self.prompt_attempt()?,
                "4" => self.print_remaining()?,
                "5" => {
                    self.print_summary()?;
                    break;
                }
                other => {
                    writeln!(self.out, "{}", format!("Unknown option '{other}'.").red())?;
                }
            }
        }
        Ok(())
    }

    fn collect_roster(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Enter participant names, one per line. Type 'done' to finish."
        )?;
        loop {
            let Some(name) = self.read_line("Name: ")? else {
                return Ok(());
            };
            if name.eq_ignore_ascii_case("done") {
                return Ok(());
            }
            self.dispatch_add(&name)?;
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "What would you like to do?".bold())?;
        writeln!(self.out, "1. Add a participant")?;
        writeln!(self.out, "2. Remove a participant")?;
        writeln!(self.out, "3. Attempt a pairing")?;
        writeln!(self.out, "4. Show remaining candidates")?;
        writeln!(self.out, "5. Quit and show the summary")?;
        Ok(())
    }

    fn prompt_add(&mut self) -> Result<()> {
        let Some(name) = self.read_line("Name to add: ")? else {
            return Ok(());
        };
        self.dispatch_add(&name)
    }

    fn dispatch_add(&mut self, name: &str) -> Result<()> {
        match self.tracker.apply(Command::Add {
            name: name.to_string(),
        }) {
            Ok(reply) => self.render_reply(reply),
            Err(err) => self.print_error(&err),
        }
    }

    /// Apply commands from a script instead of the menu: one JSON command
    /// per line, blank lines and `#` comments skipped. Replies render the
    /// same way as in the interactive loop, and the session closes with
    /// the usual summary.
    pub fn run_script(&mut self, script: &str) -> Result<()> {
        for (number, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match serde_json::from_str::<Command>(line) {
                Ok(command) => match self.tracker.apply(command) {
                    Ok(reply) => self.render_reply(reply)?,
                    Err(err) => self.print_error(&err)?,
                },
                Err(err) => {
                    writeln!(
                        self.out,
                        "{}",
                        format!("line {}: not a command: {err}", number + 1).red()
                    )?;
                }
            }
        }
        self.print_summary()
    }

    fn render_reply(&mut self, reply: CommandReply) -> Result<()> {
        match reply {
            CommandReply::Added { name } => {
                log::info!("added participant {name}");
                writeln!(self.out, "Added {}.", name.green())?;
            }
            CommandReply::Removed {
                name,
                newly_exhausted,
            } => {
                log::info!("removed participant {name}");
                writeln!(self.out, "Removed {}.", name.green())?;
                self.announce_exhausted(&newly_exhausted)?;
            }
            CommandReply::Attempted(report) => self.render_attempt(&report)?,
            CommandReply::Candidates { name, partners } => {
                if partners.is_empty() {
                    writeln!(self.out, "{name}: {}", "(none)".yellow())?;
                } else {
                    writeln!(self.out, "{name}: {}", partners.join(", "))?;
                }
            }
            CommandReply::Summary { game_over, summary } => match self.report {
                ReportFormat::Json => {
                    let reply = CommandReply::Summary { game_over, summary };
                    writeln!(self.out, "{}", serde_json::to_string_pretty(&reply)?)?;
                }
                ReportFormat::Console => self.render_summary(&summary)?,
            },
        }
        Ok(())
    }

    fn render_attempt(&mut self, report: &PairingReport) -> Result<()> {
        log::info!(
            "attempt {} / {} -> {:?}",
            report.pair.first,
            report.pair.second,
            report.outcome
        );
        match report.outcome {
            Outcome::Success => writeln!(
                self.out,
                "{} and {} {}",
                report.pair.first.green().bold(),
                report.pair.second.green().bold(),
                "paired successfully!".green()
            )?,
            Outcome::Failure => writeln!(
                self.out,
                "{} and {} {}",
                report.pair.first,
                report.pair.second,
                "did not pair.".yellow()
            )?,
        }
        self.announce_exhausted(&report.newly_exhausted)?;
        if report.game_over {
            writeln!(
                self.out,
                "{}",
                "No further pairings are possible. Quit to see the summary.".bold()
            )?;
        }
        Ok(())
    }

    fn prompt_remove(&mut self) -> Result<()> {
        let Some(name) = self.read_line("Name to remove: ")? else {
            return Ok(());
        };
        match self.tracker.apply(Command::Remove { name }) {
            Ok(reply) => self.render_reply(reply),
            Err(err) => self.print_error(&err),
        }
    }

    fn prompt_attempt(&mut self) -> Result<()> {
        if self.tracker.len() < 2 {
            writeln!(
                self.out,
                "{}",
                "Not enough participants for a pairing.".yellow()
            )?;
            return Ok(());
        }
        self.print_remaining()?;

        let Some(selector) = self.read_line("Who is choosing? ('cancel' to go back) ")? else {
            return Ok(());
        };
        if selector.eq_ignore_ascii_case("cancel") {
            return Ok(());
        }
        let Some(target) = self.read_line("Whom do they pick? ('cancel' to go back) ")? else {
            return Ok(());
        };
        if target.eq_ignore_ascii_case("cancel") {
            return Ok(());
        }
        let Some(outcome) = self.prompt_outcome()? else {
            return Ok(());
        };

        match self.tracker.apply(Command::Attempt {
            selector,
            target,
            outcome,
        }) {
            Ok(reply) => self.render_reply(reply),
            Err(err) => self.print_error(&err),
        }
    }

    fn prompt_outcome(&mut self) -> Result<Option<Outcome>> {
        loop {
            let Some(answer) = self.read_line("Did it work? (Y/N, 'cancel' to go back) ")? else {
                return Ok(None);
            };
            if answer.eq_ignore_ascii_case("cancel") {
                return Ok(None);
            }
            match answer.to_ascii_uppercase().as_str() {
                "Y" => return Ok(Some(Outcome::Success)),
                "N" => return Ok(Some(Outcome::Failure)),
                _ => writeln!(self.out, "{}", "Please answer 'Y' or 'N'.".yellow())?,
            }
        }
    }

    fn print_remaining(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Remaining candidates:".bold())?;
        let rows: Vec<(String, Vec<String>)> = self
            .tracker
            .participants()
            .filter(|p| p.is_eligible())
            .map(|p| {
                let candidates = self.tracker.candidates_for(&p.name).unwrap_or_default();
                (p.name.clone(), candidates)
            })
            .collect();
        if rows.is_empty() {
            writeln!(self.out, "  (nobody is waiting to pair)")?;
        }
        for (name, candidates) in rows {
            if candidates.is_empty() {
                writeln!(self.out, "  {name}: {}", "(none)".yellow())?;
            } else {
                writeln!(self.out, "  {name}: {}", candidates.join(", "))?;
            }
        }
        Ok(())
    }

    fn print_summary(&mut self) -> Result<()> {
        match self.tracker.apply(Command::Summary) {
            Ok(reply) => self.render_reply(reply),
            Err(err) => self.print_error(&err),
        }
    }

    fn render_summary(&mut self, summary: &GameSummary) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "Game over!".bold())?;
        if let Some(name) = summary.sole_unmatched() {
            writeln!(
                self.out,
                "The last unmatched participant is {}. They earn the doubled bonus!",
                name.green().bold()
            )?;
        } else if !summary.unmatched.is_empty() {
            writeln!(
                self.out,
                "Left unmatched: {}",
                summary.unmatched.join(", ").yellow()
            )?;
        } else if let Some(pair) = summary.closing_pair() {
            writeln!(
                self.out,
                "The closing pair was {} and {}. They earn the doubled bonus!",
                pair.first.green().bold(),
                pair.second.green().bold()
            )?;
        } else {
            writeln!(self.out, "Nobody played this round.")?;
        }
        if !summary.pairs.is_empty() {
            writeln!(self.out, "Completed pairs:")?;
            for pair in &summary.pairs {
                writeln!(self.out, "  {} and {}", pair.first, pair.second)?;
            }
        }
        writeln!(self.out, "Thanks for playing!")?;
        Ok(())
    }

    fn announce_exhausted(&mut self, names: &[String]) -> Result<()> {
        for name in names {
            log::info!("participant {name} is out of candidates");
            writeln!(
                self.out,
                "{}",
                format!("{name} has tried every possible partner.").yellow()
            )?;
        }
        Ok(())
    }

    fn print_error(&mut self, err: &TrackerError) -> Result<()> {
        writeln!(self.out, "{}", err.to_string().red())?;
        Ok(())
    }

    /// Prompt and read one trimmed line. `None` means end of input, which
    /// the caller treats as a quiet quit.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
