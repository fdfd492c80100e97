//! Command line argument parsing

#[derive(Debug, clap::Parser)]
#[command(version, about, long_about = None)]
/// Simulated TV remote control.
///
/// Runs a single command when one is given, otherwise reads commands from
/// stdin, one per line.
pub struct Cli {
    /// Command to run, e.g. `tv on` or `options change volume up`.
    pub command: Vec<String>,
    /// Do not print a prompt when reading from stdin.
    #[clap(short, long)]
    pub quiet: bool,
    /// Enable extra verbosity!
    #[clap(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The one-shot command, if any, joined back with single spaces.
    pub fn one_shot(&self) -> Option<String> {
        if self.command.is_empty() {
            None
        } else {
            Some(self.command.join(" "))
        }
    }
}
