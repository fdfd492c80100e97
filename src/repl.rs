//! Line based command loop

use std::io::{BufRead, Write};

use log::{debug, warn};
use snafu::prelude::*;

use crate::{
    controller::RemoteController,
    errors::{IoSnafu, RcError},
};

const PROMPT: &str = "> ";

/// Outcome of a command loop.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub executed: usize,
    pub rejected: usize,
}

/// Feed each line of `input` to the controller until EOF.
///
/// Results go to `out`, rejected commands to `err`. Only I/O failures abort
/// the loop.
pub(crate) fn run(
    rc: &mut RemoteController,
    mut input: impl BufRead,
    mut out: impl Write,
    mut err: impl Write,
    prompt: bool,
) -> Result<Summary, RcError> {
    let mut summary = Summary::default();
    let mut buf = Vec::new();
    loop {
        if prompt {
            write!(out, "{PROMPT}").context(IoSnafu)?;
            out.flush().context(IoSnafu)?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf).context(IoSnafu)? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD, so such lines are rejected like
        // any other unknown command.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        match rc.call(line) {
            Ok(text) => {
                summary.executed += 1;
                if !text.is_empty() {
                    writeln!(out, "{text}").context(IoSnafu)?;
                }
            }
            Err(e @ RcError::InvalidCommand { .. }) => {
                summary.rejected += 1;
                writeln!(err, "{e}").context(IoSnafu)?;
            }
            Err(e) => return Err(e),
        }
    }
    if prompt {
        writeln!(out).context(IoSnafu)?;
    }
    debug!("Final state: {:?}", rc.state());
    if summary.rejected > 0 {
        warn!("{} of {} commands rejected", summary.rejected, summary.executed + summary.rejected);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_str(input: &str) -> (Summary, String, String, RemoteController) {
        let mut rc = RemoteController::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = run(&mut rc, input.as_bytes(), &mut out, &mut err, false).unwrap();
        (
            summary,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            rc,
        )
    }

    #[test]
    fn runs_each_line() {
        let (summary, out, err, rc) = run_str("volume up\ntv on\noptions show\n");
        assert_eq!(summary, Summary { executed: 3, rejected: 0 });
        assert_eq!(out, "Options:\nVolume 30\nIsOnline True\nBrightness 20\nContrast 20\n");
        assert_eq!(err, "");
        assert!(rc.state().is_online);
    }

    #[test]
    fn keeps_going_after_rejection() {
        let (summary, out, err, rc) = run_str("tv pause\r\n\nbrightness down\n");
        assert_eq!(summary, Summary { executed: 1, rejected: 1 });
        assert_eq!(out, "");
        assert_eq!(err, "tv pause is not a valid command\n");
        assert_eq!(rc.state().brightness, 10);
    }

    #[test]
    fn undecodable_line_is_rejected() {
        let mut rc = RemoteController::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let input: &[u8] = b"volume up\n\xff\xfe\noptions show\n";
        let summary = run(&mut rc, input, &mut out, &mut err, false).unwrap();
        assert_eq!(summary, Summary { executed: 2, rejected: 1 });
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Options:\nVolume 30\nIsOnline False\nBrightness 20\nContrast 20\n"
        );
        assert!(String::from_utf8(err).unwrap().ends_with("is not a valid command\n"));
    }

    #[test]
    fn last_line_without_newline() {
        let (summary, _, _, rc) = run_str("tv on\nvolume down");
        assert_eq!(summary, Summary { executed: 2, rejected: 0 });
        assert_eq!(rc.state().volume, 10);
    }

    #[test]
    fn write_failure_is_reported() {
        let mut rc = RemoteController::new();
        let result = run(&mut rc, "options show\n".as_bytes(), FailingWriter, std::io::sink(), false);
        assert!(matches!(result, Err(RcError::Io { .. })));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prompts_when_asked() {
        let mut rc = RemoteController::new();
        let mut out = Vec::new();
        run(&mut rc, "tv on\n".as_bytes(), &mut out, std::io::sink(), true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> > \n");
    }
}
