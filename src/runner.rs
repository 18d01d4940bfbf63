use std::process::ExitCode;

use bench_timer::Stopwatch;
use tracing::debug;

use crate::error::BenchError;

/// Exit status and timing of one command run.
#[derive(Debug)]
pub struct Outcome {
    pub stopwatch: Stopwatch,
    pub code: Option<i32>,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Child exit code when it fits, `1` otherwise (signals included).
    pub fn exit_code(&self) -> ExitCode {
        match self.code.map(u8::try_from) {
            Some(Ok(code)) => ExitCode::from(code),
            _ => ExitCode::FAILURE,
        }
    }
}

/// Run `program` with `args` and time it. The stopwatch is always stopped,
/// even when the command cannot be spawned.
pub fn run_command(program: &str, args: &[String], quiet: bool) -> Result<Outcome, BenchError> {
    let mut expression = duct::cmd(program, args).unchecked();
    if quiet {
        expression = expression.stdout_null();
    }

    debug!(program, ?args, "running command");
    let mut stopwatch = Stopwatch::new();
    let output = stopwatch.measure(|| expression.run());
    debug!(elapsed = %stopwatch, "command finished");

    let output = output.map_err(|source| BenchError::Spawn {
        program: program.to_owned(),
        source,
    })?;

    Ok(Outcome {
        stopwatch,
        code: output.status.code(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use bench_timer::Reading;

    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|arg| (*arg).to_owned()).collect()
    }

    #[test]
    fn test_successful_command() {
        let outcome = run_command("true", &[], true).unwrap();
        assert!(outcome.success());
        assert!(outcome.stopwatch.reading().is_finite());
    }

    #[test]
    fn test_failing_command_keeps_exit_code() {
        let outcome = run_command("sh", &strings(&["-c", "exit 3"]), true).unwrap();
        assert!(!outcome.success());
        assert_eq!(outcome.code, Some(3));
        assert!(outcome.stopwatch.reading().is_finite());
    }

    #[test]
    fn test_timing_covers_command() {
        let outcome = run_command("sleep", &strings(&["0.1"]), true).unwrap();
        match outcome.stopwatch.reading() {
            Reading::Elapsed(secs) => assert!(secs >= 0.1, "elapsed {secs}"),
            other => panic!("unexpected reading {other:?}"),
        }
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = run_command("definitely-not-a-real-program-4821", &[], true).unwrap_err();
        assert!(matches!(err, BenchError::Spawn { ref program, .. } if program.starts_with("definitely")));
    }
}
