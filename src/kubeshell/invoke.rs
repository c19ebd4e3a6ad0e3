//! # Command Invocation
//!
//! The single choke point through which every kubectl operation runs. Builds
//! the argument vector, optionally pipes a rendered manifest to the child's
//! stdin, waits for the child to exit, and classifies the result.
//!
//! Keeping process execution behind this one function means a future native
//! API client could replace it without touching any operation's contract.

use crate::error::{KubeshellError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Runs `program` with `args`, synchronously, and returns its captured
/// stdout bytes verbatim (no trimming, no decoding).
///
/// When `stdin` is given, the bytes are written in full and the pipe is
/// closed before the child is waited on, so the child observes end-of-input.
///
/// Any failure — spawn error, broken stdin pipe, non-zero exit — comes back
/// as a single error value; non-zero exits carry the full captured stderr.
/// The child is always reaped, including on the error paths.
pub fn invoke<S: AsRef<str>>(program: &str, args: &[S], stdin: Option<&[u8]>) -> Result<Vec<u8>> {
    let mut cmd = Command::new(program);
    for arg in args {
        cmd.arg(arg.as_ref());
    }
    cmd.stdin(if stdin.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    })
    .stdout(Stdio::piped())
    .stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| KubeshellError::Spawn {
        program: program.to_string(),
        source,
    })?;

    // Write the whole payload, then drop the handle: dropping closes the
    // pipe, which is what signals end-of-stream to the child. The write
    // outcome is checked only after the child has been reaped.
    let mut write_result = Ok(());
    if let (Some(bytes), Some(mut pipe)) = (stdin, child.stdin.take()) {
        write_result = pipe.write_all(bytes).and_then(|_| pipe.flush());
    }

    let output = child.wait_with_output()?;

    if !output.status.success() {
        return Err(KubeshellError::Command {
            command: command_line(program, args),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    // A child may exit zero without draining its stdin (EPIPE on our side).
    // That is not a failure. Any other write error is.
    if let Err(source) = write_result {
        if source.kind() != std::io::ErrorKind::BrokenPipe {
            return Err(KubeshellError::Stdin {
                program: program.to_string(),
                source,
            });
        }
    }

    Ok(output.stdout)
}

fn command_line<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(|a| a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    #[test]
    fn returns_stdout_bytes_verbatim() {
        // printf does not append a newline, so this pins "no trimming, no
        // appending" in both directions.
        let out = invoke("printf", &["foo bar"], None).unwrap();
        assert_eq!(out, b"foo bar");
    }

    #[test]
    fn preserves_trailing_newlines() {
        let out = invoke("printf", &["line\n\n"], None).unwrap();
        assert_eq!(out, b"line\n\n");
    }

    #[test]
    fn nonzero_exit_carries_stderr() {
        let err = invoke("sh", &["-c", "echo boom >&2; exit 3"], None).unwrap_err();
        match &err {
            KubeshellError::Command { stderr, status, .. } => {
                assert!(stderr.contains("boom"));
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("expected Command error, got {:?}", other),
        }
        // The printable message combines the what and the diagnostic.
        let msg = err.to_string();
        assert!(msg.contains("exit") && msg.contains("boom"), "got: {}", msg);
    }

    #[test]
    fn missing_executable_is_a_spawn_error() {
        let err = invoke("kubeshell-no-such-binary", &[] as &[&str], None).unwrap_err();
        assert!(matches!(err, KubeshellError::Spawn { .. }));
    }

    #[test]
    fn stdin_bytes_reach_the_child() {
        let out = invoke("cat", &[] as &[&str], Some(b"kind: Pod\n")).unwrap();
        assert_eq!(out, b"kind: Pod\n");
    }

    #[test]
    fn child_ignoring_stdin_is_not_a_failure() {
        // `true` exits without reading; the broken pipe must not surface.
        let big = vec![b'x'; 1 << 20];
        let out = invoke("true", &[] as &[&str], Some(&big)).unwrap();
        assert_eq!(out, b"");
    }

    #[test]
    fn argument_order_is_preserved() {
        let out = invoke("printf", &["%s-%s-%s", "a", "b", "c"], None).unwrap();
        assert_eq!(out, b"a-b-c");
    }
}
