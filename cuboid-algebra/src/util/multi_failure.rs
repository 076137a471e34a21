use alloc::boxed::Box;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::fmt::{self, Write as _};
use std::panic;

/// Guard object which runs many cases of a test, collecting the ones that fail,
/// then panics with a summary when it is dropped if any did.
///
/// This lets a [`#[test]`](macro@test) that checks a property over many generated inputs
/// report every failing input instead of only the first.
#[derive(Debug, Default)]
pub struct MultiFailure {
    attempted: usize,
    failures: Vec<Failure>,
}

#[derive(Debug)]
struct Failure {
    case: String,
    message: String,
}

impl MultiFailure {
    /// Constructs a [`MultiFailure`] which has not yet run any cases.
    ///
    /// If nothing else is done to it, it will have no effect.
    #[inline(never)]
    #[must_use = "this is useless if never invoked to collect failures"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `f` as the test case named `case`. If it panics, record that as a failure and
    /// defer it until this [`MultiFailure`] is dropped.
    #[inline(never)]
    pub fn catch<O, F>(&mut self, case: impl fmt::Display, f: F) -> Option<O>
    where
        F: FnOnce() -> O,
        F: panic::UnwindSafe,
    {
        self.attempted += 1;
        match panic::catch_unwind(f) {
            Ok(output) => Some(output),
            Err(payload) => {
                // The panic hook has already printed the full report.
                let message = if let Some(s) = payload.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = payload.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "<non-string panic payload>".to_string()
                };
                self.failures.push(Failure {
                    case: case.to_string(),
                    message,
                });
                None
            }
        }
    }
}

impl Drop for MultiFailure {
    #[inline(never)]
    fn drop(&mut self) {
        if std::thread::panicking() {
            // Don't double-panic; the test is already failing.
            return;
        }
        if self.failures.is_empty() {
            return;
        }

        let mut summary = format!(
            "{failed} of {attempted} cases failed:",
            failed = self.failures.len(),
            attempted = self.attempted,
        );
        for Failure { case, message } in &self.failures {
            let _ = write!(summary, "\n  {case}: {message}");
        }
        std::eprintln!("\n{summary}");
        // resume_unwind() skips the panic hook, so the summary is not printed twice.
        panic::resume_unwind(Box::new(summary));
    }
}
