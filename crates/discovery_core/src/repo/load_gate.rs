//! Load-once gate shared by the catalogs.
//!
//! # Invariants
//! - At most one loader runs at a time; concurrent first callers block until
//!   it finishes and then observe its result.
//! - A successful load is cached for the lifetime of the gate.
//! - A failed load leaves the gate empty, so a later call retries cleanly.
//! - A partially built value is never observable.

use super::{RepoError, RepoResult};
use once_cell::sync::OnceCell;

#[derive(Debug)]
pub struct LoadGate<T> {
    cell: OnceCell<T>,
}

impl<T> Default for LoadGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadGate<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the cached value, running `load` only when nothing is cached.
    ///
    /// The boolean is `true` when this call did not run `load`, including
    /// when it blocked on another caller's load.
    pub fn get_or_load<E>(&self, load: impl FnOnce() -> Result<T, E>) -> Result<(&T, bool), E> {
        let mut ran = false;
        let value = self.cell.get_or_try_init(|| {
            ran = true;
            load()
        })?;
        Ok((value, !ran))
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Cached value, or `NotLoaded(catalog)` before the first successful load.
    pub fn require(&self, catalog: &'static str) -> RepoResult<&T> {
        self.cell.get().ok_or(RepoError::NotLoaded(catalog))
    }

    /// Blocks until another caller completes a successful load.
    pub fn wait(&self) -> &T {
        self.cell.wait()
    }
}

#[cfg(test)]
mod tests {
    use super::LoadGate;
    use crate::repo::RepoError;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn failed_load_leaves_gate_empty_for_retry() {
        let gate: LoadGate<u32> = LoadGate::new();

        let failed: Result<_, &str> = gate.get_or_load(|| Err("boom"));
        assert!(failed.is_err());
        assert!(!gate.is_ready());
        assert!(matches!(gate.require("test"), Err(RepoError::NotLoaded("test"))));

        let (value, cached) = gate.get_or_load(|| Ok::<_, &str>(7)).unwrap();
        assert_eq!((*value, cached), (7, false));

        let (value, cached) = gate
            .get_or_load(|| -> Result<u32, &str> { panic!("loader must not rerun") })
            .unwrap();
        assert_eq!((*value, cached), (7, true));
        assert_eq!(*gate.wait(), 7);
    }

    #[test]
    fn caller_blocked_on_another_load_reports_cached() {
        let gate: LoadGate<u32> = LoadGate::new();
        let (started_tx, started_rx) = mpsc::channel();

        let (first, second) = thread::scope(|scope| {
            let loader = scope.spawn(|| {
                let started = started_tx;
                gate.get_or_load(|| {
                    started.send(()).unwrap();
                    thread::sleep(Duration::from_millis(50));
                    Ok::<_, &str>(3)
                })
                .map(|(value, cached)| (*value, cached))
            });
            started_rx.recv().unwrap();
            let waiter = gate
                .get_or_load(|| -> Result<u32, &str> { panic!("second loader must not run") })
                .map(|(value, cached)| (*value, cached));
            (loader.join().unwrap(), waiter)
        });

        assert_eq!(first, Ok((3, false)));
        assert_eq!(second, Ok((3, true)));
    }
}
