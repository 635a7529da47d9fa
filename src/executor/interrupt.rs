//! SIGINT handling while a script runs in the foreground
//!
//! A terminal Ctrl+C reaches the whole foreground process group. While a
//! script runs, the interrupt belongs to the script: this process must
//! survive it so the transient file is removed and the cycle can report
//! the signal. Outside that window SIGINT keeps its default effect.

/// Keeps this process alive through SIGINT until dropped
#[must_use]
pub(crate) struct InterruptGuard {
    _private: (),
}

/// Hold SIGINT off this process for as long as the guard lives
///
/// Returns `None` when the handler cannot be installed; the script still
/// runs, but an interrupt then ends this process too.
pub(crate) fn defer_to_child() -> Option<InterruptGuard> {
    match platform::enter() {
        Ok(()) => Some(InterruptGuard { _private: () }),
        Err(e) => {
            log::warn!("Unable to install SIGINT handler: {}", e);
            None
        }
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        platform::leave();
    }
}

#[cfg(unix)]
mod platform {
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex, MutexGuard};

    use signal_hook::consts::SIGINT;
    use signal_hook::flag;

    /// Installed handler flag plus the number of scripts currently running
    pub(super) struct Deferral {
        terminate: Arc<AtomicBool>,
        running: usize,
    }

    impl Deferral {
        pub(super) fn new(terminate: Arc<AtomicBool>) -> Self {
            Self {
                terminate,
                running: 0,
            }
        }

        pub(super) fn enter(&mut self) {
            self.running += 1;
            self.terminate.store(false, Ordering::SeqCst);
        }

        pub(super) fn leave(&mut self) {
            self.running = self.running.saturating_sub(1);
            if self.running == 0 {
                self.terminate.store(true, Ordering::SeqCst);
            }
        }
    }

    static DEFERRAL: Mutex<Option<Deferral>> = Mutex::new(None);

    fn lock() -> MutexGuard<'static, Option<Deferral>> {
        DEFERRAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(super) fn enter() -> io::Result<()> {
        let mut slot = lock();

        let deferral = match slot.take() {
            Some(deferral) => deferral,
            None => {
                // Handler acts like the default disposition while the flag is set
                let terminate = Arc::new(AtomicBool::new(true));
                flag::register_conditional_default(SIGINT, Arc::clone(&terminate))?;
                Deferral::new(terminate)
            }
        };

        slot.insert(deferral).enter();
        Ok(())
    }

    pub(super) fn leave() {
        if let Some(deferral) = lock().as_mut() {
            deferral.leave();
        }
    }

    #[cfg(test)]
    pub(super) fn terminates_on_sigint() -> bool {
        lock()
            .as_ref()
            .is_none_or(|deferral| deferral.terminate.load(Ordering::SeqCst))
    }
}

#[cfg(not(unix))]
mod platform {
    use std::io;

    pub(super) fn enter() -> io::Result<()> {
        Ok(())
    }

    pub(super) fn leave() {}
}
