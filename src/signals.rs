//! Termination signal handling
//!
//! SIGINT/SIGTERM/SIGQUIT set a flag instead of killing the process. The
//! app polls the flag and closes its window, so `main` reaches the final
//! export. A second signal while the flag is already set exits immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag as signal_flag;
use tracing::warn;

/// Register the termination flag for every `TERM_SIGNALS` entry.
pub fn install_term_flag() -> Arc<AtomicBool> {
    let term_signal = Arc::new(AtomicBool::new(false));
    for signal in TERM_SIGNALS {
        // Registered first so it sees the flag before the second handler sets it
        if let Err(e) = signal_flag::register_conditional_shutdown(*signal, 1, Arc::clone(&term_signal)) {
            warn!("Failed to register forced shutdown for signal {}: {}", signal, e);
        }
        if let Err(e) = signal_flag::register(*signal, Arc::clone(&term_signal)) {
            warn!("Failed to register handler for signal {}: {}", signal, e);
        }
    }
    term_signal
}

pub fn is_set(flag: &AtomicBool) -> bool {
    flag.load(Ordering::Relaxed)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use signal_hook::consts::SIGTERM;
    use signal_hook::low_level::raise;
    use std::time::{Duration, Instant};

    #[test]
    fn test_sigterm_sets_flag() {
        let flag = install_term_flag();
        assert!(!is_set(&flag));

        raise(SIGTERM).unwrap();

        let deadline = Instant::now() + Duration::from_secs(2);
        while !is_set(&flag) && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(is_set(&flag));
    }
}
