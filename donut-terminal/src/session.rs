/// Terminal session guard and interrupt handling
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use signal_hook::consts::{SIGINT, SIGTERM};
use std::io::{self, stdout, BufWriter, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared stop flag, set from a signal handler or by the interrupt key.
///
/// The render loop only reads it between frames, so cleanup always runs on
/// the main thread.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// A flag that SIGINT and SIGTERM set instead of killing the process.
    pub fn register() -> io::Result<Self> {
        let interrupt = Self::new();
        for signal in [SIGINT, SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&interrupt.flag))?;
        }
        Ok(interrupt)
    }

    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Whether the loop should stop: a signal arrived or Ctrl+C is pending.
    ///
    /// Pending input is drained without blocking; it is only read once no
    /// signal has been seen.
    pub fn requested(&self) -> io::Result<bool> {
        if self.is_set() {
            return Ok(true);
        }
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if is_interrupt(&key) {
                    self.trigger();
                }
            }
        }
        Ok(self.is_set())
    }
}

/// Raw-mode, cursor-hidden terminal that is restored when dropped.
///
/// Raw mode turns Ctrl+C into a key event instead of a signal; both that key
/// and real signals land in the session's [`Interrupt`], which the render loop
/// checks between frames before unwinding through this guard.
pub struct TerminalSession {
    buffer: BufWriter<Stdout>,
    interrupt: Interrupt,
}

impl TerminalSession {
    pub fn enter(interrupt: Interrupt) -> io::Result<Self> {
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        if let Err(e) = terminal::enable_raw_mode() {
            let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
            return Err(e);
        }

        Ok(Self {
            buffer: BufWriter::new(stdout),
            interrupt,
        })
    }

    pub fn writer(&mut self) -> &mut BufWriter<Stdout> {
        &mut self.buffer
    }

    pub fn interrupt(&self) -> &Interrupt {
        &self.interrupt
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Flush buffer before leaving alternate screen
        let _ = self.buffer.flush();
        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
    }
}

/// Ctrl+C, the conventional interrupt keystroke
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use signal_hook::low_level;

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&event));
    }

    #[test]
    fn test_plain_c_is_not_interrupt() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::empty());
        assert!(!is_interrupt(&event));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        assert!(!is_interrupt(&event));
        let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::CONTROL);
        assert!(!is_interrupt(&event));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let event = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert!(!is_interrupt(&event));
    }

    #[test]
    fn test_set_flag_requests_interrupt() {
        let interrupt = Interrupt::new();
        assert!(!interrupt.is_set());

        let handle = interrupt.clone();
        handle.trigger();
        assert!(interrupt.is_set());
        assert!(interrupt.requested().unwrap());
    }

    #[test]
    fn test_sigterm_sets_registered_flag() {
        let interrupt = Interrupt::register().unwrap();
        low_level::raise(SIGTERM).unwrap();
        assert!(interrupt.requested().unwrap());
    }
}
