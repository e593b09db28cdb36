//! Input actor: a dedicated thread polling crossterm for terminal events.
//!
//! Keeping the poll off the dispatch loop's thread lets the loop block on a
//! single channel that carries both key presses and resize notifications.

use super::{InputEvent, KeyCode};
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Poll timeout between shutdown checks.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Handle to the input polling thread.
pub struct InputActor {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the polling thread; events go out through `sender`.
    pub fn spawn(sender: Sender<InputEvent>) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("termcube-input".to_string())
            .spawn(move || Self::run_loop(&sender, &flag))
            .expect("failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the thread to stop and wait for it.
    pub fn join(mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop(sender: &Sender<InputEvent>, shutdown: &AtomicBool) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Closed);
                break;
            }
            match event::poll(POLL_TIMEOUT) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if let Some(converted) = Self::convert_event(&ev) {
                            if sender.send(converted).is_err() {
                                break;
                            }
                            if converted == InputEvent::Closed {
                                break;
                            }
                        }
                    }
                    // An unreadable input source ends the session.
                    Err(_) => {
                        let _ = sender.send(InputEvent::Closed);
                        break;
                    }
                },
                Ok(false) => {}
                Err(_) => {
                    let _ = sender.send(InputEvent::Closed);
                    break;
                }
            }
        }
    }

    fn convert_event(ev: &Event) -> Option<InputEvent> {
        match ev {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                let code = match key.code {
                    event::KeyCode::Char('c' | 'd') if ctrl => return Some(InputEvent::Closed),
                    event::KeyCode::Char(c) => KeyCode::Char(c),
                    event::KeyCode::Backspace => KeyCode::Backspace,
                    event::KeyCode::Delete => KeyCode::Delete,
                    event::KeyCode::Esc => KeyCode::Esc,
                    _ => return None,
                };
                Some(InputEvent::Key { code, ctrl })
            }
            Event::Resize(width, height) => Some(InputEvent::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
