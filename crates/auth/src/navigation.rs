use log::info;
use parking_lot::Mutex;

pub const LOGIN_PATH: &str = "/login";

/// Moves the front end to another page.
pub trait Navigator: Send + Sync {
    fn push(&self, path: &str);
    fn current(&self) -> Option<String>;
}

/// Shows short lived messages to the person at the keyboard.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Navigator that only remembers where it was sent.
#[derive(Default)]
pub struct History {
    paths: Mutex<Vec<String>>,
}

impl History {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().clone()
    }
}

impl Navigator for History {
    fn push(&self, path: &str) {
        info!("Navigating to {}", path);
        self.paths.lock().push(path.to_owned());
    }

    fn current(&self) -> Option<String> {
        self.paths.lock().last().cloned()
    }
}
