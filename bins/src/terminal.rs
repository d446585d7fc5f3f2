use auth::{Navigator, Notifier};
use log::debug;
use parking_lot::Mutex;

/// Front end of the command line: there are no pages to move between, so
/// navigation only tracks where the session logic wants the user to be.
#[derive(Default)]
pub struct Terminal {
    location: Mutex<Option<String>>,
}

impl Navigator for Terminal {
    fn push(&self, path: &str) {
        debug!("Navigate to {}", path);
        *self.location.lock() = Some(path.to_owned());
    }

    fn current(&self) -> Option<String> {
        self.location.lock().clone()
    }
}

impl Notifier for Terminal {
    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}
