use std::{cell::RefCell, rc::Rc, thread, time::Duration};

/// Waits between two animation steps.
pub trait Pacer {
    fn pause(&mut self, _duration: Duration) {}
}

/// Blocks the current thread for the requested time.
pub struct Sleeper;

impl Pacer for Sleeper {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

pub struct Fake;

impl Pacer for Fake {}

/// Does not wait but keeps every requested pause.
pub struct Recorder {
    pauses: Rc<RefCell<Vec<Duration>>>,
}

impl Recorder {
    pub fn new(pauses: Rc<RefCell<Vec<Duration>>>) -> Self {
        Self { pauses }
    }
}

impl Pacer for Recorder {
    fn pause(&mut self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
    }
}
