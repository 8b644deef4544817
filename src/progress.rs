// src/progress.rs
/// Progress reporting for the batch jobs.
/// The CLI prints through `ConsoleProgress`; tests pass `NullProgress`.
pub trait Progress {
    /// Called at the start with the number of items the job will look at.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One unit of work finished (a page written, a file translated).
    fn item_done(&mut self, _name: &str) {}

    /// Called once the job has written its output.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints `[done/total] name` lines to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        self.done += 1;
        if self.total > 0 {
            println!("[{}/{}] {}", self.done, self.total, name);
        } else {
            println!("[{}] {}", self.done, name);
        }
    }
}
