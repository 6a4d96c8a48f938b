use std::ops::Add;
use std::time::{Duration, SystemTime};

use crate::totp::GetTime;
use crate::writer::OutErr;

pub struct MockOtpWriter {
    pub out: Vec<u8>,
    pub err: Vec<u8>,
}

impl MockOtpWriter {
    pub fn new() -> Self {
        MockOtpWriter {
            out: Vec::new(),
            err: Vec::new(),
        }
    }
}

impl OutErr for MockOtpWriter {
    fn write(&mut self, s: &str) {
        self.out.append(&mut s.as_bytes().to_vec());
    }

    fn write_err(&mut self, s: &str) {
        self.err.append(&mut s.as_bytes().to_vec());
    }
}

// A clock pinned to a fixed number of seconds after the epoch
pub struct MockClock {
    secs: u64,
}

impl MockClock {
    pub fn at(secs: u64) -> Self {
        MockClock { secs }
    }
}

impl GetTime for MockClock {
    fn get_now(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH.add(Duration::new(self.secs, 0))
    }
}
