#![cfg(test)]

use std::{
    io,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use chrono::NaiveTime;
use skyclock_proto::ports::{
    display::{DisplayError, DisplayLocator, DisplayTarget},
    time_source::TimeSource,
};

pub(crate) fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).expect("valid time")
}

/// Display that records every text written to it.
#[derive(Debug, Default)]
pub(crate) struct RecordingDisplay {
    writes: Mutex<Vec<String>>,
}

impl RecordingDisplay {
    pub(crate) fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("writes lock").clone()
    }

    pub(crate) fn last(&self) -> Option<String> {
        self.writes.lock().expect("writes lock").last().cloned()
    }
}

impl DisplayTarget for RecordingDisplay {
    fn set_text(&self, text: &str) -> Result<(), DisplayError> {
        self.writes.lock().expect("writes lock").push(text.to_owned());
        Ok(())
    }
}

/// Display that rejects every write but counts the attempts.
#[derive(Debug, Default)]
pub(crate) struct FailingDisplay {
    attempts: AtomicUsize,
}

impl FailingDisplay {
    pub(crate) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl DisplayTarget for FailingDisplay {
    fn set_text(&self, _text: &str) -> Result<(), DisplayError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DisplayError::Write {
            id: String::from("mock"),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "display closed"),
        })
    }
}

/// Time source frozen at a settable time of day.
#[derive(Debug)]
pub(crate) struct FixedTimeSource {
    time: Mutex<NaiveTime>,
}

impl FixedTimeSource {
    pub(crate) fn new(time: NaiveTime) -> Self {
        Self {
            time: Mutex::new(time),
        }
    }

    pub(crate) fn set(&self, time: NaiveTime) {
        *self.time.lock().expect("time lock") = time;
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> NaiveTime {
        *self.time.lock().expect("time lock")
    }
}

/// Locator exposing a single display under a fixed id.
#[derive(Debug)]
pub(crate) struct MapLocator<D> {
    id: String,
    target: D,
}

impl<D> MapLocator<D> {
    pub(crate) fn new(id: &str, target: D) -> Self {
        Self {
            id: id.to_owned(),
            target,
        }
    }
}

impl<D: DisplayTarget + Clone> DisplayLocator for MapLocator<D> {
    type Target = D;

    fn locate(&self, id: &str) -> Option<D> {
        (self.id == id).then(|| self.target.clone())
    }
}
