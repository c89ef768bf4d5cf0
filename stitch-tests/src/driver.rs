use crate::{RecordingCallable, RecordingConnection, RecordingPrepared};
use stitch::Driver;

#[derive(Default, Clone, Copy, Debug)]
pub struct RecordingDriver;

impl RecordingDriver {
    pub const fn new() -> Self {
        Self
    }
}

impl Driver for RecordingDriver {
    type Connection = RecordingConnection;
    type Prepared = RecordingPrepared;
    type Callable = RecordingCallable;

    const NAME: &'static [&'static str] = &["recording"];
}
