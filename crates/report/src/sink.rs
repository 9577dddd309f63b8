use tracing::warn;

use sentinel_core::{Alert, RunSummary};

use crate::error::SinkError;

/// Destination for the ordered alert stream of one run.
///
/// `record` is called once per alert, in the order the engine produced
/// them; `finish` is called once after the last alert with the run summary.
/// Implementations reset their artifact when constructed, so a run's output
/// reflects only that run.
pub trait AlertSink {
    /// Write one alert.
    fn record(&mut self, alert: &Alert) -> Result<(), SinkError>;

    /// Close out the run with its summary.
    fn finish(&mut self, summary: &RunSummary) -> Result<(), SinkError>;
}

/// Fan-out over the configured sinks of one run.
///
/// Every sink is offered every write even when an earlier sink failed, so a
/// broken artifact does not suppress successful production of independent
/// ones. The first error is surfaced after all sinks were driven.
#[derive(Default)]
pub struct SinkSet {
    sinks: Vec<Box<dyn AlertSink>>,
}

impl SinkSet {
    /// An empty sink set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink. Sinks are driven in insertion order.
    pub fn push(&mut self, sink: impl AlertSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Record one alert on every sink.
    pub fn record(&mut self, alert: &Alert) -> Result<(), SinkError> {
        self.drive(|sink| sink.record(alert))
    }

    /// Finish the run on every sink.
    pub fn finish(&mut self, summary: &RunSummary) -> Result<(), SinkError> {
        self.drive(|sink| sink.finish(summary))
    }

    fn drive(
        &mut self,
        mut write: impl FnMut(&mut dyn AlertSink) -> Result<(), SinkError>,
    ) -> Result<(), SinkError> {
        let mut first_error = None;
        for sink in &mut self.sinks {
            if let Err(error) = write(sink.as_mut()) {
                warn!(%error, "sink write failed");
                if first_error.is_none() {
                    first_error = Some(error);
                }
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
