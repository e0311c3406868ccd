/// Consumers of the selection notification emitted on proceed
use crate::exceptions::GenericError;
use crate::scheduler::ConsultationSelection;
use log::info;
use std::io::Write;
use std::sync::Mutex;

pub trait SelectionListener: Send + Sync {
    fn on_selection(&self, selection: &ConsultationSelection) -> Result<(), GenericError>;
}

/// Writes one compact JSON object per selection, newline terminated
pub struct JsonLinesListener<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesListener<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> SelectionListener for JsonLinesListener<W> {
    fn on_selection(&self, selection: &ConsultationSelection) -> Result<(), GenericError> {
        let line = serde_json::to_string(selection)?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| GenericError::RuntimeError(e.to_string()))?;
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }
}

/// Logs the selection at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogListener;

impl SelectionListener for LogListener {
    fn on_selection(&self, selection: &ConsultationSelection) -> Result<(), GenericError> {
        info!(
            "consultationSelection {}",
            serde_json::to_string(selection)?
        );
        Ok(())
    }
}
