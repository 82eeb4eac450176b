use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::model::ContactMessage;
use crate::domain::ports::MessageArchive;
use crate::utils::error::Result;

/// Appends contact-form submissions to a CSV file; the header row is written
/// only when the file is created. Appends are serialized so rows from
/// concurrent submissions cannot interleave.
pub struct CsvMessageArchive {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvMessageArchive {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

impl MessageArchive for CsvMessageArchive {
    fn archive(&self, message: &ContactMessage) -> Result<()> {
        let _guard = self.lock.lock();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let new_file = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);

        if new_file {
            writer.write_record(["datetime", "name", "contact", "ip", "message"])?;
        }
        writer.write_record([
            message.received_at.to_rfc3339(),
            message.name.clone(),
            message.contact.as_str().to_string(),
            message.remote_addr.clone().unwrap_or_default(),
            message.body.clone(),
        ])?;
        writer.flush()?;

        debug!("archived contact message to {}", self.path.display());
        Ok(())
    }
}
