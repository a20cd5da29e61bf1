use crate::domain::listing::Listing;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Writes `contents` to a fresh file under the system temp dir.
/// Names are unique per process and call, so tests can run in parallel.
pub fn write_temp_file(name: &str, contents: &str) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("house_hunter_{}_{n}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("create {}: {e}", dir.display()));
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
    path
}

/// A 3bd/2ba 1800 sqft house in 76131, the usual subject in these tests.
pub fn subject_house(id: &str) -> Listing {
    Listing {
        listing_id: id.to_string(),
        address: format!("{id} Timber Ridge Dr"),
        city: "Fort Worth".to_string(),
        state: "TX".to_string(),
        zip_code: "76131".to_string(),
        price: 250_000.0,
        sqft: 1800.0,
        bedrooms: 3.0,
        bathrooms: 2.0,
        year_built: 1995,
        lot_size_sqft: 7000.0,
        property_type: "single_family".to_string(),
        ..Listing::default()
    }
}

/// A rental comp near the subject; `price` is monthly rent.
pub fn rent_comp(zip: &str, rent: f64) -> Listing {
    Listing {
        listing_id: "rent-comp".to_string(),
        zip_code: zip.to_string(),
        price: rent,
        sqft: 1750.0,
        bedrooms: 3.0,
        bathrooms: 2.0,
        year_built: 1998,
        lot_size_sqft: 6800.0,
        property_type: "rental".to_string(),
        ..Listing::default()
    }
}

/// In-memory `MakeWriter` for asserting on log output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

pub struct LogGuard(Arc<Mutex<Vec<u8>>>);

impl Write for LogGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bytes = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log buffer poisoned"))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogGuard;

    fn make_writer(&'a self) -> Self::Writer {
        LogGuard(Arc::clone(&self.0))
    }
}

/// Runs `f` under a thread-local subscriber at WARN and returns what it logged.
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_ansi(false)
        .with_max_level(Level::WARN)
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buffer.contents())
}
