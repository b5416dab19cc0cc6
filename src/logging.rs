use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

static LOG_PATH: Mutex<Option<PathBuf>> = Mutex::new(None);

const MAX_LOG_BYTES: u64 = 2 * 1024 * 1024;

/// Writes every line to stderr and, when available, to the log file.
struct Tee {
    file: Option<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let _ = std::io::stderr().write_all(buf);
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let _ = std::io::stderr().flush();
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }
}

pub fn init(data_dir: &Path) {
    let _ = std::fs::create_dir_all(data_dir);
    let log_path = data_dir.join("clipshelf.log");

    // Anything over the size cap moves aside to clipshelf.old.log.
    rotate_if_large(data_dir, &log_path);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();
    let file_opened = file.is_some();

    let result = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {:<5} {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(Tee { file })))
        .try_init();

    // Tests and embedding hosts may already have installed a logger.
    if result.is_err() {
        return;
    }

    if file_opened {
        if let Ok(mut guard) = LOG_PATH.lock() {
            *guard = Some(log_path.clone());
        }
    }

    log::info!("=== ClipShelf v{} started ===", env!("CARGO_PKG_VERSION"));
    log::info!("OS: {}", std::env::consts::OS);
    log::info!("Arch: {}", std::env::consts::ARCH);
    if file_opened {
        log::info!("Log file: {}", log_path.display());
    }
}

fn rotate_if_large(data_dir: &Path, log_path: &Path) -> bool {
    match std::fs::metadata(log_path) {
        Ok(meta) if meta.len() > MAX_LOG_BYTES => {
            let old_path = data_dir.join("clipshelf.old.log");
            std::fs::rename(log_path, old_path).is_ok()
        }
        _ => false,
    }
}

/// File the logger appends to, once `init` has opened it.
pub fn log_path() -> Option<PathBuf> {
    let guard = LOG_PATH.lock().unwrap_or_else(|e| e.into_inner());
    guard.clone()
}
