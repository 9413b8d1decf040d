//! Daily log files for skipped and published routes.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;

use crate::error::Result;
use crate::routes::RouteDescriptor;

const INVALID_PREFIX: &str = "invalid-kong-route";
const PUSHED_PREFIX: &str = "pushed-kong-route";

/// Writes run results to date-named files in a log directory.
///
/// Files grow unbounded within a day; a new file starts each UTC
/// calendar day. No locking: a single process instance writes them.
#[derive(Debug, Clone)]
pub struct ResultLogger {
    dir: PathBuf,
}

impl ResultLogger {
    /// Create a logger rooted at the given directory, creating it if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory this logger writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the whole invalid bucket as one JSON array, replacing any
    /// earlier run's file for today.
    pub fn write_invalid(&self, routes: &[RouteDescriptor]) -> Result<PathBuf> {
        let path = self.dated_path(INVALID_PREFIX);
        let body = serde_json::to_string(routes)?;
        std::fs::write(&path, body)?;
        Ok(path)
    }

    /// Append one raw gateway response to today's pushed log, separated
    /// from the previous record by a blank line.
    pub fn append_pushed(&self, raw: &str) -> Result<PathBuf> {
        let path = self.dated_path(PUSHED_PREFIX);

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(raw.as_bytes())?;
        file.write_all(b"\n\n")?;

        Ok(path)
    }

    fn dated_path(&self, prefix: &str) -> PathBuf {
        let date = OffsetDateTime::now_utc().date();
        self.dir.join(format!("{}-{}.log", prefix, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(uri: &str) -> RouteDescriptor {
        RouteDescriptor {
            host: String::new(),
            methods: vec!["GET".to_string()],
            uri: uri.to_string(),
            name: None,
            action: "Closure".to_string(),
            middleware: Vec::new(),
        }
    }

    fn today() -> String {
        OffsetDateTime::now_utc().date().to_string()
    }

    #[test]
    fn creates_log_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("storage").join("logs");

        let logger = ResultLogger::new(&dir).unwrap();
        assert!(logger.dir().is_dir());
    }

    #[test]
    fn invalid_log_is_a_dated_json_array() {
        let tmp = tempfile::tempdir().unwrap();
        let logger = ResultLogger::new(tmp.path()).unwrap();

        let path = logger.write_invalid(&[route("/"), route("users/{id}")]).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("invalid-kong-route-{}.log", today())
        );

        let body = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<RouteDescriptor> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].uri, "/");
    }

    #[test]
    fn invalid_log_is_overwritten_per_run() {
        let tmp = tempfile::tempdir().unwrap();
        let logger = ResultLogger::new(tmp.path()).unwrap();

        logger.write_invalid(&[route("/"), route("a/{b}")]).unwrap();
        let path = logger.write_invalid(&[route("/")]).unwrap();

        let parsed: Vec<RouteDescriptor> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn empty_invalid_bucket_still_writes_an_array() {
        let tmp = tempfile::tempdir().unwrap();
        let logger = ResultLogger::new(tmp.path()).unwrap();

        let path = logger.write_invalid(&[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn pushed_log_appends_blank_line_separated_records() {
        let tmp = tempfile::tempdir().unwrap();
        let logger = ResultLogger::new(tmp.path()).unwrap();

        logger.append_pushed(r#"{"name":"users"}"#).unwrap();
        let path = logger.append_pushed(r#"{"name":"orders"}"#).unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("pushed-kong-route-{}.log", today())
        );

        let body = std::fs::read_to_string(&path).unwrap();
        assert_eq!(body, "{\"name\":\"users\"}\n\n{\"name\":\"orders\"}\n\n");
    }
}
