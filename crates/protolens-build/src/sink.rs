use std::{
    collections::BTreeMap,
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

///
/// UnitSink
///
/// Destination for generated units, keyed by module identity.
///

pub trait UnitSink {
    fn write(&mut self, identity: &str, contents: &str) -> io::Result<()>;
}

///
/// MemorySink
/// Write-once in-memory sink; a second write of an identity is rejected.
///

#[derive(Debug, Default)]
pub struct MemorySink {
    units: BTreeMap<String, String>,
}

impl MemorySink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            units: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, identity: &str) -> Option<&str> {
        self.units.get(identity).map(String::as_str)
    }

    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl UnitSink for MemorySink {
    fn write(&mut self, identity: &str, contents: &str) -> io::Result<()> {
        if self.units.contains_key(identity) {
            return Err(io::Error::new(
                ErrorKind::AlreadyExists,
                format!("unit '{identity}' was already written"),
            ));
        }
        self.units.insert(identity.to_string(), contents.to_string());

        Ok(())
    }
}

///
/// DirSink
/// Writes `<root>/<identity>.rs`. The directory must already exist.
///

#[derive(Clone, Debug)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_for(&self, identity: &str) -> PathBuf {
        self.root.join(format!("{identity}.rs"))
    }
}

impl UnitSink for DirSink {
    fn write(&mut self, identity: &str, contents: &str) -> io::Result<()> {
        fs::write(self.path_for(identity), contents)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_is_write_once() {
        let mut sink = MemorySink::new();
        sink.write("person", "pub const TYPE_NAME: &str = \"Person\";")
            .unwrap();

        let err = sink.write("person", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(
            sink.get("person"),
            Some("pub const TYPE_NAME: &str = \"Person\";")
        );
    }

    #[test]
    fn dir_sink_writes_one_file_per_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirSink::new(dir.path());
        sink.write("company_job", "// job").unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("company_job.rs")).unwrap(),
            "// job"
        );
    }

    #[test]
    fn dir_sink_does_not_create_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirSink::new(dir.path().join("missing"));

        assert_eq!(
            sink.write("person", "").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }
}
