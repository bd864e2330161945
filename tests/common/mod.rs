use serde_json::Value;
use std::io;
use std::io::Write;
use std::path::Path;
use std::str::from_utf8;

pub fn read_json(path: &Path) -> Value {
    let contents = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("{} should exist: {}", path.display(), e));
    serde_json::from_str(&contents).unwrap()
}

pub struct DebugWriter(pub String);
impl Write for DebugWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let DebugWriter(inner) = self;
        let buf = from_utf8(buf).unwrap();
        inner.push_str(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
