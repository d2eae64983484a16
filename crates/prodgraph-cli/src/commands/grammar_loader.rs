use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read a text input, where `-` means stdin.
pub fn load_text(path: &Path) -> Result<String, String> {
    if is_stdin(path) {
        return load_stdin();
    }
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}
