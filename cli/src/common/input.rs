//! Reading declaration files.

use std::io::{self, Read};

use thiserror::Error;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// A source file loaded into memory.
#[derive(Debug, Clone)]
pub struct Input {
    /// Name shown in diagnostics: the path, or `<stdin>`.
    pub name: String,
    pub content: String,
}

#[derive(Debug, Error)]
#[error("{name}: {source}")]
pub struct InputError {
    name: String,
    source: io::Error,
}

/// Read `path`, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<Input, InputError> {
    let name = if path == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        path.to_string()
    };

    let content = if path == STDIN_PATH {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).map(|_| content)
    } else {
        std::fs::read_to_string(path)
    };

    match content {
        Ok(content) => Ok(Input { name, content }),
        Err(source) => Err(InputError { name, source }),
    }
}
