use std::io::Read;
use std::path::Path;

use crate::prelude::*;

/// Read a response document from a file, or from stdin when no path is given.
pub fn read_document(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| Error::UnreadableDocument(format!("{}: {e}", path.display())))
            .map_err(|e| eyre!(e)),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read response document from stdin")?;
            Ok(raw)
        }
    }
}
