use crate::prelude::{eprintln, *};
use base64::Engine as _;
use omniconvert_core::capabilities::ClipboardWriter;
use omniconvert_core::ConvertError;
use std::io::Write;

/// Terminal clipboard through the OSC 52 escape sequence.
///
/// Works over SSH and inside tmux (with `set-clipboard on`) since the
/// terminal emulator, not the host, owns the clipboard.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    f!("\x1b]52;c;{payload}\x07")
}

impl<W: Write> ClipboardWriter for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<(), ConvertError> {
        self.out
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| ConvertError::Clipboard(e.to_string()))
    }
}

/// Honour `--copy`. The sequence goes to stderr so piped stdout stays clean.
pub fn copy_if_requested(global: &crate::Global, text: &str) -> Result<()> {
    if !global.copy {
        return Ok(());
    }

    log::debug!("copying {} bytes to the clipboard", text.len());
    let mut clipboard = Osc52Clipboard::new(std::io::stderr());
    clipboard
        .write_text(text)
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    if global.verbose {
        eprintln!("Copied to clipboard");
    }
    Ok(())
}
