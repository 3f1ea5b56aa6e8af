use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use arboard::Clipboard;
use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::services::ClipboardService;

/// Desktop clipboard through `arboard`.
///
/// On X11 and Wayland the copied text is served by the process owning the
/// clipboard handle, so the handle is opened on first copy and kept until
/// this value is dropped.
pub struct SystemClipboard {
    handle: Arc<Mutex<Option<Clipboard>>>,
    wait_for_paste: bool,
}

impl SystemClipboard {
    /// For the interactive session: copies return immediately and the text
    /// stays available while the session runs.
    pub fn for_session() -> Self {
        Self {
            handle: Arc::default(),
            wait_for_paste: false,
        }
    }

    /// For a process that exits right after copying. On Linux the copy
    /// blocks until another program has taken over the text.
    pub fn one_shot() -> Self {
        Self {
            handle: Arc::default(),
            wait_for_paste: true,
        }
    }
}

#[async_trait]
impl ClipboardService for SystemClipboard {
    async fn copy(&self, text: &str) -> AppResult<()> {
        let handle = Arc::clone(&self.handle);
        let wait_for_paste = self.wait_for_paste;
        let text = text.to_string();

        tokio::task::spawn_blocking(move || set_text(&handle, text, wait_for_paste))
            .await
            .map_err(|err| AppError::Clipboard(format!("clipboard task failed: {err}")))?
    }
}

fn set_text(handle: &Mutex<Option<Clipboard>>, text: String, wait_for_paste: bool) -> AppResult<()> {
    let mut guard = handle
        .lock()
        .map_err(|_| AppError::Clipboard("clipboard handle poisoned".to_string()))?;
    let clipboard = match &mut *guard {
        Some(clipboard) => clipboard,
        slot => slot.insert(Clipboard::new().map_err(clipboard_error)?),
    };
    write_text(clipboard, text, wait_for_paste).map_err(clipboard_error)
}

#[cfg(target_os = "linux")]
fn write_text(
    clipboard: &mut Clipboard,
    text: String,
    wait_for_paste: bool,
) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait_for_paste {
        clipboard.set().wait().text(text)
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(target_os = "linux"))]
fn write_text(
    clipboard: &mut Clipboard,
    text: String,
    _wait_for_paste: bool,
) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::Clipboard(err.to_string())
}

/// Writes the copied text to stdout on its own line.
pub struct StdoutClipboard;

#[async_trait]
impl ClipboardService for StdoutClipboard {
    async fn copy(&self, text: &str) -> AppResult<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
        Ok(())
    }
}
