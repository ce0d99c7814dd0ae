//! System clipboard access.

use anyhow::Context;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// Clipboard backed by the desktop clipboard via `arboard`.
///
/// The handle is opened lazily so a headless session (no display server)
/// only fails when something is actually copied.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("open system clipboard")?);
        }
        match self.inner.as_mut() {
            Some(cb) => cb
                .set_text(text.to_string())
                .context("write to system clipboard"),
            None => anyhow::bail!("system clipboard unavailable"),
        }
    }
}

/// In-memory clipboard that records every write. Clones share the log.
#[cfg(test)]
#[derive(Default, Clone)]
pub struct MemoryClipboard {
    writes: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    pub fail: bool,
}

#[cfg(test)]
impl MemoryClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("clipboard unavailable");
        }
        self.writes
            .lock()
            .map_err(|_| anyhow::anyhow!("clipboard log poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}
