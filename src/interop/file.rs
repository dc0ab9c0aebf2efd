//! Host file access wrapped in deferred effects.
//!
//! Reading is asynchronous and becomes a [`Task`]; triggering a download is
//! a synchronous side effect and becomes an [`IO`]. Neither runs until the
//! caller runs the returned value.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::effect::{IO, Task};

/// How a file's contents should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReadMode {
    /// Decoded text.
    Text,
    /// Raw bytes.
    #[default]
    ArrayBuffer,
    /// A `data:` URL with base64 payload.
    DataUrl,
}

/// The contents produced by [`FileHost::read`], shaped by the [`ReadMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    /// Produced by [`ReadMode::Text`].
    Text(String),
    /// Produced by [`ReadMode::ArrayBuffer`].
    Bytes(Vec<u8>),
    /// Produced by [`ReadMode::DataUrl`].
    DataUrl(String),
}

impl FileContents {
    /// The mode that produces this kind of contents.
    #[must_use]
    pub const fn mode(&self) -> ReadMode {
        match self {
            Self::Text(_) => ReadMode::Text,
            Self::Bytes(_) => ReadMode::ArrayBuffer,
            Self::DataUrl(_) => ReadMode::DataUrl,
        }
    }
}

/// File and download facilities provided by the host environment.
pub trait FileHost: Send + Sync + 'static {
    /// Reference to a file the host can read.
    type Handle: Send + 'static;
    /// Why a read failed.
    type Error: Send + 'static;

    /// Starts reading `handle` in the given mode.
    fn read(&self, handle: &Self::Handle, mode: ReadMode) -> BoxFuture<'static, Result<FileContents, Self::Error>>;

    /// Asks the host to download `url`, saving it as `file_name`.
    fn trigger_download(&self, url: &str, file_name: &str);
}

/// Wraps [`FileHost::read`] in a task taking the handle and mode at run
/// time.
pub fn read_task<H: FileHost>(host: Arc<H>) -> Task<Result<FileContents, H::Error>, (H::Handle, ReadMode)> {
    Task::new(move |(handle, mode): (H::Handle, ReadMode)| host.read(&handle, mode))
}

/// Wraps [`FileHost::trigger_download`] in an effect. Each run triggers one
/// download.
pub fn download_io<H: FileHost>(host: Arc<H>, url: impl Into<String>, file_name: impl Into<String>) -> IO<()> {
    let url = url.into();
    let file_name = file_name.into();
    IO::new(move || {
        tracing::debug!(target: "pointfree::interop", %url, %file_name, "triggering download");
        host.trigger_download(&url, &file_name);
    })
}

/// The extension of `file_name` including its dot, or `""` when there is
/// none.
#[must_use]
pub fn extension_from_name(file_name: &str) -> &str {
    file_name.rfind('.').map_or("", |dot| &file_name[dot..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryHost {
        files: HashMap<String, String>,
        downloads: Mutex<Vec<(String, String)>>,
    }

    impl FileHost for MemoryHost {
        type Handle = String;
        type Error = String;

        fn read(&self, handle: &String, mode: ReadMode) -> BoxFuture<'static, Result<FileContents, String>> {
            let contents = self
                .files
                .get(handle)
                .cloned()
                .ok_or_else(|| format!("no such file: {handle}"))
                .map(|text| match mode {
                    ReadMode::Text => FileContents::Text(text),
                    ReadMode::ArrayBuffer => FileContents::Bytes(text.into_bytes()),
                    ReadMode::DataUrl => FileContents::DataUrl(format!("data:text/plain,{text}")),
                });
            Box::pin(futures::future::ready(contents))
        }

        fn trigger_download(&self, url: &str, file_name: &str) {
            if let Ok(mut downloads) = self.downloads.lock() {
                downloads.push((url.to_owned(), file_name.to_owned()));
            }
        }
    }

    fn host() -> Arc<MemoryHost> {
        Arc::new(MemoryHost {
            files: HashMap::from([("notes.txt".to_string(), "hi".to_string())]),
            ..MemoryHost::default()
        })
    }

    #[rstest]
    #[case(ReadMode::Text, FileContents::Text("hi".to_string()))]
    #[case(ReadMode::ArrayBuffer, FileContents::Bytes(b"hi".to_vec()))]
    #[case(ReadMode::DataUrl, FileContents::DataUrl("data:text/plain,hi".to_string()))]
    #[tokio::test]
    async fn read_task_delivers_the_requested_mode(#[case] mode: ReadMode, #[case] expected: FileContents) {
        let read = read_task(host());
        let contents = read.run(("notes.txt".to_string(), mode)).await;
        assert_eq!(contents, Ok(expected.clone()));
        assert_eq!(expected.mode(), mode);
    }

    #[rstest]
    #[tokio::test]
    async fn read_task_passes_host_errors_through() {
        let read = read_task(host()).map_err(|message| message.len());
        let result = read.run(("missing".to_string(), ReadMode::default())).await;
        assert_eq!(result, Err("no such file: missing".len()));
    }

    #[rstest]
    fn download_io_is_deferred_and_repeatable() {
        let host = host();
        let download = download_io(Arc::clone(&host), "https://example.test/a.pdf", "a.pdf");

        let recorded = || host.downloads.lock().map(|downloads| downloads.len()).unwrap_or(0);
        assert_eq!(recorded(), 0);

        download.run();
        download.run();
        assert_eq!(recorded(), 2);
    }

    #[rstest]
    #[case("report.final.pdf", ".pdf")]
    #[case("README", "")]
    #[case("", "")]
    fn extension_includes_the_dot(#[case] file_name: &str, #[case] expected: &str) {
        assert_eq!(extension_from_name(file_name), expected);
    }
}
