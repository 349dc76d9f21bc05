//! Process I/O: queued stdin writes and stream forwarding.

use gripper_common::{ConsoleError, ConsoleOutputEvent, ProcessHandle};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

use super::types::{ConsoleProcess, ProcessMessage, READ_CHUNK};

// =============================================================================
// INPUT
// =============================================================================

impl ConsoleProcess {
    /// Send `input` to the process's stdin.
    ///
    /// Before [`start`](Self::start) the text is queued and handed to the
    /// writer right after spawn. Never blocks on the pipe; write failures
    /// surface through the pump as [`ProcessMessage::InputFailed`].
    pub fn enqueue_input(&mut self, input: &str) -> Result<(), ConsoleError> {
        if !self.started {
            self.input_queue.push_str(input);
            return Ok(());
        }
        let sent = match &self.input_tx {
            Some(tx) => tx.send(input.to_owned()).is_ok(),
            None => false,
        };
        if sent {
            return Ok(());
        }
        Err(ConsoleError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            format!("stdin of console process {} is closed", self.handle),
        )))
    }

    /// Close stdin once everything already enqueued has been written.
    pub fn close_input(&mut self) {
        if self.input_tx.take().is_some() {
            debug!(handle = %self.handle, "console stdin closing");
        }
    }
}

/// Write queued input to `stdin` until the sender side is dropped.
///
/// Runs on its own task so a child that stops reading never stalls the
/// caller. On failure the error is reported once and stdin is dropped.
pub(super) async fn forward_input<W>(
    mut stdin: W,
    mut input_rx: mpsc::UnboundedReceiver<String>,
    tx: mpsc::Sender<ProcessMessage>,
    handle: ProcessHandle,
) where
    W: AsyncWrite + Unpin,
{
    while let Some(chunk) = input_rx.recv().await {
        let written = async {
            stdin.write_all(chunk.as_bytes()).await?;
            stdin.flush().await
        }
        .await;
        if let Err(e) = written {
            debug!(%handle, "failed to write console input: {e}");
            let _ = tx.send(ProcessMessage::InputFailed(e.to_string())).await;
            return;
        }
    }
    debug!(%handle, "console stdin closed");
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Read `stream` to EOF, sending each chunk as console output.
pub(super) async fn forward_stream<R>(mut stream: R, error: bool, tx: mpsc::Sender<ProcessMessage>)
where
    R: AsyncRead + Unpin,
{
    let mut buf = [0u8; READ_CHUNK];
    let mut pending: Vec<u8> = Vec::new();
    loop {
        match stream.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                pending.extend_from_slice(&buf[..n]);
                let text = take_utf8_prefix(&mut pending);
                if text.is_empty() {
                    continue;
                }
                let event = ConsoleOutputEvent::new(text, error);
                if tx.send(ProcessMessage::Output(event)).await.is_err() {
                    return; // Pump dropped
                }
            }
            Err(e) => {
                debug!("console stream read error: {e}");
                break;
            }
        }
    }

    if !pending.is_empty() {
        let text = String::from_utf8_lossy(&pending).into_owned();
        let _ = tx
            .send(ProcessMessage::Output(ConsoleOutputEvent::new(text, error)))
            .await;
    }
}

/// Decode as much of `bytes` as forms complete UTF-8, leaving a trailing
/// partial sequence in place for the next read.
///
/// Invalid sequences are replaced with U+FFFD.
pub(super) fn take_utf8_prefix(bytes: &mut Vec<u8>) -> String {
    let mut out = String::new();
    let mut start = 0;
    loop {
        match std::str::from_utf8(&bytes[start..]) {
            Ok(valid) => {
                out.push_str(valid);
                start = bytes.len();
                break;
            }
            Err(e) => {
                let valid_end = start + e.valid_up_to();
                out.push_str(&String::from_utf8_lossy(&bytes[start..valid_end]));
                match e.error_len() {
                    Some(len) => {
                        out.push(char::REPLACEMENT_CHARACTER);
                        start = valid_end + len;
                    }
                    None => {
                        start = valid_end;
                        break;
                    }
                }
            }
        }
    }
    bytes.drain(..start);
    out
}
