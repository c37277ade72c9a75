//! Streaming-socket subscriptions.

use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::thread::JoinHandle;
use tracing::{debug, error};
use xtb_core::error::ClientError;

use crate::transport::{read_frame, DEMO_STREAMING_PORT, REAL_STREAMING_PORT, XAPI_ADDRESS};
use crate::wire::{StreamMessage, StreamingBalance};

/// Client for the vendor's push socket.
///
/// Subscriptions hand each incoming payload to a caller-supplied callback,
/// invoked from a background reader thread in push order. The callback is
/// the only delivery guarantee: no replay, no ordering beyond the socket's.
pub struct StreamingClient {
    stream: TcpStream,
    session_id: String,
}

/// Handle to a running subscription reader thread.
pub struct StreamHandle {
    thread: JoinHandle<()>,
}

impl StreamHandle {
    /// Block until the reader thread exits (it runs until the socket drops).
    pub fn join(self) {
        let _ = self.thread.join();
    }
}

impl StreamingClient {
    /// Connect to an arbitrary streaming host and port.
    pub fn connect(host: &str, port: u16, session_id: String) -> Result<Self, ClientError> {
        let stream = TcpStream::connect((host, port))?;
        Ok(Self { stream, session_id })
    }

    /// Connect to the production streaming endpoint, demo or real.
    pub fn connect_main(sandbox: bool, session_id: String) -> Result<Self, ClientError> {
        let port = if sandbox {
            DEMO_STREAMING_PORT
        } else {
            REAL_STREAMING_PORT
        };
        Self::connect(XAPI_ADDRESS, port, session_id)
    }

    fn send(&mut self, message: &serde_json::Value) -> Result<(), ClientError> {
        let body = serde_json::to_string(message)?;
        self.stream.write_all(body.as_bytes())?;
        self.stream.flush()?;
        Ok(())
    }

    /// Subscribe to balance updates and start the reader thread.
    ///
    /// Consumes the client: the socket belongs to the reader from here on.
    pub fn subscribe_balance<F>(mut self, callback: F) -> Result<StreamHandle, ClientError>
    where
        F: FnMut(StreamingBalance) + Send + 'static,
    {
        self.send(&json!({
            "command": "getBalance",
            "streamSessionId": self.session_id,
        }))?;

        let reader = BufReader::new(self.stream.try_clone()?);
        let thread = std::thread::Builder::new()
            .name("xtb-stream".into())
            .spawn(move || read_loop(reader, callback))?;

        Ok(StreamHandle { thread })
    }
}

fn read_loop<R, F>(mut reader: R, mut on_balance: F)
where
    R: BufRead,
    F: FnMut(StreamingBalance),
{
    loop {
        let frame = match read_frame(&mut reader) {
            Ok(frame) => frame,
            Err(err) => {
                error!("Streaming socket closed: {err}");
                return;
            }
        };
        let message: StreamMessage = match serde_json::from_value(frame) {
            Ok(message) => message,
            Err(err) => {
                error!("Undecodable streaming message: {err}");
                continue;
            }
        };
        match message.command.as_str() {
            "balance" => match serde_json::from_value::<StreamingBalance>(message.data) {
                Ok(balance) => on_balance(balance),
                Err(err) => error!("Undecodable balance payload: {err}"),
            },
            "keepAlive" => {}
            other => debug!("Ignoring streaming command {other}"),
        }
    }
}
