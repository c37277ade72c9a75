//! Blocking transport for the xStation request/response socket.

use serde_json::Value;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::time::{Duration, Instant};
use xtb_core::error::ClientError;

/// Production xStation endpoint.
pub const XAPI_ADDRESS: &str = "xapi.xstation5.xtb.com";
/// Request/response port for real accounts.
pub const REAL_PORT: u16 = 5112;
/// Streaming port for real accounts.
pub const REAL_STREAMING_PORT: u16 = 5113;
/// Request/response port for demo accounts.
pub const DEMO_PORT: u16 = 5124;
/// Streaming port for demo accounts.
pub const DEMO_STREAMING_PORT: u16 = 5125;

/// Minimum spacing between commands; the vendor drops connections that send
/// faster than this.
const COMMAND_INTERVAL: Duration = Duration::from_millis(200);

/// One synchronous vendor round-trip.
///
/// `request` blocks the calling context until a response arrives or the
/// transport fails; there is no retry, cancellation or timeout layer here.
/// The returned value is the raw response mapping, `status` field included.
pub trait Transport: Send {
    fn request(&mut self, command: &str, arguments: Option<Value>) -> Result<Value, ClientError>;
}

/// Read one blank-line-terminated JSON frame from an xStation socket.
pub(crate) fn read_frame(reader: &mut impl BufRead) -> Result<Value, ClientError> {
    let mut payload = String::new();
    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line)?;
        if read == 0 {
            return Err(ClientError::Transport("connection closed by vendor".into()));
        }
        if line.trim().is_empty() {
            if payload.trim().is_empty() {
                continue;
            }
            break;
        }
        payload.push_str(&line);
    }
    Ok(serde_json::from_str(payload.trim())?)
}

/// Blocking TCP transport speaking the xStation JSON protocol.
pub struct TcpTransport {
    stream: TcpStream,
    reader: BufReader<TcpStream>,
    last_request: Option<Instant>,
}

impl TcpTransport {
    /// Connect to an arbitrary host and port.
    pub fn connect(host: &str, port: u16) -> Result<Self, ClientError> {
        let stream = TcpStream::connect((host, port))?;
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self {
            stream,
            reader,
            last_request: None,
        })
    }

    /// Connect to the production request/response endpoint, demo or real.
    pub fn connect_main(sandbox: bool) -> Result<Self, ClientError> {
        let port = if sandbox { DEMO_PORT } else { REAL_PORT };
        Self::connect(XAPI_ADDRESS, port)
    }

    fn throttle(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < COMMAND_INTERVAL {
                std::thread::sleep(COMMAND_INTERVAL - elapsed);
            }
        }
    }
}

impl Transport for TcpTransport {
    fn request(&mut self, command: &str, arguments: Option<Value>) -> Result<Value, ClientError> {
        self.throttle();

        let mut message = serde_json::json!({ "command": command });
        if let Some(arguments) = arguments {
            message["arguments"] = arguments;
        }
        let body = serde_json::to_string(&message)?;

        self.stream.write_all(body.as_bytes())?;
        self.stream.flush()?;
        self.last_request = Some(Instant::now());

        read_frame(&mut self.reader)
    }
}
