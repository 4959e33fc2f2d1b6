//! Byte transport to the arbiter
//!
//! The session only needs two primitives: send a buffer, and block until an
//! exact number of bytes has arrived. Any failure ends the session; nothing
//! here retries.

use dns_lookup::{AddrInfoHints, SockType, getaddrinfo};
use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use thiserror::Error;
use tracing::{debug, info};

/// Transport failures
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("unknown service {service:?}: {source}")]
    UnknownService {
        service: String,
        #[source]
        source: io::Error,
    },

    #[error("could not resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("{host}:{port} did not resolve to any address")]
    NoAddress { host: String, port: u16 },

    #[error("could not connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("send failed: {0}")]
    Send(#[source] io::Error),

    #[error("connection closed after {received} of {expected} bytes")]
    ShortRead { expected: usize, received: usize },

    #[error("receive failed: {0}")]
    Receive(#[source] io::Error),
}

/// Send and receive primitives the session is built on
pub trait Transport {
    /// Send all of `bytes`
    ///
    /// # Errors
    /// Returns `TransportError::Send` if the bytes could not be written.
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Block until `buf` is completely filled
    ///
    /// # Errors
    /// Returns `TransportError::ShortRead` if the peer closes early, or
    /// `TransportError::Receive` on any other I/O failure.
    fn receive_exact(&mut self, buf: &mut [u8]) -> Result<(), TransportError>;
}

/// Transport over any blocking byte stream
#[derive(Debug)]
pub struct StreamTransport<S> {
    stream: S,
}

impl<S: Read + Write> StreamTransport<S> {
    pub const fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Give back the underlying stream
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Write> Transport for StreamTransport<S> {
    fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.stream.write_all(bytes).map_err(TransportError::Send)?;
        self.stream.flush().map_err(TransportError::Send)
    }

    fn receive_exact(&mut self, buf: &mut [u8]) -> Result<(), TransportError> {
        let mut received = 0;
        while received < buf.len() {
            match self.stream.read(&mut buf[received..]) {
                Ok(0) => {
                    return Err(TransportError::ShortRead {
                        expected: buf.len(),
                        received,
                    });
                }
                Ok(n) => received += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(TransportError::Receive(e)),
            }
        }
        Ok(())
    }
}

/// Port number for `service`
///
/// An all-digit service is taken as the port itself; anything else is looked
/// up as a TCP service name (e.g. "ssh").
///
/// # Errors
/// Returns `TransportError::UnknownService` if the name has no TCP port.
pub fn resolve_port(service: &str) -> Result<u16, TransportError> {
    if let Ok(port) = service.parse::<u16>() {
        return Ok(port);
    }

    let unknown = |source: io::Error| TransportError::UnknownService {
        service: service.to_string(),
        source,
    };
    let hints = AddrInfoHints {
        socktype: SockType::Stream.into(),
        ..AddrInfoHints::default()
    };

    let mut infos =
        getaddrinfo(None, Some(service), Some(hints)).map_err(|e| unknown(io::Error::from(e)))?;
    match infos.next() {
        Some(Ok(info)) => {
            debug!(service, port = info.sockaddr.port(), "resolved service");
            Ok(info.sockaddr.port())
        }
        Some(Err(e)) => Err(unknown(e)),
        None => Err(unknown(io::Error::new(
            io::ErrorKind::NotFound,
            "no TCP port for service",
        ))),
    }
}

/// Resolve `host`:`service` and connect to the first address that accepts
///
/// # Errors
/// Returns `TransportError::UnknownService` if `service` is neither a port
/// number nor a known service name, `TransportError::Resolve` or
/// `TransportError::NoAddress` if the host does not resolve, and
/// `TransportError::Connect` with the last connect error if no address accepts.
pub fn connect(host: &str, service: &str) -> Result<StreamTransport<TcpStream>, TransportError> {
    let port = resolve_port(service)?;
    let addrs: Vec<_> = (host, port)
        .to_socket_addrs()
        .map_err(|source| TransportError::Resolve {
            host: host.to_string(),
            port,
            source,
        })?
        .collect();

    let mut last_error = None;
    for addr in addrs {
        debug!(%addr, "connecting");
        match TcpStream::connect(addr) {
            Ok(stream) => {
                info!(%addr, "connected to arbiter");
                return Ok(StreamTransport::new(stream));
            }
            Err(e) => {
                debug!(%addr, error = %e, "connect failed");
                last_error = Some(e);
            }
        }
    }

    Err(match last_error {
        Some(source) => TransportError::Connect {
            host: host.to_string(),
            port,
            source,
        },
        None => TransportError::NoAddress {
            host: host.to_string(),
            port,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::net::TcpListener;

    /// Reads from a fixed buffer, records writes
    struct Loopback {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl Read for Loopback {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            // One byte at a time to exercise the partial-read loop
            let end = buf.len().min(1);
            self.input.read(&mut buf[..end])
        }
    }

    impl Write for Loopback {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn loopback(input: &[u8]) -> StreamTransport<Loopback> {
        StreamTransport::new(Loopback {
            input: Cursor::new(input.to_vec()),
            output: Vec::new(),
        })
    }

    #[test]
    fn send_writes_everything() {
        let mut transport = loopback(&[]);
        transport.send(&[0x12, 0x34]).unwrap();
        assert_eq!(transport.into_inner().output, vec![0x12, 0x34]);
    }

    #[test]
    fn receive_exact_collects_partial_reads() {
        let mut transport = loopback(&[1, 2, 3]);
        let mut buf = [0u8; 3];
        transport.receive_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    fn short_read_is_an_error() {
        let mut transport = loopback(&[7]);
        let mut buf = [0u8; 2];
        let err = transport.receive_exact(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            TransportError::ShortRead {
                expected: 2,
                received: 1
            }
        ));
    }

    #[test]
    fn connect_reaches_local_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let transport = connect("127.0.0.1", &port.to_string());

        assert!(transport.is_ok());
    }

    #[test]
    fn connect_refused_reports_connect_error() {
        // Bind then drop to get a port nobody listens on
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let err = connect("127.0.0.1", &port.to_string()).unwrap_err();

        assert!(matches!(err, TransportError::Connect { .. }), "{err}");
    }

    #[test]
    fn unresolvable_host_reports_resolve_error() {
        let err = connect("host.invalid", "1280").unwrap_err();
        assert!(
            matches!(
                err,
                TransportError::Resolve { .. } | TransportError::NoAddress { .. }
            ),
            "{err}"
        );
    }

    #[test]
    fn numeric_service_is_the_port() {
        assert_eq!(resolve_port("1280").unwrap(), 1280);
        assert_eq!(resolve_port("0").unwrap(), 0);
    }

    #[test]
    fn unknown_service_is_its_own_error() {
        let err = resolve_port("no-such-mastermind-service").unwrap_err();
        assert!(matches!(err, TransportError::UnknownService { .. }), "{err}");

        let err = connect("127.0.0.1", "no-such-mastermind-service").unwrap_err();
        assert!(matches!(err, TransportError::UnknownService { .. }), "{err}");
    }
}
