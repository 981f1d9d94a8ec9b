//! Sockets behind a session: listener or connected stream.

use std::io;
use std::net::{Shutdown, SocketAddr};
use std::task::{Context, Poll};

use socket2::{Domain, Protocol, SockRef, Socket, Type};
use tokio::net::{TcpListener, TcpStream};

/// Listen backlog for bound listeners.
pub const LISTEN_BACKLOG: i32 = 5;

/// Socket owned by a session.
#[derive(Debug)]
pub enum Transport {
    /// Listening socket. A completed accept is parked until the accept hook
    /// takes it.
    Listener {
        listener: TcpListener,
        accepted: Option<io::Result<(TcpStream, SocketAddr)>>,
    },
    Stream(TcpStream),
}

impl Transport {
    pub fn listener(listener: TcpListener) -> Self {
        Transport::Listener {
            listener,
            accepted: None,
        }
    }

    /// Polls for readability. For listeners this completes an accept.
    pub fn poll_readable(&mut self, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        match self {
            Transport::Listener { listener, accepted } => {
                if accepted.is_some() {
                    return Poll::Ready(Ok(()));
                }
                match listener.poll_accept(cx) {
                    Poll::Ready(result) => {
                        *accepted = Some(result);
                        Poll::Ready(Ok(()))
                    }
                    Poll::Pending => Poll::Pending,
                }
            }
            Transport::Stream(stream) => stream.poll_read_ready(cx),
        }
    }

    pub fn take_accepted(&mut self) -> Option<io::Result<(TcpStream, SocketAddr)>> {
        match self {
            Transport::Listener { accepted, .. } => accepted.take(),
            Transport::Stream(_) => None,
        }
    }

    pub fn try_read(&self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Transport::Stream(stream) => stream.try_read(buf),
            Transport::Listener { .. } => Err(io::ErrorKind::Unsupported.into()),
        }
    }

    pub fn try_write(&self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Transport::Stream(stream) => stream.try_write(buf),
            Transport::Listener { .. } => Err(io::ErrorKind::Unsupported.into()),
        }
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        match self {
            Transport::Listener { listener, .. } => listener.local_addr(),
            Transport::Stream(stream) => stream.local_addr(),
        }
    }

    /// Shuts both directions of a stream down. Errors are ignored since the
    /// socket is dropped right after.
    pub fn shutdown(&self) {
        if let Transport::Stream(stream) = self {
            let _ = SockRef::from(stream).shutdown(Shutdown::Both);
        }
    }
}

/// Options applied to every connected stream: no Nagle delay and no linger on
/// close.
pub fn configure_stream(stream: &TcpStream) -> io::Result<()> {
    stream.set_nodelay(true)?;
    SockRef::from(stream).set_linger(None)?;
    Ok(())
}

/// Creates a non-blocking listener bound to `addr`.
pub fn bind_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    // Windows allows address stealing with SO_REUSEADDR.
    if !cfg!(target_os = "windows") {
        socket.set_reuse_address(true)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
