use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use preflight_common::network::probe::ConnectFailure;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::probe::Connector;

pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    async fn connect(&self, addr: SocketAddr, connect_timeout: Duration) -> Result<(), ConnectFailure> {
        // Dropping the stream, or the timed out connect future, closes the socket.
        match timeout(connect_timeout, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                Ok(())
            }
            Ok(Err(e)) => Err(ConnectFailure::from(e)),
            Err(_elapsed) => Err(ConnectFailure::TimedOut),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
