use registry_resolve_infrastructure::dns::DnsServerHandler;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

const TCP_IDLE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

pub async fn start_dns_server(bind_addr: String, handler: DnsServerHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    let udp_socket = Arc::new(UdpSocket::bind(socket_addr).await?);
    let tcp_listener = TcpListener::bind(socket_addr).await?;

    info!(
        bind_address = %socket_addr,
        server = handler.server_identity(),
        "DNS server ready"
    );

    let handler = Arc::new(handler);
    let mut join_set: JoinSet<()> = JoinSet::new();

    let handler_udp = handler.clone();
    join_set.spawn(async move {
        run_udp_loop(udp_socket, handler_udp).await;
    });

    join_set.spawn(async move {
        run_tcp_loop(tcp_listener, handler).await;
    });

    while join_set.join_next().await.is_some() {}
    Ok(())
}

async fn run_udp_loop(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) {
    let mut recv_buf = [0u8; 4096];

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let handler = handler.clone();
        let socket = socket.clone();
        let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
        tokio::spawn(async move {
            if let Some(response) = handler.handle_raw(&owned_buf, from.ip()).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "Failed to send UDP response");
                }
            }
        });
    }
}

async fn run_tcp_loop(listener: TcpListener, handler: Arc<DnsServerHandler>) {
    loop {
        let (stream, from) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "TCP accept error");
                continue;
            }
        };

        let handler = handler.clone();
        tokio::spawn(async move {
            if let Err(e) = serve_tcp_connection(stream, from, handler).await {
                debug!(client = %from, error = %e, "TCP connection closed");
            }
        });
    }
}

/// Serves length-prefixed messages until the peer closes or goes idle.
async fn serve_tcp_connection(
    mut stream: TcpStream,
    from: SocketAddr,
    handler: Arc<DnsServerHandler>,
) -> std::io::Result<()> {
    loop {
        let mut len_buf = [0u8; 2];
        match tokio::time::timeout(TCP_IDLE_TIMEOUT, stream.read_exact(&mut len_buf)).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(()),
            Ok(Err(e)) => return Err(e),
            Err(_) => return Ok(()),
        }

        let len = u16::from_be_bytes(len_buf) as usize;
        let mut query_buf = vec![0u8; len];
        stream.read_exact(&mut query_buf).await?;

        let Some(response) = handler.handle_raw(&query_buf, from.ip()).await else {
            return Ok(());
        };

        let Ok(response_len) = u16::try_from(response.len()) else {
            error!(client = %from, size = response.len(), "DNS response too large for TCP framing");
            return Ok(());
        };

        stream.write_all(&response_len.to_be_bytes()).await?;
        stream.write_all(&response).await?;
    }
}
