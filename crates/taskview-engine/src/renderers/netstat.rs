use crate::gate;
use crate::registry::TaskKind;
use crate::time::ViewerContext;
use crate::traits::ResponseRenderer;
use taskview_payloads::{NetworkConnection, decode_chunks};
use taskview_types::{Cell, Header, Row, Table, TaskState, ViewModel};
use tracing::debug;

pub const TITLE: &str = "Network Connections";

/// `netstat`: one row per socket
pub struct NetstatRenderer;

impl ResponseRenderer for NetstatRenderer {
    fn kind(&self) -> TaskKind {
        TaskKind::Netstat
    }

    fn render_chunks(
        &self,
        _task: &TaskState,
        chunks: &[String],
        _viewer: &ViewerContext,
    ) -> ViewModel {
        let batches: Vec<Vec<NetworkConnection>> = match decode_chunks(chunks) {
            Ok(batches) => batches,
            Err(err) => {
                debug!(error = %err, chunk = ?err.chunk_index(), "connections did not decode");
                return gate::raw_text(chunks);
            }
        };

        let mut table = Table::new(TITLE, headers());
        for conn in batches.iter().flatten() {
            table.push_row(row(conn));
        }

        if table.is_empty() {
            return gate::raw_text(chunks);
        }
        ViewModel::Table(table)
    }
}

pub fn headers() -> Vec<Header> {
    vec![
        Header::string("protocol").with_width(125),
        Header::string("local address").with_width(300),
        Header::number("local port").with_width(200),
        Header::string("remote address").with_width(300),
        Header::number("remote port").with_width(200),
        Header::string("state").with_width(200),
        Header::string("pids").with_width(125),
    ]
}

fn address_cell(addr: Option<&str>) -> Cell {
    match addr.map(str::trim) {
        Some(addr) if !addr.is_empty() => Cell::copyable(addr),
        _ => Cell::text(addr.unwrap_or_default()),
    }
}

fn port_cell(port: Option<u16>) -> Cell {
    match port {
        Some(0) => Cell::text(0u16),
        Some(port) => Cell::copyable(port),
        None => Cell::empty(),
    }
}

fn row(conn: &NetworkConnection) -> Row {
    let pids = if conn.has_pids() {
        Cell::copyable(conn.pid_list())
    } else {
        Cell::empty()
    };

    Row::new()
        .with("protocol", Cell::text(conn.proto.as_str()))
        .with("local address", address_cell(conn.local_addr.as_deref()))
        .with("local port", port_cell(conn.local_port))
        .with("remote address", address_cell(conn.remote_addr.as_deref()))
        .with("remote port", port_cell(conn.remote_port))
        .with("state", Cell::text(conn.state.as_deref().unwrap_or_default()))
        .with("pids", pids)
}
