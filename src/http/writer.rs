use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers, in insertion order
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

/// Writes one serialized response to a stream, tracking partial writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::StatusCode;
    use tokio::io::AsyncReadExt;

    #[test]
    fn serializes_ok_response_with_ordered_headers() {
        let resp = Response::ok("text/plain", b"hello".to_vec());
        let bytes = serialize_response(&resp);

        assert_eq!(
            bytes,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 5\r\n\r\nhello"
        );
    }

    #[test]
    fn serializes_not_found_without_content_length() {
        let resp = Response::not_found("File not found.");
        let bytes = serialize_response(&resp);

        assert_eq!(
            bytes,
            b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\n\r\nFile not found."
        );
        assert_eq!(resp.status, StatusCode::NotFound);
    }

    #[tokio::test]
    async fn writes_whole_buffer_through_a_small_pipe() {
        let resp = Response::ok("text/plain", b"a body long enough to split".to_vec());
        let expected = serialize_response(&resp);
        let mut writer = ResponseWriter::new(&resp);

        let (mut tx, mut rx) = tokio::io::duplex(8);
        let reader = tokio::spawn(async move {
            let mut out = Vec::new();
            rx.read_to_end(&mut out).await.unwrap();
            out
        });

        writer.write_to_stream(&mut tx).await.unwrap();
        drop(tx);

        assert_eq!(reader.await.unwrap(), expected);
    }
}
