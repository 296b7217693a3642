//! HTTP transport for carrier requests
//!
//! One POST per request, no retry or backoff. Deadlines and cancellation belong to the
//! caller.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::{MondialRelayError, Result};

pub const ACCEPT_XML: &str = "application/xml";
pub const CONTENT_TYPE_XML: &str = "text/xml";

/// Raw transport-level answer, before any XML decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOutcome {
    pub status: u16,
    pub body: String,
}

impl TransportOutcome {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// The body of a 200 answer; anything else is a transport failure
    pub fn into_body(self) -> Result<String> {
        if !self.is_success() {
            return Err(MondialRelayError::HttpStatus {
                status: self.status,
                body: self.body,
            });
        }
        Ok(self.body)
    }
}

/// Sends one XML document and returns the raw answer.
///
/// Only connectivity failures are errors here; status codes are judged by
/// [`TransportOutcome::into_body`].
pub trait Transport: Send + Sync {
    fn post_xml(&self, url: &str, body: String) -> Result<TransportOutcome>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let user_agent = format!("mondial-relay/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Use a caller-configured client, e.g. one carrying a request timeout
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn post_xml(&self, url: &str, body: String) -> Result<TransportOutcome> {
        let response = self
            .client
            .post(url)
            .header(ACCEPT, ACCEPT_XML)
            .header(CONTENT_TYPE, CONTENT_TYPE_XML)
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(TransportOutcome { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    struct Received {
        request_line: String,
        headers: Vec<(String, String)>,
        body: String,
    }

    impl Received {
        fn header(&self, name: &str) -> Option<&str> {
            self.headers
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str())
        }
    }

    /// Accept one HTTP/1.1 request, answer it with `reply` and return what was received
    fn serve_once(listener: TcpListener, status_line: &'static str, reply: &'static str) -> Received {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            let (name, value) = line.split_once(':').unwrap();
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }

        let length = headers
            .iter()
            .find(|(k, _)| k == "content-length")
            .map(|(_, v)| v.parse::<usize>().unwrap())
            .unwrap_or(0);
        let mut body = vec![0; length];
        reader.read_exact(&mut body).unwrap();

        write!(
            stream,
            "HTTP/1.1 {status_line}\r\nContent-Type: application/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
            reply.len()
        )
        .unwrap();

        Received {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).unwrap(),
        }
    }

    fn local_transport() -> HttpTransport {
        HttpTransport::with_client(Client::builder().no_proxy().build().unwrap())
    }

    #[test]
    fn posts_xml_with_carrier_headers() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            serve_once(listener, "200 OK", "<ShipmentCreationResponse/>")
        });

        let outcome = local_transport()
            .post_xml(
                &format!("http://{addr}/api/shipment"),
                "<ShipmentCreationRequest/>".to_string(),
            )
            .unwrap();
        let received = server.join().unwrap();

        assert_eq!(received.request_line, "POST /api/shipment HTTP/1.1");
        assert_eq!(received.header("accept"), Some(ACCEPT_XML));
        assert_eq!(received.header("content-type"), Some(CONTENT_TYPE_XML));
        assert_eq!(received.body, "<ShipmentCreationRequest/>");

        assert_eq!(
            outcome,
            TransportOutcome {
                status: 200,
                body: "<ShipmentCreationResponse/>".to_string(),
            }
        );
    }

    #[test]
    fn server_error_is_returned_as_outcome() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = thread::spawn(move || serve_once(listener, "500 Internal Server Error", "boom"));

        let outcome = local_transport()
            .post_xml(&format!("http://{addr}/"), String::new())
            .unwrap();
        server.join().unwrap();

        assert_eq!(outcome.status, 500);
        let err = outcome.into_body().unwrap_err();
        assert!(matches!(err, MondialRelayError::HttpStatus { status: 500, ref body } if body == "boom"));
    }

    #[test]
    fn ok_outcome_yields_body() {
        let outcome = TransportOutcome {
            status: 200,
            body: "<ShipmentCreationResponse/>".to_string(),
        };
        assert!(outcome.is_success());
        assert_eq!(outcome.into_body().unwrap(), "<ShipmentCreationResponse/>");
    }

    #[test]
    fn non_200_is_a_transport_error() {
        for status in [201, 400, 500, 503] {
            let err = TransportOutcome {
                status,
                body: "oops".to_string(),
            }
            .into_body()
            .unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::Transport);
            assert!(matches!(err, MondialRelayError::HttpStatus { status: s, .. } if s == status));
        }
    }
}
