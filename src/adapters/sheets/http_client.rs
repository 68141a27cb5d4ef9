use error_stack::ResultExt;
use google_sheets4::{hyper, hyper_rustls};

use crate::ports::sync_error::{SyncError, SyncResult};

pub type HttpsConnector = hyper_rustls::HttpsConnector<hyper::client::HttpConnector>;

pub fn http_client() -> SyncResult<hyper::Client<HttpsConnector>> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .change_context(SyncError::Connection)
        .attach_printable("could not load native TLS roots")?
        .https_or_http()
        .enable_http1()
        .enable_http2()
        .build();

    Ok(hyper::Client::builder().build(connector))
}
