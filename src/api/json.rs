//! JSON stream transport
//!
//! Reads a sequence of request objects and answers each with one response
//! object per line. The first failure ends the stream.

use std::io::{Read, Write};

use log::debug;

use crate::error::{Error, Result};

use super::handlers::Handler;
use super::types::{GenerateRequest, GenerateResponse};

/// Serve requests from `reader` until it is exhausted
///
/// Returns the number of requests answered.
pub fn serve_json<R: Read, W: Write>(handler: &Handler<'_>, reader: R, mut writer: W) -> Result<usize> {
    let mut served = 0;
    let requests = serde_json::Deserializer::from_reader(reader).into_iter::<GenerateRequest>();

    for request in requests {
        let request = request.map_err(|e| Error::CommandLine(format!("invalid request: {e}")))?;
        let response = handler.generate(&request)?;
        write_response(&mut writer, &response)?;
        served += 1;
        debug!("answered request {served}");
    }

    Ok(served)
}

fn write_response<W: Write>(writer: &mut W, response: &GenerateResponse) -> Result<()> {
    serde_json::to_writer(&mut *writer, response).map_err(|e| Error::WriteTest(e.into()))?;
    writer.write_all(b"\n").map_err(Error::WriteTest)?;
    writer.flush().map_err(Error::WriteTest)
}
