//! Interactive line-prompt transport
//!
//! Each round prompts for the input file name, output file name, line
//! numbers, comment and an end-of-file marker, then reads the input source
//! and the existing test source, each terminated by the marker. A line
//! break right after a marker belongs to the marker. The answer is the
//! generated code followed by the marker. End of input ends the session.

use std::io::{BufRead, Write};

use log::debug;

use crate::core::models::parse_lines;
use crate::error::{Error, Result};

use super::handlers::Handler;
use super::types::GenerateRequest;

/// Run the prompt loop until `input` is exhausted
///
/// Returns the number of rounds answered.
pub fn serve_interactive<R: BufRead, W: Write>(
    handler: &Handler<'_>,
    mut input: R,
    mut output: W,
) -> Result<usize> {
    let mut rounds = 0;

    loop {
        let Some(input_file_path) = ask(&mut input, &mut output, "input file name")? else {
            break;
        };
        let output_file_path = ask(&mut input, &mut output, "output file name")?.unwrap_or_default();
        let lines = ask(&mut input, &mut output, "line numbers")?.unwrap_or_default();
        let comment = ask(&mut input, &mut output, "comment")?.unwrap_or_default();
        let marker = ask(&mut input, &mut output, "end of file marker")?.unwrap_or_default();
        if marker.is_empty() {
            return Err(Error::CommandLine("end of file marker must not be empty".to_string()));
        }

        let input_file = read_until(&mut input, &mut output, "input source", &marker)?;
        let output_file = read_until(&mut input, &mut output, "test source", &marker)?;

        let request = GenerateRequest {
            input_file_path,
            output_file_path,
            input_file,
            output_file,
            comment,
            lines: parse_lines(&lines).map_err(Error::CommandLine)?,
            ..GenerateRequest::default()
        };
        let response = handler.generate(&request)?;

        output
            .write_all(response.generated_code.as_bytes())
            .and_then(|()| output.write_all(marker.as_bytes()))
            .and_then(|()| output.write_all(b"\n"))
            .and_then(|()| output.flush())
            .map_err(Error::WriteTest)?;

        rounds += 1;
        debug!("answered round {rounds}");
    }

    Ok(rounds)
}

/// Prompt for one line; `None` at end of input
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>> {
    writeln!(output, "{prompt}:")
        .and_then(|()| output.flush())
        .map_err(Error::WriteTest)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(Error::OpenInput)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for a block of text ending with `marker`
///
/// End of input also ends the block.
fn read_until<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    marker: &str,
) -> Result<String> {
    writeln!(output, "{prompt} followed by {marker}:")
        .and_then(|()| output.flush())
        .map_err(Error::WriteTest)?;

    let delim = marker.as_bytes();
    let Some(&last) = delim.last() else {
        return Err(Error::CommandLine("end of file marker must not be empty".to_string()));
    };
    let mut buf = Vec::new();
    loop {
        let read = input.read_until(last, &mut buf).map_err(Error::OpenInput)?;
        if read == 0 {
            break;
        }
        if buf.ends_with(delim) {
            buf.truncate(buf.len() - delim.len());
            skip_line_break(input)?;
            break;
        }
    }

    String::from_utf8(buf).map_err(|e| Error::OpenInput(std::io::Error::other(e)))
}

/// Drop one line break waiting in `input`
fn skip_line_break<R: BufRead>(input: &mut R) -> Result<()> {
    let pending = input.fill_buf().map_err(Error::OpenInput)?;
    let len = if pending.starts_with(b"\r\n") {
        2
    } else {
        usize::from(pending.starts_with(b"\n"))
    };
    input.consume(len);
    Ok(())
}
