// src/forms/multipart.rs
//
// Small hand-rolled `multipart/form-data` reader. We only need field
// names, filenames, declared content types, and byte lengths, so a full
// streaming parser would be overkill.

use crate::errors::ServerError;

#[derive(Debug)]
pub struct MultipartPart {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl MultipartPart {
    /// File inputs submitted empty arrive as a part with an empty
    /// filename and no bytes.
    pub fn is_file(&self) -> bool {
        self.filename.as_deref().is_some_and(|f| !f.is_empty()) || !self.data.is_empty()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

/// Extract the boundary parameter from a `multipart/form-data` content type.
pub fn boundary_from_content_type(content_type: &str) -> Option<String> {
    let mime: mime::Mime = content_type.parse().ok()?;
    if mime.type_() != mime::MULTIPART || mime.subtype() != mime::FORM_DATA {
        return None;
    }
    mime.get_param(mime::BOUNDARY)
        .map(|b| b.as_str().to_string())
}

pub fn parse_multipart(body: &[u8], boundary: &str) -> Result<Vec<MultipartPart>, ServerError> {
    let delim = format!("--{boundary}").into_bytes();
    let mut parts = Vec::new();

    let mut pos = find(body, &delim, 0)
        .ok_or_else(|| bad("multipart body missing boundary"))?
        + delim.len();

    loop {
        if body[pos.min(body.len())..].starts_with(b"--") {
            // closing delimiter
            break;
        }

        let headers_start = if body[pos..].starts_with(b"\r\n") {
            pos + 2
        } else {
            pos
        };
        let headers_end = find(body, b"\r\n\r\n", headers_start)
            .ok_or_else(|| bad("multipart part missing header terminator"))?;
        let header_block = std::str::from_utf8(&body[headers_start..headers_end])
            .map_err(|_| bad("multipart part headers are not valid utf-8"))?;

        let data_start = headers_end + 4;
        let next = find(body, &delim, data_start)
            .ok_or_else(|| bad("multipart part is not terminated"))?;
        let mut data_end = next;
        if data_end >= data_start + 2 && &body[data_end - 2..data_end] == b"\r\n" {
            data_end -= 2;
        }

        if let Some(part) = build_part(header_block, body[data_start..data_end].to_vec()) {
            parts.push(part);
        }

        pos = next + delim.len();
    }

    Ok(parts)
}

fn build_part(header_block: &str, data: Vec<u8>) -> Option<MultipartPart> {
    let mut name = None;
    let mut filename = None;
    let mut content_type = None;

    for line in header_block.split("\r\n") {
        let Some((header, value)) = line.split_once(':') else {
            continue;
        };
        match header.trim().to_ascii_lowercase().as_str() {
            "content-disposition" => {
                for seg in value.split(';') {
                    if let Some((k, v)) = seg.trim().split_once('=') {
                        let v = v.trim().trim_matches('"').to_string();
                        match k.trim() {
                            "name" => name = Some(v),
                            "filename" => filename = Some(v),
                            _ => {}
                        }
                    }
                }
            }
            "content-type" => content_type = Some(value.trim().to_string()),
            _ => {}
        }
    }

    // A part without a field name is useless to us.
    let name = name?;
    Some(MultipartPart {
        name,
        filename,
        content_type,
        data,
    })
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

fn bad(msg: &str) -> ServerError {
    ServerError::BadRequest(msg.into())
}
