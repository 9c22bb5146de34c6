pub mod multipart;
pub mod urlencoded;

pub use multipart::{boundary_from_content_type, parse_multipart, MultipartPart};
pub use urlencoded::{encode_query, parse_form, parse_query};

use crate::domain::{FileUpload, NominationForm};

/// Assemble a nomination form from parsed multipart parts. Text parts fill
/// the string fields; the `documents`/`images` parts become file uploads
/// when the browser actually sent one.
pub fn nomination_from_parts(parts: &[MultipartPart]) -> NominationForm {
    let mut form = NominationForm::default();

    for part in parts {
        match part.name.as_str() {
            "candidateName" => form.candidate_name = part.text(),
            "email" => form.email = part.text(),
            "phone" => form.phone = part.text(),
            "category" => form.category = part.text(),
            "organization" => form.organization = part.text(),
            "achievements" => form.achievements = part.text(),
            "documents" if part.is_file() => form.document = Some(file_upload(part)),
            "images" if part.is_file() => form.image = Some(file_upload(part)),
            _ => {}
        }
    }

    form
}

fn file_upload(part: &MultipartPart) -> FileUpload {
    let content_type = part
        .content_type
        .as_deref()
        .and_then(|ct| ct.parse::<mime::Mime>().ok())
        .unwrap_or(mime::APPLICATION_OCTET_STREAM);

    FileUpload {
        filename: part.filename.clone().unwrap_or_default(),
        content_type,
        size: part.data.len() as u64,
    }
}
