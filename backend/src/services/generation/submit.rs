//! `POST /api/rodin`: forwards a generation request.
//!
//! The incoming multipart body is read part by part and rebuilt as a new
//! `reqwest` form: text fields keep their value, file parts keep their field
//! name, file name and content type. More than [`MAX_IMAGES`] `images` parts
//! are rejected before anything is sent upstream.

use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use common::model::image::{IMAGE_FIELD, MAX_IMAGES};
use common::workflow::RequestKind;
use futures_util::StreamExt;
use log::info;
use reqwest::multipart::{Form, Part};
use uuid::Uuid;

use crate::error::RelayError;
use crate::relay::RelayState;

/// One part of the submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

pub async fn process(state: web::Data<RelayState>, payload: Multipart) -> Result<HttpResponse, RelayError> {
    let parts = collect_parts(payload).await?;

    let request_id = Uuid::new_v4().to_string();
    let images = parts
        .iter()
        .filter(|part| matches!(part, FormPart::File { name, .. } if name == IMAGE_FIELD))
        .count();
    info!(
        "[{request_id}] Submitting generation request ({} fields, {images} images)",
        parts.len() - images
    );

    let request = state.post("rodin").multipart(into_form(parts)?);
    state.forward(RequestKind::Submit, &request_id, request).await
}

async fn collect_parts(mut payload: Multipart) -> Result<Vec<FormPart>, RelayError> {
    let mut parts = Vec::new();
    let mut images = 0;

    while let Some(item) = payload.next().await {
        let field = item.map_err(|err| RelayError::InvalidBody(err.to_string()))?;
        let Some(disposition) = field.content_disposition() else {
            continue;
        };
        let name = disposition.get_name().unwrap_or_default().to_string();
        let file_name = disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        match file_name {
            Some(file_name) => {
                if name == IMAGE_FIELD {
                    images += 1;
                    if images > MAX_IMAGES {
                        return Err(RelayError::TooManyImages { max: MAX_IMAGES });
                    }
                }
                parts.push(FormPart::File {
                    bytes: read_field(field).await?,
                    name,
                    file_name,
                    content_type,
                });
            }
            None => {
                let value = String::from_utf8(read_field(field).await?)
                    .map_err(|_| RelayError::InvalidBody(format!("field {name} is not valid UTF-8")))?;
                parts.push(FormPart::Text { name, value });
            }
        }
    }

    Ok(parts)
}

async fn read_field(mut field: Field) -> Result<Vec<u8>, RelayError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|err| RelayError::InvalidBody(err.to_string()))?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn into_form(parts: Vec<FormPart>) -> Result<Form, RelayError> {
    parts.into_iter().try_fold(Form::new(), |form, part| match part {
        FormPart::Text { name, value } => Ok(form.text(name, value)),
        FormPart::File {
            name,
            file_name,
            content_type,
            bytes,
        } => {
            let mut file = Part::bytes(bytes).file_name(file_name);
            if let Some(content_type) = content_type {
                file = file
                    .mime_str(&content_type)
                    .map_err(|err| RelayError::InvalidBody(err.to_string()))?;
            }
            Ok(form.part(name, file))
        }
    })
}
