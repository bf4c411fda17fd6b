pub mod beats;
pub mod uploads;

use axum::extract::Multipart;
use std::collections::HashMap;

use crate::error::CatalogError;

/// A multipart file part held in memory
pub struct FilePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A multipart body split into text fields and at most one `file` part
#[derive(Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub file: Option<FilePart>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, CatalogError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "file" {
                if form.file.is_some() {
                    return Err(CatalogError::Validation(
                        "Only one file may be uploaded".to_string(),
                    ));
                }
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await?.to_vec();
                form.file = Some(FilePart { file_name, bytes });
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }
}
