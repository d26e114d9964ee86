//! Report export: file naming, the mock payload, and the browser download.
//!
//! There is no rendering backend, so every format downloads the same JSON
//! document; only the filename and MIME type follow the chosen format.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::Serialize;

use crate::model::{Choice, Dashboard, ReportCategory};

/// Fallback slug for titles with no alphanumeric characters.
const DEFAULT_SLUG: &str = "report";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize export: {0}")]
    Serialize(String),
    #[error("download failed: {0}")]
    Download(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Png,
    Json,
}

impl Choice for ExportFormat {
    const ALL: &'static [Self] = &[Self::Pdf, Self::Png, Self::Json];

    fn value(self) -> &'static str {
        self.extension()
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF document",
            Self::Png => "PNG image",
            Self::Json => "JSON data",
        }
    }
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Png => "png",
            Self::Json => "json",
        }
    }

    #[must_use]
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
            Self::Json => "application/json",
        }
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        DEFAULT_SLUG.to_owned()
    } else {
        slug
    }
}

#[must_use]
pub fn export_filename(report: &Dashboard, format: ExportFormat) -> String {
    format!("{}.{}", slugify(&report.title), format.extension())
}

#[derive(Debug, Serialize)]
struct ExportDocument<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    category: ReportCategory,
    format: ExportFormat,
    exported_at: &'a str,
    updated_at: &'a str,
    is_public: bool,
    views: u32,
}

/// Pretty-printed JSON body for the downloaded file.
///
/// # Errors
///
/// [`ExportError::Serialize`] if the document cannot be encoded.
pub fn export_payload(report: &Dashboard, format: ExportFormat, exported_at: &str) -> Result<String, ExportError> {
    let document = ExportDocument {
        id: &report.id,
        title: &report.title,
        description: &report.description,
        category: report.category,
        format,
        exported_at,
        updated_at: &report.updated_at,
        is_public: report.is_public,
        views: report.views,
    };
    serde_json::to_string_pretty(&document).map_err(|e| ExportError::Serialize(e.to_string()))
}

/// Save `contents` through a Blob URL and a synthetic anchor click.
///
/// # Errors
///
/// [`ExportError::Download`] when any DOM step is rejected.
#[cfg(feature = "csr")]
pub fn download(filename: &str, contents: &str, mime_type: &str) -> Result<(), ExportError> {
    use wasm_bindgen::{JsCast, JsValue};

    let fail = |e: JsValue| ExportError::Download(format!("{e:?}"));
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(fail)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(fail)?;

    let anchor = document
        .create_element("a")
        .map_err(fail)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ExportError::Download("anchor cast failed".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(fail)
}

/// Build and download the export for `report`.
///
/// # Errors
///
/// See [`export_payload`] and [`download`].
#[cfg(feature = "csr")]
pub fn export_report(report: &Dashboard, format: ExportFormat) -> Result<String, ExportError> {
    let filename = export_filename(report, format);
    let payload = export_payload(report, format, &crate::util::format::now_rfc3339())?;
    download(&filename, &payload, format.mime_type())?;
    log::info!("exported {} as {filename}", report.id);
    Ok(filename)
}
