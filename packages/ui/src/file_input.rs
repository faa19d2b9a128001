use api::ImageFile;
use dioxus::prelude::*;

/// Read the first file picked in an `<input type="file">` into memory.
pub async fn first_image(evt: &FormEvent) -> Option<ImageFile> {
    let file = evt.files().into_iter().next()?;
    let name = file.name();
    let content_type = file
        .content_type()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| guess_content_type(&name).to_string());

    match file.read_bytes().await {
        Ok(bytes) => Some(ImageFile {
            name,
            content_type,
            bytes: bytes.to_vec(),
        }),
        Err(e) => {
            tracing::error!("could not read {name}: {e}");
            None
        }
    }
}

fn guess_content_type(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
