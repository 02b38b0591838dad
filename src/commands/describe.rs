use base64::{engine::general_purpose, Engine as _};
use console::style;
use spinners::{Spinner, Spinners};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::print_outcome;
use crate::api::actions;
use crate::core::{config, storage::AppCtx};

const MAX_FILE_SIZE_MB: u64 = 5;
const MAX_FILE_SIZE_BYTES: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

/// Analyze an image file and print its description.
pub async fn run(ctx: &AppCtx, image: &Path, backend_spec: Option<&str>) -> Result<(), String> {
    let data_uri = encode_image(image)?;
    let backend = config::load_backend(ctx, backend_spec)?;

    let mut form = HashMap::new();
    form.insert("photoDataUri".to_string(), data_uri);

    let mut sp = Spinner::new(Spinners::Dots9, "Analyzing image...".into());
    let result = actions::describe_image(&backend, &form).await;
    sp.stop_with_message("✔ Response received.".into());

    print_outcome(result, |data| {
        println!("{}", style("Description").green().bold());
        println!("{}", data.description);
    })
}

/// Reads the image and builds the `data:image/...;base64,` URI the pipeline
/// expects, mirroring what the browser form would submit.
fn encode_image(path: &Path) -> Result<String, String> {
    let mime = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => return Err("Invalid file type. Please select an image (PNG, JPG, GIF, WEBP).".to_string()),
    };

    let bytes =
        fs::read(path).map_err(|e| format!("Unable to read {}: {}", path.display(), e))?;
    if bytes.len() as u64 > MAX_FILE_SIZE_BYTES {
        return Err(format!(
            "File is too large. Maximum size is {}MB.",
            MAX_FILE_SIZE_MB
        ));
    }

    Ok(format!(
        "data:{};base64,{}",
        mime,
        general_purpose::STANDARD.encode(bytes)
    ))
}
