use arboard::Clipboard;

/// Put `text` on the system clipboard
pub fn copy_text(text: &str) -> Result<(), anyhow::Error> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy on a blocking thread; the clipboard can stall on some desktops
pub async fn copy_text_async(text: String) -> Result<(), anyhow::Error> {
    tokio::task::spawn_blocking(move || copy_text(&text)).await?
}
