use crate::view::{Results, View};

/// Plain-text rendering of the widget for a terminal
pub fn render_text(view: &View) -> String {
    let mut lines = Vec::new();

    if view.busy {
        lines.push(format!("Searching for \"{}\"...", view.query_input.trim()));
    }

    if let Some(error) = &view.error {
        lines.push(format!("! {}", sanitize(error)));
    }

    match &view.results {
        Results::Hidden => {}
        Results::Preview { image_url, .. } => {
            lines.push(format!("Thumbnail: {}", sanitize(image_url)));
            lines.push(format!("[/copy] {}", view.copy_label));
        }
        Results::Gallery(cards) => {
            lines.push(format!("{} covers found, pick one with /select <n>:", cards.len()));
            for card in cards {
                lines.push(format!("  {}. {}", card.index + 1, sanitize(&card.title)));
                lines.push(format!("     {}", sanitize(&card.image_url)));
            }
        }
    }

    if view.input_focused && !view.busy {
        lines.push("Book title:".to_string());
    }

    lines.join("\n")
}

/// Titles come from a remote service; keep terminal control sequences out
fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}
