use coverpick_core::{AppEvent, UiEvent};
use kanal::AsyncSender;

pub const HELP: &str = "Type a book title and press Enter. Commands: /isbn <code>, /select <n>, /copy, /clear, /quit";

/// Map one input line onto a UI event. Plain text is a title search.
pub fn parse_command(line: &str) -> Result<UiEvent, String> {
    let Some(command) = line.trim_start().strip_prefix('/') else {
        return Ok(UiEvent::Submit(line.to_string()));
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((command.trim(), ""));

    match name {
        "isbn" => Ok(UiEvent::SubmitIsbn(arg.to_string())),
        "select" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(UiEvent::Select(n - 1)),
            _ => Err(format!("'{arg}' is not a candidate number")),
        },
        "copy" => Ok(UiEvent::Copy),
        "clear" => Ok(UiEvent::Clear),
        "quit" | "exit" => Ok(UiEvent::Close),
        _ => Err(format!("unknown command /{name}")),
    }
}

/// Read stdin on a dedicated thread and forward each line as a UI event
pub fn watcher_io(event_tx: AsyncSender<AppEvent>) {
    let tx = event_tx.clone_sync();

    std::thread::spawn(move || {
        tracing::info!("Listening for input on stdin");

        let result = coverpick_io::input::watch_lines(std::io::stdin().lock(), |line| {
            let event = match parse_command(&line) {
                Ok(event) => event,
                Err(message) => {
                    eprintln!("{message}. {HELP}");
                    return true;
                }
            };

            let closing = event == UiEvent::Close;
            if let Err(e) = tx.send(AppEvent::Ui(event)) {
                tracing::debug!("Event loop gone, stopping input: {}", e);
                return false;
            }
            !closing
        });

        if let Err(e) = result {
            tracing::error!("stdin watcher error: {}", e);
        }

        // EOF closes the widget like /quit does
        let _ = tx.send(AppEvent::Ui(UiEvent::Close));
    });
}
