use std::io::BufRead;

/// Feed each input line to `on_line` until EOF or until it returns `false`.
/// Blocks; run it on its own thread.
pub fn watch_lines<R, F>(reader: R, mut on_line: F) -> Result<(), anyhow::Error>
where
    R: BufRead,
    F: FnMut(String) -> bool,
{
    for line in reader.lines() {
        if !on_line(line?) {
            break;
        }
    }

    Ok(())
}
