use std::io::{self, BufRead, Write};

use quill_rope::{Appendable, Insertable};

use crate::config::ConsoleConfig;

/// Runs the interactive command loop over an `Appendable`-only backend
/// (`t f l g w s q`). `i`/`d` are reported as unknown commands.
pub fn run<B: Appendable>(backend: &mut B, config: &ConsoleConfig) -> io::Result<()> {
    run_loop(backend, config, |_backend, _key, _arg| None)
}

/// As `run`, but also wires up `i`/`d` for a backend that is `Insertable`.
pub fn run_insertable<B: Insertable>(backend: &mut B, config: &ConsoleConfig) -> io::Result<()> {
    run_loop(backend, config, |backend: &mut B, key, arg| match key {
        'i' => Some(backend.insert(arg.as_bytes()).map_err(|e| e.to_string())),
        'd' => match arg.trim().parse::<u64>() {
            Ok(count) => Some(backend.erase(count).map_err(|e| e.to_string())),
            Err(_) => Some(Err("number expected".to_string())),
        },
        _ => None,
    })
}

/// Shared loop: render, prompt, read a line, dispatch its leading key.
/// `extra` handles any commands beyond the universal `Appendable` set
/// (currently just `i`/`d`); it returns `None` for a key it doesn't own.
fn run_loop<B: Appendable>(
    backend: &mut B,
    config: &ConsoleConfig,
    mut extra: impl FnMut(&mut B, char, &str) -> Option<Result<(), String>>,
) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        render(backend, config)?;
        print!("{}", config.prompt);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let Some(key) = line.chars().next() else {
            continue;
        };
        let arg = &line[key.len_utf8()..];
        if key == 'q' {
            println!("bye");
            break;
        }
        let outcome = dispatch_common(backend, key, arg).or_else(|| extra(backend, key, arg));
        match outcome {
            Some(Ok(())) => {}
            Some(Err(message)) => eprintln!("{}", message),
            None => eprintln!("command '{}' unknown", key),
        }
    }
    Ok(())
}

/// Dispatches the commands every backend supports. Returns `None` for a key
/// it doesn't recognize, leaving room for `extra` to try.
fn dispatch_common<B: Appendable>(backend: &mut B, key: char, arg: &str) -> Option<Result<(), String>> {
    let result = match key {
        't' => backend.tell().map(|pos| println!("{}", pos)),
        'f' => backend.to_start(),
        'l' => backend.to_end(),
        'g' => match arg.trim().parse::<i64>() {
            Ok(delta) => backend.go(delta),
            Err(_) => return Some(Err("number expected".to_string())),
        },
        'w' => backend.replace(arg.as_bytes()),
        's' => backend.flush(),
        _ => return None,
    };
    Some(result.map_err(|e| e.to_string()))
}

/// Saves the cursor, reads `config.render_width` bytes from the start of
/// the buffer, restores the cursor, and prints the window between two
/// separator lines. Non-printable bytes are shown as `?`; the underlying
/// content is unchanged.
fn render<B: Appendable>(backend: &mut B, config: &ConsoleConfig) -> io::Result<()> {
    let saved = backend.tell().map_err(to_io_error)?;
    backend.to_start().map_err(to_io_error)?;
    let bytes = backend
        .view(config.render_width as u64)
        .map_err(to_io_error)?;
    backend.to_start().map_err(to_io_error)?;
    backend.go(saved as i64).map_err(to_io_error)?;

    let rendered: String = bytes
        .iter()
        .map(|&b| if (0x20..0x7f).contains(&b) { b as char } else { '?' })
        .collect();
    println!("{}", config.separator);
    println!("{}", rendered);
    println!("{}", config.separator);
    Ok(())
}

fn to_io_error(e: quill_rope::RopeError) -> io::Error {
    io::Error::other(e.to_string())
}
