//! minimark CLI - renders restricted markdown to HTML or an excerpt

use std::io::{self, Read, Write};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut excerpt = false;
    let mut path: Option<&str> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--excerpt" => excerpt = true,
            "-" => {}
            other => path = Some(other),
        }
    }

    // Read from the given file, or stdin
    let input = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut output = if excerpt {
        minimark::excerpt_markdown(&input)
    } else {
        minimark::to_html(&input)
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    io::stdout().write_all(output.as_bytes())?;

    Ok(())
}
