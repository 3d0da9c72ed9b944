use std::io::{self, BufRead, Write};

/// Prints `message`, then reads one line and returns it trimmed. End of input
/// reads as an empty answer.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn ask_target_url<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<String> {
    ask(input, output, "Page URL: ")
}

/// Blank answer falls back to `default`.
pub fn ask_output_directory<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default: &str,
) -> io::Result<String> {
    let answer = ask(input, output, &format!("Output directory (default: '{}'): ", default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}
