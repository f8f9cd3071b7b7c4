use std::io::{BufRead, Write};

/// Prompt marker printed before every interactive answer
pub const PROMPT: &str = "ffhrd> ";

/// Print `question` followed by the prompt marker and read one line
///
/// Returns the answer without surrounding whitespace. End of input yields an
/// empty string.
pub fn ask<R, W>(input: &mut R, output: &mut W, question: &str) -> std::io::Result<String>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", question)?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
