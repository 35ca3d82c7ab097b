//! Interactive fallbacks for options not given as flags.

use std::io::{self, Write};

use anyhow::{Context, Result};

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub fn prompt_count() -> Result<u32> {
    let line = read_line("How many parts should be created? ")?;
    line.parse()
        .with_context(|| format!("invalid part count '{}'", line))
}

pub fn prompt_format() -> Result<String> {
    Ok(read_line("Which label format (json/xml/excel)? ")?)
}
