use std::io::{self, BufRead, Write};

/// Ask one line-oriented question. An empty or EOF answer is `None`.
pub fn ask(question: &str) -> io::Result<Option<String>> {
    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    let read = io::stdin().lock().read_line(&mut answer)?;
    if read == 0 {
        return Ok(None);
    }

    let answer = answer.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer.to_string()))
    }
}

/// Yes/no confirmation; only an explicit `n` declines.
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim() != "n")
}
