use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

/// Lines typed on stdin, shared by the setup menu, the save prompt and the
/// decision presenter. A background thread owns stdin itself.
#[derive(Debug, Clone)]
pub struct Input {
    lines: Arc<Mutex<Receiver<String>>>,
}

impl Input {
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self::from_receiver(rx)
    }

    pub fn from_receiver(lines: Receiver<String>) -> Self {
        Self {
            lines: Arc::new(Mutex::new(lines)),
        }
    }

    /// Prints `prompt` and waits for the next line. `None` once stdin closes.
    pub fn line(&self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let lines = self.lines.lock().ok()?;
        lines.recv().ok().map(|line| line.trim().to_string())
    }

    /// Asks until the answer is a number in `min..=max`; an empty answer
    /// takes `default`.
    pub fn number(&self, prompt: &str, min: usize, max: usize, default: usize) -> Option<usize> {
        loop {
            let line = self.line(prompt)?;
            if line.is_empty() {
                return Some(default);
            }
            match line.parse::<usize>() {
                Ok(value) if (min..=max).contains(&value) => return Some(value),
                _ => println!("Please enter a number between {min} and {max}."),
            }
        }
    }

    pub fn yes_no(&self, prompt: &str, default: bool) -> Option<bool> {
        loop {
            let line = self.line(prompt)?.to_ascii_lowercase();
            match line.as_str() {
                "" => return Some(default),
                "y" | "yes" | "o" | "oui" => return Some(true),
                "n" | "no" | "non" => return Some(false),
                _ => println!("Please answer y or n."),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(lines: &[&str]) -> Input {
        let (tx, rx) = mpsc::channel();
        for line in lines {
            tx.send(line.to_string()).expect("send");
        }
        Input::from_receiver(rx)
    }

    #[test]
    fn number_retries_until_in_range() {
        let input = scripted(&["x", "9", " 3 "]);
        assert_eq!(input.number("> ", 1, 4, 1), Some(3));
    }

    #[test]
    fn empty_answers_take_defaults() {
        let input = scripted(&["", ""]);
        assert_eq!(input.number("> ", 0, 4, 2), Some(2));
        assert_eq!(input.yes_no("> ", true), Some(true));
    }

    #[test]
    fn closed_input_returns_none() {
        let input = scripted(&[]);
        assert_eq!(input.line("> "), None);
    }
}
