use crate::console::{cards, masked};
use crate::Input;
use jest_core::{DecisionPrompt, DecisionRequest, DEFAULT_CHOICE};
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

/// Answers decision prompts from the console on its own thread, so the
/// engine's timeout keeps running while the player thinks.
pub fn spawn(prompts: Receiver<DecisionPrompt>, input: Input, names: Vec<String>) -> JoinHandle<()> {
    thread::spawn(move || {
        for prompt in prompts {
            let choice = ask(&input, &names, &prompt.request).unwrap_or(DEFAULT_CHOICE);
            if !prompt.respond(choice) {
                tracing::debug!(ticket = prompt.ticket, "engine no longer waiting");
            }
        }
    })
}

fn ask(input: &Input, names: &[String], request: &DecisionRequest) -> Option<u8> {
    match request {
        DecisionRequest::Offer { player, hand } => {
            println!("{player}, your hand: 1) {}  2) {}", hand[0], hand[1]);
            pick(input, "Which card do you hide? [1-2] ", 2)
        }
        DecisionRequest::Target { player, available } => {
            println!("{player}, pick an offer:");
            for (idx, offer) in available.iter().enumerate() {
                let owner = names.get(offer.owner).map_or("?", String::as_str);
                println!("  {}) {owner} {}", idx + 1, masked(offer));
            }
            pick(input, &format!("Offer [1-{}] ", available.len()), available.len())
        }
        DecisionRequest::Card { player, offer } => {
            let visible: Vec<_> = offer.visible.into_iter().collect();
            println!("{player}, take 1) {} or 2) the hidden card", cards(&visible));
            pick(input, "Card [1-2] ", 2)
        }
    }
}

fn pick(input: &Input, prompt: &str, max: usize) -> Option<u8> {
    let max = max.max(1);
    let value = input.number(prompt, 1, max, usize::from(DEFAULT_CHOICE))?;
    u8::try_from(value).ok()
}
