use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};

use tr_core::RunGenerator;
use tr_session::{
    CallOutcome, Event, Phase, PersonaOracle, RenderProjection, Tick, TriviaSession,
};

use super::GameOptions;

pub fn run(pool_path: &Path, options: &GameOptions) -> Result<(), String> {
    let pool = super::load_pool(pool_path)?;
    let config = options.to_config()?;
    let oracle = Arc::new(PersonaOracle::new(config.theme));

    let mut session = TriviaSession::new(RunGenerator::new(pool), oracle, config)
        .map_err(|e| format!("failed to start session: {e}"))?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;
    runtime.block_on(play_loop(&mut session))
}

async fn play_loop(session: &mut TriviaSession) -> Result<(), String> {
    let theme = session.theme();
    println!("  {} {}", "Welcome to".bold(), theme.title.bold());
    println!(
        "  Type a number to answer, 'fifty' for {}, 'call' for {}.",
        theme.fifty_name, theme.call_name
    );
    println!("  Type 'rules' for how to play, 'quit' to exit.\n");
    render(&session.dispatch(Event::Start));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let (call_tx, mut call_rx) = mpsc::unbounded_channel::<CallOutcome>();
    let second = Duration::from_secs(1);
    let mut clock = interval_at(Instant::now() + second, second);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.map_err(|e| e.to_string())? else {
                    break; // EOF
                };
                let input = line.trim();

                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => break,
                    "rules" | "help" => {
                        println!("{}\n", session.rules());
                        continue;
                    }
                    _ => {}
                }

                match Event::from_input(input, session.choices()) {
                    Event::Call => match session.request_call() {
                        Ok(pending) => {
                            let tx = call_tx.clone();
                            tokio::task::spawn_blocking(move || {
                                // The receiver only goes away when the game loop exits.
                                let _ = tx.send(pending.run());
                            });
                            render(&session.projection());
                        }
                        // Rejected calls change nothing; dispatch words the notice.
                        Err(_) => render(&session.dispatch(Event::Call)),
                    },
                    event => render(&session.dispatch(event)),
                }
            }
            Some(outcome) = call_rx.recv() => {
                if session.complete_call(&outcome)
                    && let Some(hint) = session.projection().hint
                {
                    println!("  {}\n", hint.cyan());
                }
            }
            _ = clock.tick() => match session.tick() {
                Tick::Counting(secs) if secs % 10 == 0 || secs <= 5 => {
                    println!("  {}", format!("Time: {secs}").dimmed());
                }
                Tick::Expired => render(&session.projection()),
                _ => {}
            },
        }
    }

    println!("  Final score: {}", session.state().score);
    Ok(())
}

fn render(p: &RenderProjection) {
    if let Some(feedback) = &p.feedback {
        let line = match p.phase {
            Phase::Correct => feedback.green().bold(),
            Phase::GameOver(_) => feedback.red().bold(),
            _ => feedback.yellow(),
        };
        println!("  {line}");
    }
    if let Some(hint) = &p.hint {
        println!("  {}", hint.cyan());
    }

    match p.phase {
        Phase::Lobby => println!("  {}", p.heading.bold()),
        Phase::AwaitingAnswer => {
            println!();
            let tier = p.difficulty.map(|d| format!(" [{d}]")).unwrap_or_default();
            println!(
                "  {}{}  ({}/{})",
                p.heading.bold(),
                tier.dimmed(),
                p.question_number,
                p.total_questions
            );
            for (i, option) in p.options.iter().enumerate() {
                println!("    {}. {option}", i + 1);
            }
            println!("  {} | {} | {}", p.score_text, p.streak_text, p.timer_text);

            let mut aids = Vec::new();
            if p.controls.fifty {
                aids.push("fifty");
            }
            if p.controls.call {
                aids.push("call");
            }
            if !aids.is_empty() {
                println!("  {}", format!("Lifelines: {}", aids.join(", ")).dimmed());
            }
        }
        Phase::Correct => {
            println!("  {} | {}", p.score_text, p.streak_text);
            println!("  {}", "Type 'next' to continue.".dimmed());
        }
        Phase::GameOver(_) => {
            println!("  {}", p.heading.bold());
            println!("  {}", "Type 'restart' to play again or 'quit' to exit.".dimmed());
        }
    }
    println!();
}
