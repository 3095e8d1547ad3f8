use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use tracing::info;

use rd_mechanics::{Engine, EngineConfig};

pub fn run(config: EngineConfig) -> Result<(), String> {
    let interactive = io::stdin().is_terminal();
    let actor = config.actor.clone();
    let mut engine = Engine::new(config);

    info!(%actor, "chat session started");
    if interactive {
        println!("  {} as {actor}", "Rolling".bold());
        println!("  Type 'help' for commands, 'quit' to exit.\n");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        if interactive {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }

        match engine.process(input) {
            Ok(Some(reply)) => println!("{}", reply.render(&actor)),
            Ok(None) => {}
            Err(e) => println!("{}", e.to_string().yellow()),
        }
    }

    info!("chat session ended");
    Ok(())
}
