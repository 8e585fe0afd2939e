//! REPL session and command handlers for the demo scenario.
//!
//! The handlers own all side effects: they call the resolver against
//! per-turn candidate pools, mutate the demo world, and decide what lands
//! in the history ring. The interpreter itself only classifies input.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use kp_interp::{
    CandidatePool, Command, Interpretation, Interpreter, ResolutionResult, UseArgs, UseMode,
    resolve, resolve_exits,
};
use kp_world::WorldView;

use crate::demo::DemoWorld;

/// Result of handling one line of input.
pub struct StepOutcome {
    /// Text to show the player.
    pub text: String,
    /// Whether the session should end.
    pub quit: bool,
}

impl StepOutcome {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// Run the interactive demo session.
pub fn run() -> Result<(), String> {
    let mut world = DemoWorld::petersburg();
    let mut interp = Interpreter::new();

    println!("{}", "Kopeck".bold());
    println!("Type 'help' for commands, 'quit' to leave.\n");
    println!("{}", render_view(&world, &mut interp));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }

        let outcome = step(&mut world, &mut interp, &line);
        println!("{}", outcome.text);
        if outcome.quit {
            break;
        }
    }

    Ok(())
}

/// Interpret one line against the demo world; used by `kopeck parse`.
pub fn parse_line(line: &str) -> Result<(), String> {
    let world = DemoWorld::petersburg();
    let mut interp = Interpreter::new();
    interp.rebuild_actions(&world);
    let interpretation = interp.interpret(line, &world);
    println!("{interpretation:?}");
    Ok(())
}

/// Handle one line: interpret, then execute.
pub fn step(world: &mut DemoWorld, interp: &mut Interpreter, line: &str) -> StepOutcome {
    match interp.interpret(line, world) {
        Interpretation::Command(command) => execute(world, interp, command),
        Interpretation::Message(text) => StepOutcome::text(text),
        Interpretation::Unknown {
            message,
            suggestions,
        } => {
            let mut text = message;
            if !suggestions.is_empty() {
                text.push_str(&format!("\nFor example: {}", suggestions.join(", ")));
            }
            StepOutcome::text(text)
        }
    }
}

/// Which candidate pool a name was found in.
#[derive(Clone, Copy)]
enum PoolKind {
    Npcs,
    LocationItems,
    Inventory,
}

enum Found {
    One { name: String, kind: PoolKind },
    Prompt(String),
    Missing,
}

/// Try pools in order; the first pool with any match decides the outcome.
fn resolve_in(world: &DemoWorld, fragment: &str, pools: &[PoolKind]) -> Found {
    for kind in pools {
        let pool = match kind {
            PoolKind::Npcs => CandidatePool::npcs(world),
            PoolKind::LocationItems => CandidatePool::location_items(world),
            PoolKind::Inventory => CandidatePool::inventory(world),
        };
        match resolve(fragment, &pool) {
            ResolutionResult::Resolved(name) => {
                return Found::One { name, kind: *kind };
            }
            ResolutionResult::Ambiguous { prompt, .. } => return Found::Prompt(prompt),
            ResolutionResult::NotFound => {}
        }
    }
    Found::Missing
}

fn brief(world: &DemoWorld, name: &str, kind: PoolKind) -> String {
    match kind {
        PoolKind::Npcs => world.describe_npc_brief(name),
        _ => world.describe_item_brief(name),
    }
}

fn render_view(world: &DemoWorld, interp: &mut Interpreter) -> String {
    interp.rebuild_actions(world);
    let location = world.location();
    let mut out = format!("{}\n{}\n", location.name.bold(), location.description);
    if !interp.actions().is_empty() {
        out.push('\n');
        for action in interp.actions().entries() {
            out.push_str(&format!("  [{}] {}\n", action.index, action.label));
        }
    }
    out
}

fn execute(world: &mut DemoWorld, interp: &mut Interpreter, command: Command) -> StepOutcome {
    let outcome = match &command {
        Command::Look => StepOutcome::text(render_view(world, interp)),

        Command::Examine { target } => {
            match resolve_in(world, target, &[PoolKind::Npcs, PoolKind::LocationItems, PoolKind::Inventory])
            {
                Found::One { name, kind } => {
                    StepOutcome::text(format!("{name}: {}.", brief(world, &name, kind)))
                }
                Found::Prompt(prompt) => return StepOutcome::text(prompt),
                Found::Missing => {
                    return StepOutcome::text(format!("You see no {target} here."));
                }
            }
        }

        Command::MoveTo { target } => match resolve_exits(target, &world.exits()) {
            ResolutionResult::Resolved(key) => {
                if world.travel(&key) {
                    StepOutcome::text(render_view(world, interp))
                } else {
                    return StepOutcome::text("You can't go that way.".to_string());
                }
            }
            ResolutionResult::Ambiguous { prompt, .. } => return StepOutcome::text(prompt),
            ResolutionResult::NotFound => {
                return StepOutcome::text("You can't go that way.".to_string());
            }
        },

        Command::Take { target } => match resolve_in(world, target, &[PoolKind::LocationItems]) {
            Found::One { name, .. } => {
                world.take(&name);
                StepOutcome::text(format!("You take the {name}."))
            }
            Found::Prompt(prompt) => return StepOutcome::text(prompt),
            Found::Missing => return StepOutcome::text(format!("There is no {target} here.")),
        },

        Command::TalkTo { target } => match resolve_in(world, target, &[PoolKind::Npcs]) {
            Found::One { name, .. } => {
                let state = world
                    .npcs_present()
                    .into_iter()
                    .find(|n| n.name == name)
                    .and_then(|n| n.apparent_state);
                match state {
                    Some(state) => StepOutcome::text(format!(
                        "{name}, {state}, turns to you. You exchange a few words."
                    )),
                    None => StepOutcome::text(format!("{name} has little to say right now.")),
                }
            }
            Found::Prompt(prompt) => return StepOutcome::text(prompt),
            Found::Missing => return StepOutcome::text(format!("{target} is not here.")),
        },

        Command::Use(args) => return use_item(world, interp, &command, args),

        Command::Persuade { target, statement } => {
            match resolve_in(world, target, &[PoolKind::Npcs]) {
                Found::One { name, .. } => StepOutcome::text(format!(
                    "{name} hears you out as you argue that {statement}, and does not look \
                     convinced."
                )),
                Found::Prompt(prompt) => return StepOutcome::text(prompt),
                Found::Missing => return StepOutcome::text(format!("{target} is not here.")),
            }
        }

        Command::SelectItem { target } => {
            match resolve_in(world, target, &[PoolKind::LocationItems, PoolKind::Inventory]) {
                Found::One { name, kind } => {
                    StepOutcome::text(format!("You consider the {name}: {}.", brief(world, &name, kind)))
                }
                Found::Prompt(prompt) => return StepOutcome::text(prompt),
                Found::Missing => {
                    return StepOutcome::text(format!("You see no {target} here."));
                }
            }
        }

        Command::Inventory => {
            let items = world.inventory_items();
            if items.is_empty() {
                StepOutcome::text("You are carrying nothing.")
            } else {
                let mut out = "You are carrying:\n".to_string();
                for item in items {
                    match item.quantity {
                        Some(q) => out.push_str(&format!("  - {} (x{q})\n", item.name)),
                        None => out.push_str(&format!("  - {}\n", item.name)),
                    }
                }
                StepOutcome::text(out)
            }
        }

        Command::History => {
            if interp.history().is_empty() {
                StepOutcome::text("No commands recorded yet.")
            } else {
                let mut out = String::new();
                for (i, entry) in interp.history().entries().enumerate() {
                    out.push_str(&format!("{:>3}. {entry}\n", i + 1));
                }
                StepOutcome::text(out)
            }
        }

        Command::Retry => StepOutcome::text("There is nothing to retry."),
        Command::Rephrase => StepOutcome::text("There is nothing to rephrase."),

        Command::Help => StepOutcome::text(help_text()),

        Command::Quit => {
            return StepOutcome {
                text: "Goodbye.".to_string(),
                quit: true,
            };
        }
    };

    // Only executed commands land in the ring; the ring itself drops
    // meta-commands.
    interp.record_history(&command);
    outcome
}

fn use_item(
    world: &mut DemoWorld,
    interp: &mut Interpreter,
    command: &Command,
    args: &UseArgs,
) -> StepOutcome {
    let item_pools: &[PoolKind] = match args.mode {
        UseMode::Give => &[PoolKind::Inventory],
        _ => &[PoolKind::Inventory, PoolKind::LocationItems],
    };
    let item = match resolve_in(world, &args.item, item_pools) {
        Found::One { name, .. } => name,
        Found::Prompt(prompt) => return StepOutcome::text(prompt),
        Found::Missing => {
            return StepOutcome::text(format!("You don't have any {}.", args.item));
        }
    };

    let outcome = match (&args.mode, &args.target) {
        (UseMode::Give, Some(target)) => match resolve_in(world, target, &[PoolKind::Npcs]) {
            Found::One { name, .. } => {
                world.give_away(&item);
                StepOutcome::text(format!("You give the {item} to {name}."))
            }
            Found::Prompt(prompt) => return StepOutcome::text(prompt),
            Found::Missing => return StepOutcome::text(format!("{target} is not here.")),
        },
        (UseMode::Read, _) => StepOutcome::text(format!(
            "You read the {item}: {}.",
            world.describe_item_brief(&item)
        )),
        (UseMode::UseOn, Some(target)) => {
            match resolve_in(world, target, &[PoolKind::Npcs, PoolKind::LocationItems]) {
                Found::One { name, .. } => StepOutcome::text(format!(
                    "You try the {item} on {name}. Nothing obvious happens."
                )),
                Found::Prompt(prompt) => return StepOutcome::text(prompt),
                Found::Missing => {
                    return StepOutcome::text(format!("You see no {target} here."));
                }
            }
        }
        _ => StepOutcome::text(format!(
            "You turn the {item} over in your hands. Nothing happens."
        )),
    };

    interp.record_history(command);
    outcome
}

fn help_text() -> String {
    "Commands:\n\
     look (or l) — describe your surroundings\n\
     examine <thing> — look closer at something\n\
     go to <exit> / n s e w — move around\n\
     take <item> — pick something up\n\
     talk to <person> — strike up a conversation\n\
     give <item> to <person> — hand something over\n\
     read <item> — read something\n\
     use <item> [on <target>] — use an item\n\
     persuade <person> that <statement> — argue a point\n\
     inventory (or i) — what you are carrying\n\
     history — your recent commands, !! repeats the last one\n\
     a bare number picks an entry from the last location view\n\
     quit — leave"
        .to_string()
}
