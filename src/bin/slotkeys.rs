// Slotkeys Scenario Runner
// Replays a scripted scenario against an in-memory container screen

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use parking_lot::Mutex;

use slotkeys::sim::{Scenario, SimContainer, SimHost};
use slotkeys_core::{ItemStack, ShortcutDispatcher};

/// Inventory shortcut engine, replayed from a scenario file
#[derive(Parser, Debug)]
#[command(name = "slotkeys")]
#[command(version)]
#[command(about = "Replay an inventory shortcut scenario", long_about = None)]
struct Args {
    /// TOML scenario file
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Validate the scenario and exit
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let scenario = Scenario::load(&args.scenario)
        .with_context(|| format!("loading {}", args.scenario.display()))?;

    if args.check {
        println!(
            "Scenario is valid: {} slot(s), {} tick(s)",
            scenario.slots.len(),
            scenario.ticks.len()
        );
        return Ok(());
    }

    let cursor = Arc::new(Mutex::new(None));
    let mut container = SimContainer::new(scenario.container, Arc::clone(&cursor));
    for entry in &scenario.slots {
        container.set(
            entry.region,
            entry.index,
            ItemStack::new(entry.id, entry.count, entry.damage),
        );
    }

    let mut host = SimHost::new(Arc::clone(&cursor));
    let mut dispatcher = ShortcutDispatcher::new(&scenario.properties());

    println!("Initial state:");
    print!("{}", container);

    for (number, tick) in scenario.ticks.iter().enumerate() {
        if let Some(entry) = tick.cursor {
            *cursor.lock() = Some(ItemStack::new(entry.id, entry.count, entry.damage));
        }
        host.set_keys(&tick.keys());
        host.set_hover(&container, tick.hover.map(|h| (h.region, h.index)));

        dispatcher.handle_tick(&mut host, &mut container);

        println!("After tick {}:", number + 1);
        print!("{}", container);
        for message in host.take_messages() {
            println!("  status: {}", message);
        }
    }

    if let Some(stack) = *cursor.lock() {
        println!("Cursor still holds {}", stack);
    }
    println!("Pointer resets: {}", host.reset_count());

    Ok(())
}
