use chrono::Local;
use chronolist::ChronoList;
use std::thread::sleep;
use std::time::Duration;

const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

fn now_string() -> String {
    Local::now().naive_local().format(FORMAT).to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== chronolist - Time Travel ===\n");

    // Microsecond format so the demo can move fast; the default layout works
    // the same way at second resolution.
    let mut roster = ChronoList::with_format(FORMAT);

    let mut checkpoints = Vec::new();
    checkpoints.push(("empty", now_string()));
    sleep(Duration::from_millis(20));

    for name in ["ada", "grace", "edsger"] {
        roster.push(name.to_string());
        sleep(Duration::from_millis(20));
        checkpoints.push((name, now_string()));
        sleep(Duration::from_millis(20));
    }

    roster.remove(1)?;
    sleep(Duration::from_millis(20));
    checkpoints.push(("after removing grace", now_string()));

    println!("Current roster: {:?}\n", roster.to_vec());
    println!("The same roster, as of each checkpoint:");
    for (label, timestamp) in &checkpoints {
        let snapshot = roster.query_as_of(timestamp)?;
        println!("   {:>22}: {:?}", label, snapshot);
    }

    println!(
        "\nHistory retained: {} retired of {} total slots",
        roster.stats().retired_count,
        roster.stats().retired_count + roster.stats().live_count
    );

    Ok(())
}
