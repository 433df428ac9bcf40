use chronolist::ChronoList;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== chronolist - Getting Started ===\n");

    let mut tasks = ChronoList::new();
    println!("✓ Created an empty versioned list\n");

    // === 1. BASIC LIST OPERATIONS ===
    println!("1. Basic List Operations");
    println!("------------------------");

    tasks.push("write the report".to_string());
    tasks.push("review the report".to_string());
    tasks.insert(0, "gather the numbers".to_string())?;

    println!("   {} tasks:", tasks.len());
    for (i, task) in tasks.iter().enumerate() {
        println!("     {}. {}", i + 1, task);
    }
    println!();

    // === 2. SEARCH AND VIEWS ===
    println!("2. Search and Views");
    println!("-------------------");

    let needle = "review the report".to_string();
    println!("   index_of(\"{}\") = {:?}", needle, tasks.index_of(&needle));
    println!("   first two tasks: {:?}", tasks.sublist(0, 2)?);
    println!();

    // === 3. MUTATIONS ARE REMEMBERED ===
    println!("3. Mutations Are Remembered");
    println!("---------------------------");

    let done = tasks.remove(0)?;
    println!("   Completed: {}", done);
    let old = tasks.replace(0, "rewrite the report".to_string())?;
    println!("   Replaced: {} -> rewrite the report", old);

    let stats = tasks.stats();
    println!(
        "   {} live, {} retired, {} operations\n",
        stats.live_count, stats.retired_count, stats.operations_count
    );

    // === 4. LOOKING BACK ===
    println!("4. Looking Back");
    println!("---------------");

    // Nothing predates the list, and every past mutation stays answerable.
    let prehistory = tasks.query_as_of("1970-01-01 00:00:00")?;
    println!("   Tasks before the list existed: {:?}", prehistory);

    Ok(())
}
