use std::io::{self, Write};

use customer_registry::Queue;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut out = io::stdout().lock();
    let mut queue: Queue<i64> = Queue::new();

    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);
    queue.display(&mut out)?;

    for _ in 0..2 {
        if let Err(err) = queue.dequeue() {
            tracing::warn!(error = %err, "dequeue failed");
        }
    }
    queue.display(&mut out)?;

    match queue.peek() {
        Ok(first) => writeln!(out, "First element: {first}")?,
        Err(err) => writeln!(out, "First element: <{err}>")?,
    }
    writeln!(out, "Queue size: {}", queue.size())?;

    queue.clear();
    writeln!(out, "Queue empty: {}", queue.is_empty())?;
    queue.display(&mut out)?;

    match queue.dequeue() {
        Ok(item) => writeln!(out, "Dequeued: {item}")?,
        Err(err) => writeln!(out, "Dequeue on empty queue: {err}")?,
    }

    queue.enqueue(4);
    queue.enqueue(5);
    queue.display(&mut out)?;
    writeln!(out, "Queue size: {}", queue.size())?;

    let mut names: Queue<String> = ["Mayer", "Andres"].iter().map(|s| s.to_string()).collect();
    names.enqueue("Luis".to_string());
    names.display(&mut out)?;
    while let Ok(name) = names.dequeue() {
        writeln!(out, "Served: {name}")?;
    }

    Ok(())
}
