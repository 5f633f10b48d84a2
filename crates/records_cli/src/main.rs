//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `records_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use records_core::{RecordError, Task, TaskService};

fn main() {
    println!("records_core ping={}", records_core::ping());
    println!("records_core version={}", records_core::core_version());

    match probe_store() {
        Ok(count) => println!("records_core store=ok tasks={count}"),
        Err(err) => println!("records_core store=error reason={err}"),
    }
}

fn probe_store() -> Result<usize, RecordError> {
    let mut tasks = TaskService::new();
    tasks.add_task(Task::new("probe", "Smoke probe", "cli linkage check")?)?;
    Ok(tasks.len())
}
