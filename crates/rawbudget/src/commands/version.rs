pub fn run() -> anyhow::Result<()> {
    println!("rawbudget {}", env!("CARGO_PKG_VERSION"));
    println!("Token budgeting for raw-mode telemetry prompts");
    Ok(())
}
