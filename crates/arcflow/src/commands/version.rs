pub fn run() -> anyhow::Result<()> {
    println!("arcflow {}", env!("CARGO_PKG_VERSION"));
    println!("Flow analysis reports for recorded user sessions");
    Ok(())
}
