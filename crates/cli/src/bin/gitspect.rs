use anyhow::Result;

fn main() -> Result<()> {
    gitspect_cli::main_entry()
}
