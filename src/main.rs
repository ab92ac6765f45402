use anyhow::Result;

fn main() -> Result<()> {
    forge_census::cli::run()
}
