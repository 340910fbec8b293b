use anyhow::Context;
use keiretsu::App;

fn main() -> anyhow::Result<()> {
    let mut app = App::new().context("failed to initialize keiretsu")?;
    app.run().context("keiretsu terminated abnormally")?;
    Ok(())
}
