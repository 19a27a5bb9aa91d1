use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let app = parlour::default();
    app.run();

    Ok(())
}
