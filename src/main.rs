use clap::Parser;
use layerextent::utils::logger;
use layerextent::{Args, Config, ExtentTool};

fn main() -> anyhow::Result<()> {
    logger::init();
    let config = Config::try_from(Args::parse())?;
    let tool = ExtentTool::new(config)?;
    tool.start()?;
    Ok(())
}
