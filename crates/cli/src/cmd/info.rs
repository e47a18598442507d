use anyhow::Result;

use pyembed_lib::platform::platform_triple;

use crate::EngineArgs;
use crate::output::print_stat;

pub fn cmd_info(args: &EngineArgs) -> Result<()> {
  let config = super::load_config(args)?;

  println!("System:");
  match platform_triple() {
    Some(triple) => print_stat("Platform", &triple),
    None => print_stat("Platform", "could not detect platform"),
  }
  print_stat("Supported target", &config.platform.supported.triple());
  Ok(())
}
