//! `oxl targets` command

use anyhow::Result;

use online_xboxlive::TargetSpec;

use crate::cli::TargetsArgs;

pub fn execute(args: TargetsArgs) -> Result<()> {
    let spec = match &args.path {
        Some(path) => TargetSpec::load(path)?,
        None => TargetSpec::xbox_live(),
    };

    println!("Target `{}`:", spec.name);

    println!("  Platforms:");
    for platform in &spec.platforms {
        println!("    {}", platform);
    }

    println!("  Modules:");
    for module in &spec.modules {
        println!("    {}", module);
    }

    Ok(())
}
