//! `oxl describe` command

use anyhow::Result;

use online_xboxlive::plugin::{EditorPlugin, XboxLivePlugin};

use crate::cli::DescribeArgs;

pub fn execute(args: DescribeArgs) -> Result<()> {
    let plugin = XboxLivePlugin::new();
    let desc = plugin.description();

    if args.json {
        println!("{}", serde_json::to_string_pretty(desc)?);
        return Ok(());
    }

    println!("{} ({})", desc.name, desc.version);
    println!("  Category:   {}", desc.category);
    println!("  Author:     {}", desc.author);
    println!("  Repository: {}", desc.repository_url);
    println!();
    println!("  {}", desc.description);

    Ok(())
}
