//! `oxl linkplan` command

use anyhow::Result;

use online_xboxlive::core::toolchain::{
    toolchain_for, GdkToolchain, GdkToolsetVersion, Toolchain,
};
use online_xboxlive::graph;
use online_xboxlive::module::ModuleSet;
use online_xboxlive::util::diagnostic;
use online_xboxlive::{TargetSpec, XboxLiveModule};

use crate::cli::LinkplanArgs;

pub fn execute(args: LinkplanArgs, color: bool) -> Result<()> {
    let mut spec = match &args.spec {
        Some(path) => TargetSpec::load(path)?,
        None => TargetSpec::xbox_live(),
    };

    if let Some(platform) = args.platform {
        spec.platforms = vec![platform];
    }

    let toolset = match args.toolset {
        Some(raw) => Some(GdkToolsetVersion::from_int(raw).ok_or_else(|| {
            anyhow::anyhow!(
                "unsupported GDK toolset version `{}`\n\
                 help: supported versions are 141, 142 and 143",
                raw
            )
        })?),
        None => None,
    };

    let mut modules = ModuleSet::new();
    modules.add(Box::new(XboxLiveModule::new()));

    let resolve = |platform| match (toolchain_for(platform), toolset) {
        (Toolchain::GdkDevKit(_), Some(ver)) => Toolchain::GdkDevKit(GdkToolchain::new(ver)),
        (toolchain, _) => toolchain,
    };

    let plans = match graph::construct_with(&spec, &modules, resolve) {
        Ok(plans) => plans,
        Err(err) => {
            diagnostic::emit(&err.to_diagnostic(), color);
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    println!("Link plan for `{}`:", spec.name);

    for plan in &plans {
        println!();
        println!("{} ({}):", plan.platform, plan.toolchain);

        if plan.libraries.is_empty() {
            println!("  (no native libraries)");
        } else {
            for (i, library) in plan.libraries.iter().enumerate() {
                println!("  {}. {}", i + 1, library);
            }
        }

        println!("  Public dependencies: {}", plan.public_dependencies.join(", "));
    }

    Ok(())
}
