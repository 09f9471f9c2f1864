//! Xbox Live online platform module.
//!
//! Every platform gets the generic online services dependency. GDK dev-kit
//! builds additionally link the vendor libraries the Xbox Live client needs,
//! with the libHttpClient file name keyed on the kit's services toolset
//! version.

use tracing::debug;

use crate::core::options::BuildOptions;
use crate::core::toolchain::Toolchain;

use super::{BuildModule, ConfigError};

/// Build module for the Xbox Live online platform.
#[derive(Debug, Default)]
pub struct XboxLiveModule;

impl XboxLiveModule {
    /// Create the module.
    pub fn new() -> Self {
        XboxLiveModule
    }
}

impl BuildModule for XboxLiveModule {
    fn name(&self) -> &str {
        "OnlinePlatformXboxLive"
    }

    fn setup(&self, options: &mut BuildOptions) -> Result<(), ConfigError> {
        options.add_public_dependency("Online");

        match options.toolchain {
            Toolchain::GdkDevKit(gdk) => {
                let toolset = gdk.toolset_ver.ok_or(ConfigError::MissingToolsetVersion {
                    platform: options.platform,
                })?;

                // libHttpClient ships one binary per toolset. XCurl and
                // Crypt32 must follow it in link order.
                options.add_library(format!("libHttpClient.{}.GDK.C.lib", toolset.as_int()));
                options.add_library("XCurl.lib");
                options.add_library("Crypt32.lib");
            }
            Toolchain::Msvc | Toolchain::Gnu(_) => {
                debug!(
                    "no native libraries for `{}` with {} toolchain",
                    self.name(),
                    options.toolchain.name()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::platform::TargetPlatform;
    use crate::core::toolchain::{
        toolchain_for, CompilerFamily, GdkToolchain, GdkToolsetVersion,
    };

    fn gdk_options(toolset_ver: GdkToolsetVersion) -> BuildOptions {
        BuildOptions::new(
            TargetPlatform::XboxOne,
            Toolchain::GdkDevKit(GdkToolchain::new(toolset_ver)),
        )
    }

    #[test]
    fn test_setup_always_depends_on_online() {
        let module = XboxLiveModule::new();

        for platform in [
            TargetPlatform::XboxOne,
            TargetPlatform::Windows,
            TargetPlatform::Linux,
        ] {
            let mut options = BuildOptions::new(platform, toolchain_for(platform));
            module.setup(&mut options).unwrap();
            assert_eq!(options.public_dependencies, vec!["Online"]);
        }
    }

    #[test]
    fn test_setup_gdk_links_vendor_libraries_in_order() {
        let module = XboxLiveModule::new();
        let mut options = gdk_options(GdkToolsetVersion::V142);

        module.setup(&mut options).unwrap();

        assert_eq!(
            options.libraries,
            vec!["libHttpClient.142.GDK.C.lib", "XCurl.lib", "Crypt32.lib"]
        );
    }

    #[test]
    fn test_setup_toolset_version_flows_into_file_name() {
        let module = XboxLiveModule::new();
        let mut options = gdk_options(GdkToolsetVersion::V143);

        module.setup(&mut options).unwrap();

        assert_eq!(options.libraries[0], "libHttpClient.143.GDK.C.lib");
    }

    #[test]
    fn test_setup_msvc_contributes_no_libraries() {
        let module = XboxLiveModule::new();
        let mut options = BuildOptions::new(TargetPlatform::Windows, Toolchain::Msvc);

        module.setup(&mut options).unwrap();

        assert_eq!(options.public_dependencies, vec!["Online"]);
        assert!(options.libraries.is_empty());
    }

    #[test]
    fn test_setup_gnu_contributes_no_libraries() {
        let module = XboxLiveModule::new();
        let mut options = BuildOptions::new(
            TargetPlatform::Linux,
            Toolchain::Gnu(CompilerFamily::Gcc),
        );

        module.setup(&mut options).unwrap();

        assert_eq!(options.public_dependencies, vec!["Online"]);
        assert!(options.libraries.is_empty());
    }

    #[test]
    fn test_setup_twice_duplicates_entries() {
        // Callers invoke setup at most once per pass. Running it again on
        // the same options appends a second copy of everything.
        let module = XboxLiveModule::new();
        let mut options = gdk_options(GdkToolsetVersion::V142);

        module.setup(&mut options).unwrap();
        module.setup(&mut options).unwrap();

        assert_eq!(options.public_dependencies, vec!["Online", "Online"]);
        assert_eq!(
            options.libraries,
            vec![
                "libHttpClient.142.GDK.C.lib",
                "XCurl.lib",
                "Crypt32.lib",
                "libHttpClient.142.GDK.C.lib",
                "XCurl.lib",
                "Crypt32.lib",
            ]
        );
    }

    #[test]
    fn test_setup_fails_when_gdk_declares_no_toolset() {
        let module = XboxLiveModule::new();
        let mut options = BuildOptions::new(
            TargetPlatform::XboxScarlett,
            Toolchain::GdkDevKit(GdkToolchain { toolset_ver: None }),
        );

        let err = module.setup(&mut options).unwrap_err();

        assert_eq!(
            err,
            ConfigError::MissingToolsetVersion {
                platform: TargetPlatform::XboxScarlett
            }
        );
        assert!(options.libraries.is_empty());
    }
}
