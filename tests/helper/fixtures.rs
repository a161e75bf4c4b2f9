//! Project file fixtures

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use spm_pin_sync::config::SyncConfig;

pub const REFERENCE_ID: &str = "433F87D62788F34500693368";

pub fn package_resolved(version: &str, revision: &str) -> String {
    format!(
        r#"{{
  "originHash" : "5e1ab3f2c1c0c4d1b7d1a6f0f2a9e6a3b8e0c7d2",
  "pins" : [
    {{
      "identity" : "glean-swift",
      "kind" : "remoteSourceControl",
      "location" : "https://github.com/mozilla/glean-swift",
      "state" : {{
        "revision" : "0e8b4c2f6a1d",
        "version" : "v60.1.1"
      }}
    }},
    {{
      "identity" : "rust-components-swift",
      "kind" : "remoteSourceControl",
      "location" : "https://github.com/mozilla/rust-components-swift",
      "state" : {{
        "revision" : "{revision}",
        "version" : "{version}"
      }}
    }}
  ],
  "version" : 3
}}
"#
    )
}

pub fn project_pbxproj(version: &str) -> String {
    format!(
        r#"// !$*UTF8*$!
{{
	archiveVersion = 1;
	classes = {{
	}};
	objectVersion = 55;
	objects = {{

/* Begin XCRemoteSwiftPackageReference section */
		{REFERENCE_ID} /* XCRemoteSwiftPackageReference "rust-components-swift" */ = {{
			isa = XCRemoteSwiftPackageReference;
			repositoryURL = "https://github.com/mozilla/rust-components-swift";
			requirement = {{
				kind = exactVersion;
				version = {version};
			}};
		}};
/* End XCRemoteSwiftPackageReference section */

/* Begin XCSwiftPackageProductDependency section */
		433F87D72788F34500693368 /* MozillaAppServices */ = {{
			isa = XCSwiftPackageProductDependency;
			package = {REFERENCE_ID} /* XCRemoteSwiftPackageReference "rust-components-swift" */;
			productName = MozillaAppServices;
		}};
/* End XCSwiftPackageProductDependency section */
	}};
	rootObject = F84B21B61A090F8100AAB793 /* Project object */;
}}
"#
    )
}

/// Lay out Client.xcodeproj under a temp dir and point a config at it
pub fn create_project(version: &str, revision: &str, min_version: &str) -> (TempDir, SyncConfig) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let config = SyncConfig {
        lock_file: root.join("Client.xcodeproj/project.xcworkspace/xcshareddata/swiftpm/Package.resolved"),
        project_file: root.join("Client.xcodeproj/project.pbxproj"),
        marker_file: root.join("test-fixtures/newest_tag.txt"),
        ..SyncConfig::default()
    };

    write(&config.lock_file, &package_resolved(version, revision));
    write(&config.project_file, &project_pbxproj(min_version));

    (dir, config)
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
