use std::path::{Path, PathBuf};

/// Expected `gradle.properties` pin for the target Minecraft release.
pub const MINECRAFT_VERSION_LINE: &str = "minecraft_version=1.21.1";

/// Key that must be present for the Fabric loader version.
pub const LOADER_VERSION_KEY: &str = "loader_version=";

/// Expected mod id field inside `fabric.mod.json`.
pub const MOD_ID_FIELD: &str = r#""id": "mega-xp-storage""#;

/// Expected Minecraft dependency range inside `fabric.mod.json`.
pub const MINECRAFT_DEP_FIELD: &str = r#""minecraft": "~1.21.1""#;

/// Constructor removed in 1.21.x; any source file still calling it is broken.
pub const OLD_IDENTIFIER_CALL: &str = "new Identifier(";

/// Expected mixin package field inside the mixins config.
pub const MIXIN_PACKAGE_FIELD: &str = r#""package": "com.carte.megaxpstorage.mixin""#;

/// Username passed to `runClient` for test launches.
pub const TEST_USERNAME: &str = "MegaXPTester";

/// Remote that deploys push to.
pub const GIT_REMOTE: &str = "origin";

const LOG_FILE_NAME: &str = "fabricator.log";

/// The fixed on-disk layout of the mega-xp-storage project.
///
/// Every path the pipeline touches is derived from the project root here,
/// so stages and tests never hardcode relative paths themselves.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn gradle_properties(&self) -> PathBuf {
        self.root.join("gradle.properties")
    }

    pub fn fabric_mod_json(&self) -> PathBuf {
        self.root.join("src/main/resources/fabric.mod.json")
    }

    pub fn mixins_config(&self) -> PathBuf {
        self.root.join("src/main/resources/mega-xp-storage.mixins.json")
    }

    pub fn mixin_entry_class(&self) -> PathBuf {
        self.root
            .join("src/main/java/com/carte/megaxpstorage/mixin/PlayerEntityMixin.java")
    }

    pub fn java_source_root(&self) -> PathBuf {
        self.root.join("src")
    }

    /// Platform-dependent Gradle wrapper path at the project root.
    pub fn gradle_wrapper(&self) -> PathBuf {
        let name = if cfg!(windows) { "gradlew.bat" } else { "gradlew" };
        self.root.join(name)
    }

    /// Project-local Gradle home, isolated from the shared global cache.
    pub fn gradle_user_home(&self) -> PathBuf {
        self.root.join(".gradle-user-home")
    }

    pub fn libs_dir(&self) -> PathBuf {
        self.root.join("build/libs")
    }

    pub fn git_dir(&self) -> PathBuf {
        self.root.join(".git")
    }

    pub fn log_file(&self) -> PathBuf {
        self.root.join(LOG_FILE_NAME)
    }
}
