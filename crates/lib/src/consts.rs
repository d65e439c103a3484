/// Name of the game the editor produces artifacts for.
pub const PRODUCT_NAME: &str = "ToySoldiers";

/// Unity editor version every lookup-table path is pinned to.
pub const EDITOR_VERSION: &str = "6000.2.7f2";

/// Static method the editor runs once the project is loaded.
pub const BUILD_ENTRY_POINT: &str = "RIGPR.Editor.BuildManager.BuildProject";

/// Version file, relative to the project root.
pub const VERSION_FILE: &str = "version.txt";

/// Directory, relative to the project root, that default output paths live under.
pub const BUILDS_DIR: &str = "Builds";

/// Build number used when CI does not supply one.
pub const DEFAULT_BUILD_NUMBER: &str = "0";

/// Environment variable that can stand in for `--unity-path`.
pub const UNITY_PATH_ENV: &str = "TOYBUILD_UNITY_PATH";
