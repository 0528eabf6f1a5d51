pub mod debug;
mod icon;

#[cfg(feature = "render")]
mod canvas;
#[cfg(feature = "render")]
mod generator;

use std::{error::Error, fmt};

pub use self::icon::{IconSpec, Layout, Rect, ICON_SPECS};

#[cfg(feature = "render")]
pub use self::canvas::Canvas;
#[cfg(feature = "render")]
pub use self::generator::{write_summary, Generator, GeneratorBuilder};

pub const BACKGROUND: [u8; 4] = [66, 133, 244, 255];
pub const STROKE: [u8; 4] = [255, 255, 255, 255];

pub const OUTPUT_DIR: &str = "icons";

pub const REBUILD_HINT: &str = "Please rebuild it with: cargo build --features render";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingDependency {
    pub feature: &'static str,
}

impl fmt::Display for MissingDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "image rendering support (feature `{}`) is not compiled in.",
            self.feature
        )
    }
}

impl Error for MissingDependency {}

pub fn require_renderer() -> Result<(), MissingDependency> {
    if cfg!(feature = "render") {
        Ok(())
    } else {
        Err(MissingDependency { feature: "render" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "render")]
    fn renderer_is_available_in_default_build() {
        assert_eq!(require_renderer(), Ok(()));
    }

    #[test]
    #[cfg(not(feature = "render"))]
    fn renderer_is_missing_without_feature() {
        assert_eq!(
            require_renderer(),
            Err(MissingDependency { feature: "render" })
        );
    }

    #[test]
    fn missing_dependency_names_the_feature() {
        let e = MissingDependency { feature: "render" };
        assert!(e.to_string().contains("`render`"));
        assert!(REBUILD_HINT.contains("--features render"));
    }
}
