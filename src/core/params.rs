use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::io::writers::raster::output_format;
use crate::types::{DEFAULT_SIZES, TargetSize};

pub const DEFAULT_INPUT: &str = "icon512.png";
pub const DEFAULT_PREFIX: &str = "icon";

/// One resized copy: its exact dimensions and where it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub size: TargetSize,
    pub path: PathBuf,
}

/// Resize plan suitable for config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSetParams {
    pub input: PathBuf,
    pub outputs: Vec<OutputSpec>,
}

impl Default for IconSetParams {
    fn default() -> Self {
        Self::from_layout(DEFAULT_INPUT, "", DEFAULT_PREFIX, &DEFAULT_SIZES)
    }
}

impl IconSetParams {
    /// Builds a plan writing `{prefix}{W}.png` (or `{prefix}{W}x{H}.png` for
    /// non-square sizes) into `output_dir`.
    pub fn from_layout(
        input: impl Into<PathBuf>,
        output_dir: impl AsRef<Path>,
        prefix: &str,
        sizes: &[TargetSize],
    ) -> Self {
        let output_dir = output_dir.as_ref();
        let outputs = sizes
            .iter()
            .map(|&size| OutputSpec {
                size,
                path: output_dir.join(output_file_name(prefix, size)),
            })
            .collect();
        Self {
            input: input.into(),
            outputs,
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Checks everything that can be checked without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.outputs.is_empty() {
            return Err(Error::EmptyPlan);
        }
        for spec in &self.outputs {
            // Deserialized sizes bypass TargetSize::new
            TargetSize::new(spec.size.width, spec.size.height)?;
            output_format(&spec.path)?;
        }
        Ok(())
    }
}

fn output_file_name(prefix: &str, size: TargetSize) -> String {
    if size.is_square() {
        format!("{}{}.png", prefix, size.width)
    } else {
        format!("{}{}x{}.png", prefix, size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_is_the_fixed_icon_set() {
        let params = IconSetParams::default();
        assert_eq!(params.input, PathBuf::from("icon512.png"));
        let paths: Vec<_> = params.outputs.iter().map(|o| o.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("icon16.png"),
                PathBuf::from("icon48.png"),
                PathBuf::from("icon128.png"),
            ]
        );
        assert_eq!(params.outputs[2].size, TargetSize::square(128).unwrap());
        params.validate().unwrap();
    }

    #[test]
    fn layout_names_non_square_outputs() {
        let sizes = [TargetSize::new(32, 24).unwrap()];
        let params = IconSetParams::from_layout("logo.png", "out", "logo", &sizes);
        assert_eq!(params.outputs[0].path, Path::new("out").join("logo32x24.png"));
    }

    #[test]
    fn rejects_empty_plan_and_unknown_extension() {
        let empty = IconSetParams::from_layout("a.png", "", "icon", &[]);
        assert!(matches!(empty.validate(), Err(Error::EmptyPlan)));

        let mut params = IconSetParams::default();
        params.outputs[1].path = PathBuf::from("icon48.notaformat");
        assert!(matches!(params.validate(), Err(Error::Image(_))));
    }

    #[test]
    fn parses_json_plan_and_checks_sizes() {
        let json = r#"{
            "input": "src.png",
            "outputs": [
                { "size": { "width": 24, "height": 24 }, "path": "a.png" },
                { "size": { "width": 0, "height": 8 }, "path": "b.png" }
            ]
        }"#;
        let params = IconSetParams::from_json(json).unwrap();
        assert_eq!(params.input, PathBuf::from("src.png"));
        assert!(matches!(params.validate(), Err(Error::ZeroSize { width: 0, height: 8 })));

        assert!(matches!(IconSetParams::from_json("{"), Err(Error::Config(_))));
    }
}
