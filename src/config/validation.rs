// src/config/validation.rs

use super::ConfigBuilder;
use crate::errors::ConfigError;

/// Validates combinations of options that clap cannot easily express.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<(), ConfigError> {
    if let (Some(input), Some(output)) = (&builder.changed_files, &builder.output_file) {
        if input != "-" && input == output {
            return Err(ConfigError::Conflict {
                option1: "--changed-files".to_string(),
                option2: "--output-file".to_string(),
                reason: "the report would overwrite its own input".to_string(),
            });
        }
    }

    // Add other cross-argument validations here if needed

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_input_and_output_conflict() {
        let builder = ConfigBuilder::new()
            .changed_files("files.json")
            .output_file("files.json");
        let result = validate_builder_options(&builder);
        assert!(matches!(result, Err(ConfigError::Conflict { .. })));
    }

    #[test]
    fn test_valid_options_pass() {
        let builder = ConfigBuilder::new()
            .changed_files("files.json")
            .output_file("report.json");
        assert!(validate_builder_options(&builder).is_ok());

        let builder = ConfigBuilder::new().changed_files("-").output_file("-");
        assert!(validate_builder_options(&builder).is_ok());
    }
}
