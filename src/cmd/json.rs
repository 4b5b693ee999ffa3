// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `read-json` command.

use anyhow::Context;

use crate::cli::install::ReadJsonArgs;
use crate::error::Result;
use crate::json::get_json_object_from_file;

/// Read the file named in `args` and print the decoded document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn run_read_json_command(args: &ReadJsonArgs) -> Result<()> {
    println!("{}", render_json_file(args)?);
    Ok(())
}

fn render_json_file(args: &ReadJsonArgs) -> Result<String> {
    let value = get_json_object_from_file(&args.path)?;
    let rendered = if args.compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    };
    rendered.context("failed to render json")
}

#[cfg(test)]
mod tests {
    use super::render_json_file;
    use crate::cli::install::ReadJsonArgs;
    use crate::error::JsonFileError;

    #[test]
    fn test_render_compact_and_pretty() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("vulkan.json");
        std::fs::write(&path, "{ \"api\" : [1, 3] }").unwrap();

        let compact = render_json_file(&ReadJsonArgs {
            path: path.clone(),
            compact: true,
        })
        .unwrap();
        insta::assert_snapshot!(compact, @r#"{"api":[1,3]}"#);

        let pretty = render_json_file(&ReadJsonArgs {
            path,
            compact: false,
        })
        .unwrap();
        insta::assert_snapshot!(pretty, @r#"
        {
          "api": [
            1,
            3
          ]
        }
        "#);
    }

    #[test]
    fn test_render_missing_file_keeps_error_type() {
        let temp = tempfile::tempdir().unwrap();
        let err = render_json_file(&ReadJsonArgs {
            path: temp.path().join("nope.json"),
            compact: true,
        })
        .unwrap_err();
        let json_err = err.downcast_ref::<JsonFileError>().expect("expected JsonFileError");
        assert!(json_err.is_not_found());
    }
}
