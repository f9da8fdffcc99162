//! Writing UPA structures to disk
//!
//! Everything is serialized in memory before the first file is touched, and
//! each file goes through a temporary sibling plus rename, so an output file
//! is either complete or not there.

use crate::error::{ConverterError, Result};
use crate::types::ConverterConfig;
use serde::Serialize;
use sp1_upa_core::{ProofBundle, VerifyingKey};
use std::fs;
use std::path::{Path, PathBuf};

/// Pretty JSON (2-space indent) with a trailing newline
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Write the verifying key and the bundle. Returns `(vk_path, bundle_path)`.
pub fn write_outputs(
    config: &ConverterConfig,
    vk: &VerifyingKey,
    bundle: &ProofBundle,
) -> Result<(PathBuf, PathBuf)> {
    let vk_json = to_pretty_json(vk)?;
    let bundle_json = to_pretty_json(bundle)?;

    create_output_dir(&config.output_dir)?;

    let vk_path = config.vk_path();
    let bundle_path = config.bundle_path();
    write_file(&vk_path, &vk_json)?;
    write_file(&bundle_path, &bundle_json)?;

    Ok((vk_path, bundle_path))
}

/// Write only the verifying key
pub fn write_verifying_key(config: &ConverterConfig, vk: &VerifyingKey) -> Result<PathBuf> {
    let vk_json = to_pretty_json(vk)?;
    create_output_dir(&config.output_dir)?;
    let vk_path = config.vk_path();
    write_file(&vk_path, &vk_json)?;
    Ok(vk_path)
}

fn create_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| ConverterError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tmp = path.with_file_name(format!(".{file_name}.tmp"));

    let result = fs::write(&tmp, contents).and_then(|_| fs::rename(&tmp, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(ConverterError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    log::debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
