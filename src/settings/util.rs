use std::env;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use anyhow::{Context, Result};

/// Anchor a relative path at the current working directory.
pub(super) fn absolutize(path: PathBuf) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path);
	}
	let cwd = env::current_dir().context("failed to determine working directory")?;
	Ok(cwd.join(path))
}

/// Render a path for humans, abbreviating the home directory to `~`.
pub(super) fn display_path(path: &Path) -> String {
	if let Some(home) = env::var_os("HOME").map(PathBuf::from)
		&& let Ok(rel) = path.strip_prefix(&home)
	{
		if rel.components().next().is_none() {
			return "~".to_string();
		}
		return format!("~{MAIN_SEPARATOR}{}", rel.display());
	}
	path.display().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn absolute_paths_are_untouched() {
		let path = env::temp_dir().join("contacts.json");
		assert_eq!(absolutize(path.clone()).expect("absolute"), path);
	}

	#[test]
	fn relative_paths_are_anchored_at_cwd() {
		let resolved = absolutize(PathBuf::from("contacts.json")).expect("relative");
		assert!(resolved.is_absolute());
		assert!(resolved.ends_with("contacts.json"));
	}

	#[test]
	fn paths_outside_home_are_shown_verbatim() {
		let path = Path::new("/definitely/not/home/contacts.json");
		if env::var_os("HOME").is_some_and(|home| path.starts_with(home)) {
			return;
		}
		assert_eq!(display_path(path), "/definitely/not/home/contacts.json");
	}
}
