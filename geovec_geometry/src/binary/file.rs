use super::{decode_binary, encode_binary};
use crate::VectorCollection;
use anyhow::{Context, Result};
use geovec_core::{ErrorKind, KindContext};
use std::{fs, io::Write, path::Path};

/// Encodes the collection and writes it to `writer`.
pub fn write_binary(collection: &VectorCollection, mut writer: impl Write) -> Result<()> {
	let data = encode_binary(collection)?;
	writer
		.write_all(&data)
		.and_then(|()| writer.flush())
		.kind_context(ErrorKind::Io, || String::from("failed to write binary data"))
}

/// Saves the collection to `path`, replacing an existing file.
pub fn save_binary(collection: &VectorCollection, path: &Path) -> Result<()> {
	let data = encode_binary(collection)?;
	log::debug!("saving {} shapes to '{}'", collection.len(), path.display());
	fs::write(path, data).kind_context(ErrorKind::Io, || format!("failed to write '{}'", path.display()))
}

/// Loads a collection saved with [`save_binary`].
pub fn load_binary(path: &Path) -> Result<VectorCollection> {
	log::debug!("loading '{}'", path.display());
	let data = fs::read(path).kind_context(ErrorKind::Io, || format!("failed to read '{}'", path.display()))?;
	decode_binary(&data).with_context(|| format!("while loading '{}'", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeometryTrait, MAGIC};
	use assert_fs::{TempDir, prelude::*};
	use geovec_core::error_kind;
	use pretty_assertions::assert_eq;

	fn example() -> VectorCollection {
		let mut collection = VectorCollection::new();
		collection.add_point([13.4, 52.5]);
		collection.add_areal([[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]).unwrap();
		collection.attributes_mut().unwrap().insert("name", "Berlin");
		collection
	}

	#[test]
	fn save_and_load() -> Result<()> {
		let dir = TempDir::new()?;
		let path = dir.child("shapes.gvec");
		save_binary(&example(), path.path())?;
		assert!(path.path().is_file());

		let loaded = load_binary(path.path())?;
		assert_eq!(loaded, example());
		assert!(loaded.verify().is_ok());
		assert_eq!(loaded.shapes()[1].geometry().area(), 1.0);
		Ok(())
	}

	#[test]
	fn write_to_writer() -> Result<()> {
		let mut buffer = Vec::new();
		write_binary(&example(), &mut buffer)?;
		assert_eq!(&buffer[..4], MAGIC);
		assert_eq!(buffer, encode_binary(&example())?);
		Ok(())
	}

	#[test]
	fn load_missing_file() {
		let err = load_binary(Path::new("/definitely/not/here.gvec")).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::Io));
	}

	#[test]
	fn load_truncated_file() -> Result<()> {
		let dir = TempDir::new()?;
		let file = dir.child("broken.gvec");
		let data = encode_binary(&example())?;
		file.write_binary(&data[..data.len() - 3])?;

		let err = load_binary(file.path()).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::CorruptData));
		assert!(err.to_string().starts_with("while loading '"));
		Ok(())
	}

	#[test]
	fn save_into_missing_directory() {
		let err = save_binary(&example(), Path::new("/definitely/not/here.gvec")).unwrap_err();
		assert_eq!(error_kind(&err), Some(ErrorKind::Io));
	}
}
