use std::{
    env,
    fs::{create_dir_all, File},
    io,
    path::{Component, Path, PathBuf},
};

use tracing::debug;

use crate::errors::CdaacErr;

/// Extract the tar archive at `archive_path` into `destination`.
///
/// Every member is checked before anything is written. If a single member would resolve to a path
/// outside of `destination`, or is a symbolic or hard link, the whole archive is rejected and
/// nothing is extracted. Members with `.` or `..` components that stay inside `destination` are
/// written to the path they resolve to.
pub fn safe_extract(archive_path: &Path, destination: &Path) -> Result<(), CdaacErr> {
    let destination = destination.canonicalize()?;

    let mut archive = tar::Archive::new(File::open(archive_path)?);
    let mut num_members = 0;
    for entry in archive.entries()? {
        let entry = entry?;
        let member = entry.path()?.into_owned();

        let entry_type = entry.header().entry_type();
        if entry_type.is_symlink() || entry_type.is_hard_link() {
            return Err(CdaacErr::LinkMember(member));
        }

        if !is_within_directory(&destination, &destination.join(&member)) {
            return Err(CdaacErr::PathTraversal(member));
        }

        num_members += 1;
    }

    // Second pass, every member has been vetted.
    let mut archive = tar::Archive::new(File::open(archive_path)?);
    for entry in archive.entries()? {
        let mut entry = entry?;
        let member = entry.path()?.into_owned();
        let target = normalize(&destination.join(&member));

        // Resolves to the destination itself.
        if target == destination {
            continue;
        }

        if entry.header().entry_type().is_dir() {
            create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                create_dir_all(parent)?;
            }
            entry.unpack(&target)?;
        }
    }

    debug!(
        archive = %archive_path.display(),
        destination = %destination.display(),
        num_members,
        "extracted archive"
    );

    Ok(())
}

/// Check whether `target` is `directory` or somewhere beneath it.
///
/// Both paths are made absolute and any `.` or `..` components are resolved before comparing
/// them component by component. The file system is not consulted beyond finding the current
/// directory for relative paths, so neither path needs to exist.
pub fn is_within_directory(directory: &Path, target: &Path) -> bool {
    match (absolute(directory), absolute(target)) {
        (Ok(directory), Ok(target)) => normalize(&target).starts_with(normalize(&directory)),
        _ => false,
    }
}

fn absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normal = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normal.push(component)
            }
            Component::CurDir => {}
            // Going up from the root stays at the root.
            Component::ParentDir => {
                normal.pop();
            }
        }
    }

    normal
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
