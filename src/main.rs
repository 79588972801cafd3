use std::io;
use std::path::{Path, PathBuf};

use aether::app::{HeadlessHost, Shell};
use aether::kernel::services::adapters::{load_settings, LocalFileProvider};
use aether::kernel::Action;

mod logging;

#[derive(Debug)]
struct Startup {
    root: PathBuf,
    open_file: Option<PathBuf>,
}

/// Folder to open and optional file to load for the command-line path.
/// Both come back canonicalized. A file inside `cwd` opens `cwd`; any other
/// file opens its parent.
fn resolve_startup_paths(cwd: &Path, arg: Option<&str>) -> io::Result<Startup> {
    let target = match arg {
        Some(raw) => cwd.join(raw),
        None => cwd.to_path_buf(),
    }
    .canonicalize()?;

    if target.is_dir() {
        return Ok(Startup {
            root: target,
            open_file: None,
        });
    }

    let cwd = cwd.canonicalize()?;
    let root = if target.starts_with(&cwd) {
        cwd
    } else {
        match target.parent() {
            Some(parent) => parent.to_path_buf(),
            None => cwd,
        }
    };
    Ok(Startup {
        root,
        open_file: Some(target),
    })
}

fn main() -> io::Result<()> {
    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    let cwd = std::env::current_dir()?;
    let arg = std::env::args().nth(1);
    let startup = resolve_startup_paths(&cwd, arg.as_deref())?;

    let settings = load_settings();
    let mut shell = Shell::new(
        &settings,
        Box::new(LocalFileProvider::new()),
        HeadlessHost::default(),
    );

    shell.dispatch(Action::FolderChosen(startup.root));
    if let Some(file) = startup.open_file {
        shell.dispatch(Action::FileChosen(file));
    }
    shell.dispatch(Action::ExpandAll);

    println!("{}", shell.title());
    for row in shell.rows() {
        let marker = if row.is_branch { "/" } else { "" };
        println!(
            "{:indent$}[{}] {}{}",
            "",
            row.icon.family(),
            row.label,
            marker,
            indent = row.depth * 2
        );
    }
    if !shell.state().document.text.is_empty() {
        println!("--- {} ---", shell.file_label());
        println!("{}", shell.state().document.text);
    }

    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/cli_startup_paths.rs"]
mod tests;
