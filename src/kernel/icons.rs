//! File icon lookup.
//!
//! A file name resolves in priority order: special file name (exact,
//! case-insensitive), then extension (from the last `.`, inclusive,
//! case-insensitive), then [`IconId::FILE`]. The tables are built on first use
//! and never change afterwards.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Icon family handle. The family name is also the asset directory name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconId(&'static str);

impl IconId {
    pub const FILE: IconId = IconId("file");
    pub const FOLDER: IconId = IconId("folder");

    pub fn family(self) -> &'static str {
        self.0
    }

    pub fn is_default(self) -> bool {
        self == Self::FILE
    }
}

impl std::fmt::Display for IconId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

const SPECIAL_NAMES: &[(&str, &str)] = &[
    ("dockerfile", "docker"),
    ("containerfile", "docker"),
    (".dockerignore", "docker"),
    ("docker-compose.yml", "docker"),
    ("docker-compose.yaml", "docker"),
    (".gitignore", "git"),
    (".gitattributes", "git"),
    (".gitmodules", "git"),
    ("package.json", "npm"),
    ("package-lock.json", "npm"),
    ("go.mod", "go"),
    ("go.sum", "go"),
    ("cargo.toml", "rust"),
    ("cargo.lock", "rust"),
    ("readme.md", "readme"),
    ("license", "license"),
    ("makefile", "makefile"),
    ("cmakelists.txt", "cmake"),
    ("build.gradle", "gradle"),
    ("build.gradle.kts", "gradle"),
    ("settings.gradle", "gradle"),
    ("pom.xml", "maven"),
    ("tsconfig.json", "typescript"),
    ("webpack.config.js", "webpack"),
    ("vite.config.js", "vitejs"),
    ("vite.config.ts", "vitejs"),
    ("requirements.txt", "python"),
    ("pyproject.toml", "python"),
    ("gemfile", "ruby"),
    (".eslintrc", "eslint"),
    (".eslintrc.json", "eslint"),
    (".prettierrc", "prettier"),
    (".babelrc", "babel"),
];

const EXTENSIONS: &[(&str, &str)] = &[
    (".go", "go"),
    (".py", "python"),
    (".js", "javascript"),
    (".mjs", "javascript"),
    (".cjs", "javascript"),
    (".ts", "typescript"),
    (".jsx", "react"),
    (".tsx", "react"),
    (".html", "html5"),
    (".htm", "html5"),
    (".css", "css3"),
    (".scss", "sass"),
    (".json", "json"),
    (".xml", "xml"),
    (".yaml", "yaml"),
    (".yml", "yaml"),
    (".toml", "toml"),
    (".md", "markdown"),
    (".java", "java"),
    (".c", "c"),
    (".h", "c"),
    (".cpp", "cplusplus"),
    (".cc", "cplusplus"),
    (".hpp", "cplusplus"),
    (".cs", "csharp"),
    (".sh", "bash"),
    (".rb", "ruby"),
    (".rs", "rust"),
    (".kt", "kotlin"),
    (".lua", "lua"),
    (".php", "php"),
    (".swift", "swift"),
    (".dockerfile", "docker"),
    (".svelte", "svelte"),
    (".vue", "vuejs"),
    (".dart", "flutter"),
    (".gradle", "gradle"),
];

pub struct IconTable {
    by_name: FxHashMap<&'static str, IconId>,
    by_ext: FxHashMap<&'static str, IconId>,
}

impl IconTable {
    fn build() -> Self {
        tracing::debug!(
            names = SPECIAL_NAMES.len(),
            extensions = EXTENSIONS.len(),
            "icon table built"
        );
        Self {
            by_name: SPECIAL_NAMES
                .iter()
                .map(|&(key, family)| (key, IconId(family)))
                .collect(),
            by_ext: EXTENSIONS
                .iter()
                .map(|&(key, family)| (key, IconId(family)))
                .collect(),
        }
    }

    pub fn by_name(&self, lower_name: &str) -> Option<IconId> {
        self.by_name.get(lower_name).copied()
    }

    pub fn by_extension(&self, lower_ext: &str) -> Option<IconId> {
        self.by_ext.get(lower_ext).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len() + self.by_ext.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static TABLE: Lazy<IconTable> = Lazy::new(IconTable::build);

pub fn table() -> &'static IconTable {
    &TABLE
}

/// Icon for a path or bare file name. Never fails.
pub fn resolve(path: impl AsRef<Path>) -> IconId {
    match path.as_ref().file_name() {
        Some(name) => resolve_name(&name.to_string_lossy()),
        None => IconId::FILE,
    }
}

/// Icon for a base file name (no directory part).
pub fn resolve_name(name: &str) -> IconId {
    let lower = name.to_lowercase();
    let table = table();

    if let Some(icon) = table.by_name(&lower) {
        return icon;
    }

    extension(&lower)
        .and_then(|ext| table.by_extension(ext))
        .unwrap_or(IconId::FILE)
}

/// Suffix from the last `.` inclusive, or `None` when there is no dot.
pub fn extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|idx| &name[idx..])
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/icons.rs"]
mod tests;
