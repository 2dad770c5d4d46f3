//! Rendering tables to files.
//!
//! Tables are rendered in memory first, in parallel, and only written once
//! every render has succeeded, so a failing grammar never leaves a partial
//! set of files behind.

use std::fs;

use camino::Utf8PathBuf;
use color_eyre::eyre::{bail, eyre};
use enums_core::{EnumTable, FxHashSet, GenerateConfig};
use enums_grammar::{GrammarError, Lang};
use enums_render::renderer_for;
use rayon::prelude::*;
use tracing::{debug, info};

/// A rendered table and the file it belongs in.
#[derive(Debug)]
pub(crate) struct RenderedFile {
    /// Destination path.
    pub(crate) path: Utf8PathBuf,
    /// Generated type name.
    pub(crate) type_name: String,
    /// Number of constants.
    pub(crate) constants: usize,
    /// Generated source.
    pub(crate) contents: String,
}

/// Resolves language names to grammars. No names selects every grammar.
pub(crate) fn resolve_languages(names: &[String]) -> Result<Vec<Lang>, GrammarError> {
    if names.is_empty() {
        return Ok(Lang::ALL.to_vec());
    }
    let mut langs = Vec::with_capacity(names.len());
    for name in names {
        let lang: Lang = name.parse()?;
        if !langs.contains(&lang) {
            langs.push(lang);
        }
    }
    Ok(langs)
}

/// Renders one table according to `config`.
pub(crate) fn render_table(
    table: &EnumTable,
    config: &GenerateConfig,
) -> color_eyre::Result<RenderedFile> {
    let renderer = renderer_for(config.target);
    let contents = renderer.render(table)?;
    let file_name = format!(
        "{}.{}",
        table.container().file_stem(&config.file_template),
        renderer.extension()
    );
    debug!(type_name = table.type_name(), file = %file_name, "Rendered table");

    Ok(RenderedFile {
        path: config.output_dir.join(file_name),
        type_name: table.type_name().to_owned(),
        constants: table.len(),
        contents,
    })
}

/// Builds and renders the tables of `langs` in parallel.
///
/// # Errors
///
/// Returns an error if the file template would send several grammars to the
/// same file, or if any table fails to build or render.
pub(crate) fn render_languages(
    langs: &[Lang],
    config: &GenerateConfig,
) -> color_eyre::Result<Vec<RenderedFile>> {
    if langs.len() > 1 && !config.template_is_per_container() {
        bail!(
            "file template '{}' has no '$' but {} languages were selected",
            config.file_template,
            langs.len()
        );
    }

    info!(count = langs.len(), target = config.target.label(), "Rendering grammars");
    langs
        .par_iter()
        .map(|lang| {
            let table = lang.table(&config.type_prefix)?;
            render_table(&table, config)
        })
        .collect()
}

/// Writes rendered files, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if two files share a path or any write fails.
pub(crate) fn write_files(files: &[RenderedFile]) -> color_eyre::Result<()> {
    let mut paths = FxHashSet::default();
    for file in files {
        if !paths.insert(file.path.as_path()) {
            bail!("more than one table would be written to {}", file.path);
        }
    }

    for file in files {
        if let Some(parent) = file.path.parent().filter(|p| !p.as_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| eyre!("failed to create directory {parent}: {e}"))?;
        }
        fs::write(&file.path, &file.contents)
            .map_err(|e| eyre!("failed to write {}: {e}", file.path))?;
        info!(
            path = %file.path,
            type_name = %file.type_name,
            constants = file.constants,
            "Wrote file"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use camino::Utf8Path;
    use enums_core::{ContainerName, NameRecord, Target};

    use super::*;

    fn config_in(dir: &Utf8Path, target: Target) -> GenerateConfig {
        GenerateConfig {
            output_dir: dir.to_owned(),
            target,
            ..GenerateConfig::default()
        }
    }

    #[test]
    fn test_resolve_languages() {
        assert_eq!(resolve_languages(&[]).unwrap(), Lang::ALL.to_vec());
        let names = vec!["tsx".to_owned(), "TSX".to_owned(), "typescript".to_owned()];
        assert_eq!(
            resolve_languages(&names).unwrap(),
            vec![Lang::Tsx, Lang::TypeScript]
        );
        assert!(resolve_languages(&["cobol".to_owned()]).is_err());
    }

    #[test]
    fn test_render_table_names_file_from_template() {
        let table = EnumTable::new(
            ContainerName::new("Foo").unwrap(),
            vec![NameRecord::new("Identifier", "identifier", "id")],
        )
        .unwrap();
        let config = GenerateConfig {
            file_template: "kinds_$".to_owned(),
            ..config_in(Utf8Path::new("out"), Target::Rust)
        };
        let file = render_table(&table, &config).unwrap();
        assert_eq!(file.path, Utf8PathBuf::from("out/kinds_foo.rs"));
        assert_eq!(file.type_name, "SyntaxTypeFoo");
        assert_eq!(file.constants, 1);
    }

    #[test]
    fn test_generate_all_languages_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap().join("gen");
        let config = config_in(&root, Target::Go);

        let files = render_languages(&Lang::ALL, &config).unwrap();
        write_files(&files).unwrap();

        let typescript = fs::read_to_string(root.join("language_typescript.go")).unwrap();
        assert!(typescript.starts_with("// Code generated; DO NOT EDIT.\n\npackage typescript\n"));
        assert!(typescript.contains("type SyntaxTypeTypescript int16"));
        let tsx = fs::read_to_string(root.join("language_tsx.go")).unwrap();
        assert!(tsx.contains("func FromString(str string) SyntaxTypeTsx {"));
    }

    #[test]
    fn test_template_without_marker_rejected_for_many_languages() {
        let config = GenerateConfig {
            file_template: "kinds".to_owned(),
            ..GenerateConfig::default()
        };
        assert!(render_languages(&Lang::ALL, &config).is_err());
        assert!(render_languages(&[Lang::Tsx], &config).is_ok());
    }

    #[test]
    fn test_write_files_rejects_colliding_paths() {
        let file = || RenderedFile {
            path: Utf8PathBuf::from("same.go"),
            type_name: "SyntaxTypeFoo".to_owned(),
            constants: 1,
            contents: String::new(),
        };
        assert!(write_files(&[file(), file()]).is_err());
    }
}
