//! Build pipeline: configuration, token loading, and file emission.
//!
//! A [`BuildConfig`] names the token sources and the files to produce;
//! [`BuildPipeline::build_all`] loads and resolves the tokens, renders
//! each configured file, and writes it under the build path. Index files
//! are generated separately with [`write_index_css`] once the scoped
//! builds have run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::format::{
    css_name, format_custom_media, format_utility_classes, format_variables, CssDeclaration,
    MediaQueryToken, UtilityRule, FILE_HEADER,
};
use crate::resolve::{resolve_all, single_reference};
use crate::token::{Token, TokenSet};

/// Where a batch of token files comes from.
#[derive(Clone, Debug)]
pub enum TokenSource {
    /// A token file compiled into the binary (the base token set).
    Embedded {
        name: &'static str,
        contents: &'static str,
    },
    /// A directory of `.json` token files, searched recursively. A missing
    /// directory contributes no tokens.
    Dir(PathBuf),
}

/// Output format of one configured file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CssFormat {
    /// Custom-property block.
    Variables,
    /// `@custom-media` rules from `breakpoint.*` tokens.
    CustomMediaBreakpoints,
    /// Utility classes from tokens carrying utility metadata.
    UtilityClasses,
}

/// One file the pipeline should emit.
#[derive(Clone, Debug)]
pub struct FileSpec {
    pub format: CssFormat,
    /// Destination relative to the build path, e.g. `core/variables.css`.
    pub destination: PathBuf,
    /// Preserve single-token references as `var(--...)` instead of
    /// inlining the resolved value.
    pub output_references: bool,
}

/// Configuration for one pipeline invocation (core, or one theme).
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Base token sources: resolvable, excluded from output when
    /// `source_tokens_only` is set.
    pub include: Vec<TokenSource>,
    /// Overlay token sources; these shadow base tokens at the same path
    /// and are flagged as source tokens.
    pub source: Vec<TokenSource>,
    /// Emit only overlay tokens; base tokens still resolve references.
    pub source_tokens_only: bool,
    /// Custom-property prefix, e.g. `prism`.
    pub prefix: String,
    /// Directory all destinations are relative to.
    pub build_path: PathBuf,
    /// Theme variant this invocation builds, `None` for core.
    pub theme: Option<String>,
    pub files: Vec<FileSpec>,
}

/// Executes one [`BuildConfig`].
pub struct BuildPipeline {
    config: BuildConfig,
}

impl BuildPipeline {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Loads, resolves, renders, and writes every configured file.
    /// Returns the paths written.
    pub fn build_all(&self) -> Result<Vec<PathBuf>> {
        let mut set = TokenSet::new();
        for source in &self.config.include {
            load_source(source, false, &mut set)?;
        }
        for source in &self.config.source {
            load_source(source, true, &mut set)?;
        }
        tracing::debug!(
            tokens = set.len(),
            theme = self.config.theme.as_deref().unwrap_or("core"),
            "loaded token set"
        );
        let resolved = resolve_all(&set)?;

        let mut written = Vec::with_capacity(self.config.files.len());
        for spec in &self.config.files {
            let contents = self.render(spec, &set, &resolved)?;
            let destination = self.config.build_path.join(&spec.destination);
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&destination, contents)?;
            tracing::info!("wrote {}", destination.display());
            written.push(destination);
        }
        Ok(written)
    }

    fn render(
        &self,
        spec: &FileSpec,
        set: &TokenSet,
        resolved: &std::collections::BTreeMap<String, String>,
    ) -> Result<String> {
        let emitted = || set.iter().filter(|t| self.emits(t));
        match spec.format {
            CssFormat::Variables => {
                let declarations: Vec<CssDeclaration> = emitted()
                    .map(|token| CssDeclaration {
                        name: css_name(&self.config.prefix, &token.path),
                        value: self.emission_value(token, resolved, spec.output_references),
                        comment: token.comment.clone(),
                    })
                    .collect();
                Ok(format_variables(&self.selector(), &declarations))
            }
            CssFormat::CustomMediaBreakpoints => {
                let tokens: Vec<MediaQueryToken> = emitted()
                    .filter(|token| token.path.first().map(String::as_str) == Some("breakpoint"))
                    .map(|token| MediaQueryToken {
                        name: css_name(&self.config.prefix, &token.path),
                        min_width: resolved[&token.key()].clone(),
                        comment: token.comment.clone(),
                    })
                    .collect();
                Ok(format_custom_media(&tokens))
            }
            CssFormat::UtilityClasses => {
                let rules: Vec<UtilityRule> = emitted()
                    .flat_map(|token| {
                        let variable = css_name(&self.config.prefix, &token.path);
                        token.utilities.iter().map(move |utility| UtilityRule {
                            class: utility.class.clone(),
                            property: utility.property.clone(),
                            variable: variable.clone(),
                        })
                    })
                    .collect();
                Ok(format_utility_classes(&rules))
            }
        }
    }

    fn emits(&self, token: &Token) -> bool {
        !self.config.source_tokens_only || token.is_source
    }

    fn emission_value(
        &self,
        token: &Token,
        resolved: &std::collections::BTreeMap<String, String>,
        output_references: bool,
    ) -> String {
        if output_references {
            if let Some(reference) = single_reference(&token.value) {
                let path: Vec<String> = reference.split('.').map(str::to_string).collect();
                return format!("var({})", css_name(&self.config.prefix, &path));
            }
        }
        resolved[&token.key()].clone()
    }

    fn selector(&self) -> String {
        match &self.config.theme {
            Some(theme) => format!("[data-{}-theme=\"{}\"]", self.config.prefix, theme),
            None => ":root".to_string(),
        }
    }
}

fn load_source(source: &TokenSource, is_source: bool, set: &mut TokenSet) -> Result<()> {
    match source {
        TokenSource::Embedded { name, contents } => set.merge_file(name, contents, is_source),
        TokenSource::Dir(dir) => {
            let mut files = Vec::new();
            collect_json_files(dir, &mut files)?;
            for path in files {
                let contents = fs::read_to_string(&path)?;
                set.merge_file(&path.display().to_string(), &contents, is_source)?;
            }
            Ok(())
        }
    }
}

fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    if !dir.is_dir() {
        tracing::debug!("token directory {} not present, skipping", dir.display());
        return Ok(());
    }
    let mut entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.path());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    Ok(())
}

/// Which index file to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexScope {
    /// `core/index.css`, importing the core files.
    Core,
    /// `themes/index.css`, importing every built theme's files.
    Themes,
}

/// Writes an `@import` index for the files already present under the
/// build directory. Returns the path written.
pub fn write_index_css(build_dir: &Path, scope: IndexScope) -> Result<PathBuf> {
    let mut contents = String::from(FILE_HEADER);
    let index_path = match scope {
        IndexScope::Core => {
            let dir = build_dir.join("core");
            fs::create_dir_all(&dir)?;
            for file in css_files(&dir)? {
                contents.push_str(&format!("@import \"{}\";\n", file));
            }
            dir.join("index.css")
        }
        IndexScope::Themes => {
            let dir = build_dir.join("themes");
            fs::create_dir_all(&dir)?;
            let mut themes = fs::read_dir(&dir)?.collect::<io::Result<Vec<_>>>()?;
            themes.sort_by_key(|entry| entry.path());
            for theme in themes {
                if !theme.path().is_dir() {
                    continue;
                }
                let theme_name = theme.file_name().to_string_lossy().into_owned();
                for file in css_files(&theme.path())? {
                    contents.push_str(&format!("@import \"./{}/{}\";\n", theme_name, file));
                }
            }
            dir.join("index.css")
        }
    };
    fs::write(&index_path, contents)?;
    tracing::info!("wrote {}", index_path.display());
    Ok(index_path)
}

/// CSS file names directly inside `dir`, excluding any index, sorted.
fn css_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".css") && name != "index.css")
        .collect();
    names.sort();
    Ok(names)
}
