//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::context::FileContext;
use crate::rule::{Rule, RuleBox};
use crate::syntax::SourceTree;
use crate::types::{LintResult, Violation};
use crate::utils::noqa;

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a Python source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Error walking the tree while respecting ignore files.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Error walking the tree without ignore files.
    #[error("Failed to walk directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The worker pool could not be created.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    fail_on_parse_error: Option<bool>,
    parallelism: Option<usize>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory (or single file) to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a per-file rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed per-file rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether to fail on parse errors, overriding the configuration.
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = Some(fail);
        self
    }

    /// Bounds the number of files analyzed concurrently.
    #[must_use]
    pub fn parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or an
    /// exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        let excludes = exclude_patterns
            .iter()
            .map(String::as_str)
            .map(glob::Pattern::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            root,
            rules: self.rules,
            exclude_patterns,
            excludes,
            fail_on_parse_error: self
                .fail_on_parse_error
                .unwrap_or(config.analyzer.fail_on_parse_error),
            parallelism: self.parallelism.or(config.analyzer.parallelism),
            config,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    excludes: Vec<glob::Pattern>,
    config: Config,
    fail_on_parse_error: bool,
    parallelism: Option<usize>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyzes all files and returns the results.
    ///
    /// Files are analyzed in parallel; violations are grouped per file in
    /// path order and keep the order the rules reported them in.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, a file cannot be read, or a
    /// file fails to parse while `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let outcomes: Vec<Result<Vec<Violation>, AnalyzerError>> = match self.parallelism {
            Some(threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(|| self.analyze_all(&files)),
            None => self.analyze_all(&files),
        };

        let mut result = LintResult::new();
        for outcome in outcomes {
            match outcome {
                Ok(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        // Group by file; within a file keep traversal order
        result
            .violations
            .sort_by(|a, b| a.location.file.cmp(&b.location.file));

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    fn analyze_all(&self, files: &[PathBuf]) -> Vec<Result<Vec<Violation>, AnalyzerError>> {
        files.par_iter().map(|path| self.analyze_file(path)).collect()
    }

    /// Analyzes a single file and returns violations.
    fn analyze_file(&self, path: &Path) -> Result<Vec<Violation>, AnalyzerError> {
        debug!("Analyzing: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.check_source(path, &content)
    }

    /// Runs every enabled rule over in-memory source.
    ///
    /// `path` is only used for reporting and is made relative to the root.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Parse`] if the source is not valid Python.
    pub fn check_source(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Vec<Violation>, AnalyzerError> {
        let tree = SourceTree::parse(content).map_err(|e| AnalyzerError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let ctx = FileContext::new(path, content, self.base());
        let mut violations = Vec::new();

        for rule in &self.rules {
            debug!("Running rule {} on {}", rule.name(), ctx.relative_path.display());
            let rule_violations = rule.check(&ctx, &tree);
            violations.extend(
                rule_violations
                    .into_iter()
                    .filter_map(|v| self.finalize(&ctx, v)),
            );
        }

        Ok(violations)
    }

    // Directory that reported paths are relative to.
    fn base(&self) -> &Path {
        if self.root.is_file() {
            self.root.parent().unwrap_or(&self.root)
        } else {
            &self.root
        }
    }

    /// Applies selection, suppression and severity overrides to a violation.
    fn finalize(&self, ctx: &FileContext<'_>, mut v: Violation) -> Option<Violation> {
        if !self.config.is_code_selected(&v.code) {
            return None;
        }
        if !self.config.is_rule_enabled(&v.code, &v.rule) {
            debug!("Skipping disabled rule: {}", v.code);
            return None;
        }
        if noqa::is_suppressed(ctx.content, v.location.line, &v.code) {
            debug!(
                "Suppressed {} at {}:{}",
                v.code,
                ctx.relative_path.display(),
                v.location.line
            );
            return None;
        }

        if let Some(severity) = self.config.rule_severity(&v.code, &v.rule) {
            v.severity = severity;
        }
        v.location.offset = ctx.offset_for(v.location.line, v.location.column);
        Some(v)
    }

    /// Discovers all Python source files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let mut files = Vec::new();
        if self.config.analyzer.respect_gitignore {
            let mut builder = ignore::WalkBuilder::new(&self.root);
            builder.hidden(false).git_ignore(true).require_git(false);
            for entry in builder.build() {
                let entry = entry?;
                self.consider(entry.path(), &mut files);
            }
        } else {
            for entry in walkdir::WalkDir::new(&self.root) {
                let entry = entry?;
                self.consider(entry.path(), &mut files);
            }
        }

        files.sort();
        Ok(files)
    }

    fn consider(&self, path: &Path, files: &mut Vec<PathBuf>) {
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("py") {
            return;
        }
        if self.should_exclude(path) {
            debug!("Excluding: {}", path.display());
            return;
        }
        files.push(path.to_path_buf());
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(self.base()).unwrap_or(path);

        if self
            .excludes
            .iter()
            .any(|pattern| pattern.matches_path(path) || pattern.matches_path(relative))
        {
            return true;
        }

        // Also check as substring for patterns like "**/venv/**"
        let path_str = path.to_string_lossy();
        self.exclude_patterns.iter().any(|pattern| {
            let clean = pattern.replace("**/", "/").replace("/**", "/");
            clean.len() > 2 && !clean.contains('*') && path_str.contains(&clean)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{position, preorder};
    use crate::types::{Location, Severity};
    use std::fs;

    struct ExecAlias;

    impl Rule for ExecAlias {
        fn name(&self) -> &'static str {
            "exec-alias"
        }

        fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
            preorder(tree.root())
                .filter(|n| n.kind() == "identifier" && tree.text(*n) == "exec_")
                .map(|n| {
                    let (line, column) = position(n);
                    Violation::new(
                        "QGS107",
                        self.name(),
                        Severity::Error,
                        Location::new(ctx.relative_path.clone(), line, column),
                        "QGS107 Use 'exec' instead of 'exec_'",
                    )
                })
                .collect()
        }
    }

    fn analyzer_for(root: &Path, config: Config) -> Analyzer {
        Analyzer::builder()
            .root(root)
            .config(config)
            .rule(ExecAlias)
            .build()
            .expect("Failed to build analyzer")
    }

    #[test]
    fn test_builder() {
        let analyzer = Analyzer::builder()
            .root(".")
            .exclude("**/build/**")
            .rule(ExecAlias)
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.root().exists());
        assert_eq!(analyzer.rule_count(), 1);
    }

    #[test]
    fn invalid_exclude_pattern_is_rejected() {
        let result = Analyzer::builder().root(".").exclude("[").build();
        assert!(matches!(result, Err(AnalyzerError::Glob(_))));
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .root("/work")
            .exclude("**/build/**")
            .exclude("**/venv/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("/work/build/lib/plugin.py")));
        assert!(analyzer.should_exclude(Path::new("/work/venv/site.py")));
        assert!(!analyzer.should_exclude(Path::new("/work/plugin/main.py")));
    }

    #[test]
    fn check_source_sets_offset_and_relative_path() {
        let analyzer = analyzer_for(Path::new("/work"), Config::default());
        let violations = analyzer
            .check_source(Path::new("/work/dialog.py"), "x = 1\ndlg.exec_()\n")
            .expect("valid python");

        assert_eq!(violations.len(), 1);
        let loc = &violations[0].location;
        assert_eq!(loc.file, PathBuf::from("dialog.py"));
        assert_eq!((loc.line, loc.column, loc.offset), (2, 4, 10));
    }

    #[test]
    fn noqa_and_config_filters_apply() {
        let source = "dlg.exec_()  # noqa: QGS107\ndlg.exec_()\n";

        let analyzer = analyzer_for(Path::new("/work"), Config::default());
        let violations = analyzer
            .check_source(Path::new("/work/a.py"), source)
            .expect("valid python");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 2);

        let ignored = Config {
            ignore: vec!["QGS1".into()],
            ..Config::default()
        };
        let analyzer = analyzer_for(Path::new("/work"), ignored);
        assert!(analyzer
            .check_source(Path::new("/work/a.py"), source)
            .expect("valid python")
            .is_empty());

        let regraded = Config::parse("[rules.exec-alias]\nseverity = \"info\"\n").unwrap();
        let analyzer = analyzer_for(Path::new("/work"), regraded);
        let violations = analyzer
            .check_source(Path::new("/work/a.py"), source)
            .expect("valid python");
        assert_eq!(violations[0].severity, Severity::Info);
    }

    #[test]
    fn analyze_walks_python_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("plugin")).unwrap();
        fs::create_dir_all(dir.path().join("venv")).unwrap();
        fs::write(dir.path().join("plugin/b.py"), "dlg.exec_()\n").unwrap();
        fs::write(dir.path().join("a.py"), "w.exec_()\nw.exec_()\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "exec_").unwrap();
        fs::write(dir.path().join("venv/c.py"), "dlg.exec_()\n").unwrap();

        let analyzer = analyzer_for(dir.path(), Config::default());
        let result = analyzer.analyze().expect("analysis succeeds");

        assert_eq!(result.files_checked, 2);
        let files: Vec<_> = result
            .violations
            .iter()
            .map(|v| (v.location.file.clone(), v.location.line))
            .collect();
        assert_eq!(
            files,
            vec![
                (PathBuf::from("a.py"), 1),
                (PathBuf::from("a.py"), 2),
                (PathBuf::from("plugin/b.py"), 1),
            ]
        );
    }

    #[test]
    fn parse_errors_are_skipped_unless_configured() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.py"), "def f(:\n").unwrap();
        fs::write(dir.path().join("ok.py"), "dlg.exec_()\n").unwrap();

        let analyzer = analyzer_for(dir.path(), Config::default());
        let result = analyzer.analyze().expect("broken file skipped");
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations.len(), 1);

        let strict = Analyzer::builder()
            .root(dir.path())
            .rule(ExecAlias)
            .fail_on_parse_error(true)
            .parallelism(1)
            .build()
            .unwrap();
        assert!(matches!(strict.analyze(), Err(AnalyzerError::Parse { .. })));
    }

    #[test]
    fn gitignore_is_respected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "generated/\n").unwrap();
        fs::create_dir_all(dir.path().join("generated")).unwrap();
        fs::write(dir.path().join("generated/ui.py"), "dlg.exec_()\n").unwrap();
        fs::write(dir.path().join("main.py"), "dlg.exec_()\n").unwrap();

        let analyzer = analyzer_for(dir.path(), Config::default());
        assert_eq!(analyzer.analyze().unwrap().files_checked, 1);

        let mut config = Config::default();
        config.analyzer.respect_gitignore = false;
        let analyzer = analyzer_for(dir.path(), config);
        assert_eq!(analyzer.analyze().unwrap().files_checked, 2);
    }

    #[test]
    fn single_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.py");
        fs::write(&file, "dlg.exec_()\n").unwrap();

        let analyzer = analyzer_for(&file, Config::default());
        let result = analyzer.analyze().unwrap();
        assert_eq!(result.files_checked, 1);
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].location.file, PathBuf::from("main.py"));
    }
}
